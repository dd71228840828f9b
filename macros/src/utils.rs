//!
//! Utilities for the utility macros.
//!

use std::ops::Deref;

use syn::parse::{Parse, ParseStream};

///
/// A lit str, but an error is raised
/// if it is empty.
///
pub struct NonEmptyStr(syn::LitStr);

impl Parse for NonEmptyStr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: syn::LitStr = input.parse()?;

        if lit.value().is_empty() {
            return Err(syn::Error::new_spanned(lit, "This should not be empty."));
        }

        Ok(Self(lit))
    }
}

impl Deref for NonEmptyStr {
    type Target = syn::LitStr;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

///
/// Parameters of `#[RfcRef(section, title?)]`.
///
pub struct RfcRef {
    section: NonEmptyStr,
    title: Option<NonEmptyStr>,
}

impl Parse for RfcRef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let section = input.parse()?;

        let title = if input.peek(syn::Token![,]) {
            let _: syn::Token![,] = input.parse()?;
            Some(input.parse()?)
        } else {
            None
        };

        Ok(Self { section, title })
    }
}

///
/// Things that can be rendered as
/// `#[doc = "..."]` attributes.
///
pub trait ToRustdoc {
    fn to_rustdoc(&self) -> Vec<syn::Attribute>;
}

impl ToRustdoc for RfcRef {
    fn to_rustdoc(&self) -> Vec<syn::Attribute> {
        let section = self.section.value();
        let url = format!("https://www.rfc-editor.org/rfc/rfc7159#section-{section}");

        let link = match &self.title {
            Some(title) => format!(" [RFC 7159 §{section}, {}]({url})", title.value()),
            None => format!(" [RFC 7159 §{section}]({url})"),
        };

        [" ### RFC 7159".to_string(), link, " ***".to_string()]
            .into_iter()
            .map(|line| syn::parse_quote!(#[doc = #line]))
            .collect()
    }
}

///
/// Get the attributes of the items we can document.
///
pub fn get_item_attrs(item: &mut syn::Item) -> Option<&mut Vec<syn::Attribute>> {
    match item {
        syn::Item::Const(syn::ItemConst { attrs, .. })
        | syn::Item::Enum(syn::ItemEnum { attrs, .. })
        | syn::Item::Fn(syn::ItemFn { attrs, .. })
        | syn::Item::Static(syn::ItemStatic { attrs, .. })
        | syn::Item::Struct(syn::ItemStruct { attrs, .. })
        | syn::Item::Trait(syn::ItemTrait { attrs, .. })
        | syn::Item::Type(syn::ItemType { attrs, .. }) => Some(attrs),
        _ => None,
    }
}
