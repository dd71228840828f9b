//!
//! Macros for the main crate.
//!

mod type_traversal;
mod utils;

use proc_macro::TokenStream as Tokens;
use quote::{quote, ToTokens};
use syn::parse_macro_input;
use type_traversal::{field_access, is_named_type, variant_path, ToMember};
use utils::{get_item_attrs, RfcRef, ToRustdoc};

///
/// ## RfcRef
///
/// Allows easy reference of the **RFC 7159** (JSON) specification.
///
/// This macro will add an additional section at the top of the Rustdoc
/// for the item attached, linking to the relevant section in the RFC.
///
/// ### Example
///
/// ```ignore
/// use rjson_macros::RfcRef;
///
/// // With custom title.
/// #[RfcRef("7", "Strings")]
/// struct JsonString;
///
/// // Without custom title.
/// #[RfcRef("6")]
/// struct JsonNumber;
/// ```
///
#[allow(non_snake_case)]
#[proc_macro_attribute]
pub fn RfcRef(params: Tokens, target: Tokens) -> Tokens {
    let mut target: syn::Item = parse_macro_input!(target);
    let params: RfcRef = parse_macro_input!(params);
    let attrs = params.to_rustdoc();

    let Some(original_attrs) = get_item_attrs(&mut target) else {
        return syn::Error::new_spanned(target, "Cannot add RFC ref to this item.")
            .into_compile_error()
            .into();
    };

    // Prepend our new documentation to the start of
    // the attribute macros.
    *original_attrs = attrs
        .into_iter()
        .chain(original_attrs.iter().cloned())
        .collect();

    target.into_token_stream().into()
}

///
/// ## Spanned
///
/// Implements `crate::common::Spanned` for a struct or an enum.
///
/// * Structs must have a field named `span`, or a field of type `Span`.
/// * Enum variants must either wrap exactly one [Spanned] value,
///     or have a named `span` field.
///
#[proc_macro_derive(Spanned)]
pub fn derive_spanned(target: Tokens) -> Tokens {
    let input: syn::DeriveInput = parse_macro_input!(target);

    let body = match &input.data {
        syn::Data::Struct(st) => match span_of_struct(&st.fields) {
            Some(expr) => quote! { #expr },
            None => {
                return syn::Error::new_spanned(
                    &input.ident,
                    "Expected a `span` field, or a field of type `Span`.",
                )
                .into_compile_error()
                .into()
            }
        },
        syn::Data::Enum(en) => {
            let mut arms = vec![];
            for variant in &en.variants {
                let path = variant_path(&variant.ident);
                let arm = match &variant.fields {
                    syn::Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => quote! {
                        #path(inner) => crate::common::Spanned::span(inner),
                    },
                    syn::Fields::Named(named)
                        if named
                            .named
                            .iter()
                            .any(|f| f.ident.as_ref().is_some_and(|i| i == "span")) =>
                    {
                        quote! {
                            #path { span, .. } => *span,
                        }
                    }
                    _ => {
                        return syn::Error::new_spanned(
                            variant,
                            "Variant must wrap one spanned value, or have a `span` field.",
                        )
                        .into_compile_error()
                        .into()
                    }
                };
                arms.push(arm);
            }

            quote! {
                match self {
                    #(#arms)*
                }
            }
        }
        syn::Data::Union(_) => {
            return syn::Error::new_spanned(&input.ident, "Unions cannot be spanned.")
                .into_compile_error()
                .into()
        }
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics crate::common::Spanned for #ident #ty_generics #where_clause {
            fn span(&self) -> crate::common::Span {
                #body
            }
        }
    }
    .into()
}

///
/// Finds the expression for the span of a struct:
/// `self.span`, or the first field typed `Span`.
///
fn span_of_struct(fields: &syn::Fields) -> Option<syn::Expr> {
    match fields {
        syn::Fields::Named(syn::FieldsNamed { named, .. }) => named
            .iter()
            .find(|f| f.ident.as_ref().is_some_and(|i| i == "span"))
            .or_else(|| named.iter().find(|f| is_named_type(&f.ty, "Span").is_some()))
            .and_then(|f| f.ident.clone())
            .map(|ident| field_access(ident.to_member())),
        syn::Fields::Unnamed(syn::FieldsUnnamed { unnamed, .. }) => unnamed
            .iter()
            .position(|f| is_named_type(&f.ty, "Span").is_some())
            .map(|i| field_access(type_traversal::index(i as u32).to_member())),
        syn::Fields::Unit => None,
    }
}
