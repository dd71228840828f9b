//!
//! Lexical tokens.
//!

pub mod escapes;
pub mod keyword;
pub mod number;
pub mod punctuator;
pub mod string;
pub mod whitespace;

use std::fmt::{Display, Formatter};

use rjson_macros::{RfcRef, Spanned};

use crate::common::{Loc, Span, Spanned};

pub use self::{
    keyword::Keyword, number::JsonNumber, punctuator::Punctuator, string::JsonString,
    whitespace::WhiteSpace,
};

///
/// The closed set of lexical categories.
///
/// Errors are not a kind of token: they travel
/// on their own channel, see [crate::lexing::LexError].
///
#[RfcRef("2", "JSON Grammar")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `false`
    False,
    /// `true`
    True,
    /// `null`
    Null,
    Number,
    String,
    ///
    /// Emitted once, after the last real token.
    ///
    EndOfInput,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TokenKind::BeginArray => "[",
            TokenKind::EndArray => "]",
            TokenKind::BeginObject => "{",
            TokenKind::EndObject => "}",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::False => "false",
            TokenKind::True => "true",
            TokenKind::Null => "null",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::EndOfInput => "EOF",
        })
    }
}

///
/// The decoded value of a literal token.
///
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Bool(b) => write!(f, "{b}"),
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::String(s) => write!(f, "{s:?}"),
        }
    }
}

///
/// A classified, positioned fragment of source text.
///
/// Only `string`, `number`, `true` and `false` tokens carry a value.
///
#[derive(Debug, Clone, PartialEq, Spanned)]
pub struct Token {
    kind: TokenKind,
    span: Span,
    value: Option<TokenValue>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, value: impl Into<Option<TokenValue>>) -> Self {
        Self {
            kind,
            span,
            value: value.into(),
        }
    }

    ///
    /// The zero-width token marking the end of input.
    ///
    pub fn end_of_input(at: Loc) -> Self {
        Self::new(TokenKind::EndOfInput, Span::empty(at), None)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> Option<&TokenValue> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<TokenValue> {
        self.value
    }

    ///
    /// Start offset, in characters.
    ///
    pub fn start(&self) -> usize {
        self.span.start.0
    }

    ///
    /// Length, in characters.
    ///
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} char {}:{}, ",
            self.kind,
            self.span.start.0,
            self.span.end.0
        )?;

        match &self.value {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("null"),
        }
    }
}

impl From<Punctuator> for Token {
    fn from(value: Punctuator) -> Self {
        Self::new(value.kind(), value.span(), None)
    }
}

impl From<Keyword> for Token {
    fn from(value: Keyword) -> Self {
        let decoded = match value {
            Keyword::True(_) => Some(TokenValue::Bool(true)),
            Keyword::False(_) => Some(TokenValue::Bool(false)),
            Keyword::Null(_) => None,
        };

        Self::new(value.kind(), value.span(), decoded)
    }
}

impl From<JsonNumber> for Token {
    fn from(value: JsonNumber) -> Self {
        Self::new(
            TokenKind::Number,
            value.span(),
            TokenValue::Number(value.value()),
        )
    }
}

impl From<JsonString> for Token {
    fn from(value: JsonString) -> Self {
        let span = value.span();
        Self::new(
            TokenKind::String,
            span,
            TokenValue::String(value.into_value()),
        )
    }
}
