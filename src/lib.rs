//!
//! ## rjson
//!
//! A strict [RFC 7159](https://www.rfc-editor.org/rfc/rfc7159) JSON
//! scanner and recursive-descent parser.
//!
//! Text is first [lexed](lexing) into [Token]s, which are then
//! [parsed](syntax) into a [Value] tree.
//!
//! ```rust
//! let value = rjson::from_str(r#"{"answer": [42]}"#).unwrap();
//! assert_eq!(value.get("answer").and_then(|v| v.as_array()).map(|a| a.len()), Some(1));
//! ```
//!

pub mod common;
pub mod config;
pub mod lexing;
pub mod syntax;

use std::str::FromStr;

use rjson_macros::Spanned;
use thiserror::Error;

use crate::common::{LineColumn, SourceText};

pub use crate::{
    config::Options,
    lexing::{lex, LexError, Lexed, Token, TokenKind, TokenValue},
    syntax::{parse, Member, ParseError, Parser, Value},
};

///
/// An error from either stage.
///
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash, Spanned)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] ParseError),
}

impl Error {
    ///
    /// Where in `source` this error happened.
    ///
    pub fn locate<'a>(&self, source: &'a SourceText) -> Option<LineColumn<'a>> {
        source.locate(self)
    }
}

///
/// Parses exactly one JSON document.
///
pub fn from_str(source: &str) -> Result<Value, Error> {
    from_str_with(source, Options::default())
}

///
/// Parses one JSON document, as configured by `options`.
///
pub fn from_str_with(source: &str, options: Options) -> Result<Value, Error> {
    let tokens = lex(source).into_result()?;
    Ok(from_tokens(&tokens, options)?)
}

///
/// Parses already-lexed tokens as one document,
/// as configured by `options`.
///
pub fn from_tokens(tokens: &[Token], options: Options) -> Result<Value, ParseError> {
    let mut parser = Parser::with_options(tokens, options);
    let value = parser.parse()?;
    if !options.allow_trailing {
        parser.finish()?;
    }

    Ok(value)
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}
