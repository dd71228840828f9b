//!
//! ## String literals
//!

use rjson_macros::{RfcRef, Spanned};

use crate::{
    common::Span,
    lexing::{LexError, LexResult, LexT, SourceStream},
};

use super::escapes::EscapeSequence;

///
/// The UTF-16 code units a piece of a string
/// stands for.
///
pub trait CharacterValue {
    fn cv<'a, 'b: 'a>(&'a self, buf: &'b mut [u16; 2]) -> &'b [u16];
}

impl CharacterValue for char {
    fn cv<'a, 'b: 'a>(&'a self, buf: &'b mut [u16; 2]) -> &'b [u16] {
        self.encode_utf16(buf)
    }
}

///
/// A double-quoted string, with its escapes
/// already decoded.
///
#[RfcRef("7", "Strings")]
#[derive(Debug, Clone, PartialEq, Eq, Spanned)]
pub struct JsonString {
    span: Span,
    value: String,
}

impl JsonString {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl LexT for JsonString {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming("\"")
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        // .unwrap() ok since Self::peek() -> `"` is next.
        input.take().unwrap();

        // Collected as UTF-16, so that `\uXXXX` surrogate
        // pairs come back together when decoding.
        let mut units: Vec<u16> = vec![];
        let mut buf = [0; 2];

        loop {
            match input.lex::<EscapeSequence>() {
                LexResult::Lexed(esc) => {
                    units.extend_from_slice(esc.cv(&mut buf));
                    continue;
                }
                LexResult::Errant(LexError::UnterminatedString { .. }) => break,
                LexResult::Errant(err) => return Err(err),
                LexResult::Nothing => (),
            }

            match input.take() {
                Some((_, '"')) => {
                    let value = char::decode_utf16(units)
                        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
                        .collect();

                    return Ok(Self {
                        span: input.token_span(),
                        value,
                    });
                }
                Some((_, ch)) => units.extend_from_slice(ch.cv(&mut buf)),
                None => break,
            }
        }

        Err(LexError::UnterminatedString {
            span: input.token_span(),
        })
    }
}
