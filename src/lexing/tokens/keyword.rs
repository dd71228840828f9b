//!
//! ## Literal names
//!
//! `null`, `true` and `false`.
//!

use rjson_macros::{RfcRef, Spanned};

use crate::{
    common::{Span, Spanned as _},
    lexing::{LexError, LexT, SourceStream},
};

use super::TokenKind;

#[RfcRef("3", "Values")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Spanned)]
pub enum Keyword {
    Null(Span),
    True(Span),
    False(Span),
}

impl Keyword {
    pub fn kind(&self) -> TokenKind {
        match self {
            Keyword::Null(_) => TokenKind::Null,
            Keyword::True(_) => TokenKind::True,
            Keyword::False(_) => TokenKind::False,
        }
    }
}

///
/// The keyword a leading character commits us to.
///
fn keyword_for(ch: &char) -> Option<&'static str> {
    match ch {
        'n' => Some("null"),
        't' => Some("true"),
        'f' => Some("false"),
        _ => None,
    }
}

impl LexT for Keyword {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming(|ch: &char| keyword_for(ch).is_some())
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        // .unwrap() ok since Self::peek() -> a keyword's first character is next.
        let expected = input.peek().and_then(keyword_for).unwrap();

        for ch in expected.chars() {
            if input.peek() != Some(&ch) {
                return Err(LexError::BadKeyword {
                    expected,
                    span: input.span(),
                });
            }
            input.take();
        }

        let span = input.token_span();
        Ok(match expected {
            "null" => Self::Null(span),
            "true" => Self::True(span),
            _ => Self::False(span),
        })
    }
}
