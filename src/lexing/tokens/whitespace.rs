//!
//! ## WhiteSpace
//! Empty space that doesn't contribute syntactically.
//!

use rjson_macros::{RfcRef, Spanned};

use crate::{
    common::Span,
    lexing::{LexError, LexT, SourceStream},
};

///
/// Insignificant whitespace: a run of
/// space, horizontal tab, line feed, or carriage return.
///
#[RfcRef("2", "JSON Grammar")]
#[derive(Debug, Spanned)]
pub struct WhiteSpace {
    span: Span,
}

///
/// Is this character whitespace?
///
pub fn is_whitespace(ch: &char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

impl LexT for WhiteSpace {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming(is_whitespace)
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        input.accept_while(is_whitespace);

        Ok(Self {
            span: input.token_span(),
        })
    }
}
