//!
//! Lexical errors, and the result of attempting to lex a token.
//!

use finl_unicode::categories::{CharacterCategories, MajorCategory};
use rjson_macros::Spanned;
use thiserror::Error;

use crate::common::Span;

///
/// Why a number could not be lexed.
///
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum NumberError {
    #[error("leading zeros are not allowed")]
    LeadingZero,

    #[error("expected a digit")]
    MissingDigit,

    #[error("expected a digit after `.`")]
    MissingFractionDigit,

    #[error("expected a digit in the exponent")]
    MissingExponentDigit,
}

///
/// Errors that can occur during lexing.
///
/// Every message leads with its category, so that
/// callers can match on `bad string`, `bad number`, etc.
///
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash, Spanned)]
pub enum LexError {
    ///
    /// A character that cannot start any token.
    ///
    #[error("unexpected character {} at {}", describe(.ch), .span.start)]
    UnexpectedCharacter { ch: char, span: Span },

    ///
    /// Input ended before the closing `"`.
    ///
    #[error("bad string: missing closing `\"` for string starting at {}", .span.start)]
    UnterminatedString { span: Span },

    #[error("bad string: unknown escape sequence `\\{}` at {}", .ch.escape_debug(), .span.start)]
    InvalidEscape { ch: char, span: Span },

    #[error("bad string: expected four hex digits after `\\u` at {}", .span.start)]
    InvalidUnicodeEscape { span: Span },

    #[error("bad number: {reason} at {}", .span.start)]
    BadNumber { reason: NumberError, span: Span },

    ///
    /// Something starting like `null`, `true` or `false`, that isn't.
    ///
    #[error("bad literal: expected `{expected}` at {}", .span.start)]
    BadKeyword { expected: &'static str, span: Span },
}

///
/// Renders a character for an error message.
///
/// Invisible characters (controls, separators, etc.)
/// are shown by their code point instead.
///
fn describe(ch: &char) -> String {
    match ch.get_major_category() {
        MajorCategory::C | MajorCategory::Z => format!("U+{:04X}", *ch as u32),
        _ => format!("`{ch}`"),
    }
}

///
/// The result of attempting to lex token `L`
/// from a [super::SourceStream].
///
#[derive(Debug)]
pub enum LexResult<L> {
    ///
    /// Valid token.
    ///
    Lexed(L),

    ///
    /// An attempt was made to lex a token,
    /// but it did not fully abide by the lexical grammar.
    ///
    Errant(LexError),

    ///
    /// The token `L` was not found,
    /// so the lexing was skipped.
    ///
    Nothing,
}

impl<L> LexResult<L> {
    pub fn map<T>(self, f: impl FnOnce(L) -> T) -> LexResult<T> {
        match self {
            LexResult::Lexed(l) => LexResult::Lexed(f(l)),
            LexResult::Errant(err) => LexResult::Errant(err),
            LexResult::Nothing => LexResult::Nothing,
        }
    }

    ///
    /// Only try the alternative if nothing was found:
    /// errors are not recovered from.
    ///
    pub fn or(self, f: impl FnOnce() -> LexResult<L>) -> LexResult<L> {
        match self {
            LexResult::Nothing => f(),
            other => other,
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, LexResult::Nothing)
    }

    ///
    /// Turns [LexResult::Nothing] into the supplied error.
    ///
    pub fn or_error(self, f: impl FnOnce() -> LexError) -> Result<L, LexError> {
        match self {
            LexResult::Lexed(l) => Ok(l),
            LexResult::Errant(err) => Err(err),
            LexResult::Nothing => Err(f()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::common::{Loc, Span};

    use super::{LexError, LexResult, NumberError};

    #[test]
    fn messages() {
        let err = LexError::BadNumber {
            reason: NumberError::LeadingZero,
            span: Span::from(Loc(1)),
        };
        assert_eq!(
            err.to_string(),
            "bad number: leading zeros are not allowed at char 1"
        );

        let err = LexError::UnexpectedCharacter {
            ch: '\u{7}',
            span: Span::from(Loc(0)),
        };
        assert_eq!(err.to_string(), "unexpected character U+0007 at char 0");

        let err = LexError::UnexpectedCharacter {
            ch: '@',
            span: Span::from(Loc(3)),
        };
        assert_eq!(err.to_string(), "unexpected character `@` at char 3");

        let err = LexError::InvalidEscape {
            ch: 'x',
            span: Span::from(Loc(2)),
        };
        assert_eq!(
            err.to_string(),
            "bad string: unknown escape sequence `\\x` at char 2"
        );
    }

    #[test]
    fn lex_result() {
        fn dummy_lexer(input: usize) -> LexResult<usize> {
            match input % 3 {
                0 => LexResult::Lexed(input),
                1 => LexResult::Nothing,
                _ => LexResult::Errant(LexError::InvalidUnicodeEscape {
                    span: Span::from(Loc(input)),
                }),
            }
        }

        assert!(matches!(
            dummy_lexer(1).or(|| dummy_lexer(3)),
            LexResult::Lexed(3)
        ));
        assert!(matches!(
            dummy_lexer(2).or(|| dummy_lexer(3)),
            LexResult::Errant(_)
        ));
        assert!(dummy_lexer(4).or(|| dummy_lexer(7)).is_nothing());
        assert!(dummy_lexer(1)
            .or_error(|| LexError::InvalidUnicodeEscape {
                span: Span::empty(0)
            })
            .is_err());
    }
}
