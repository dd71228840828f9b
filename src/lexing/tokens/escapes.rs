//!
//! ## Escape Codes
//!
//! Technically not tokens.
//! These only appear inside strings.
//!

use rjson_macros::{RfcRef, Spanned};

use crate::{
    common::{Span, Spanned as _},
    lexing::{LexError, LexT, SourceStream},
};

use super::string::CharacterValue;

///
/// Any valid JSON escape sequence:
///
/// ```json
/// "\n"      // Escaped character
/// "\u0A1B"  // Unicode escape
/// ```
///
#[RfcRef("7", "Strings")]
#[derive(Debug, Clone, PartialEq, Eq, Spanned)]
pub enum EscapeSequence {
    Single(SingleEscapeChar),
    Unicode(UnicodeEscapeSequence),
}

///
/// An escape character, like `\t` for `HORIZONTAL TAB`.
///
#[derive(Debug, Clone, PartialEq, Eq, Spanned)]
pub struct SingleEscapeChar {
    span: Span,
    raw: char,
}

///
/// `\u` followed by exactly four hex digits,
/// holding one UTF-16 code unit.
///
#[derive(Debug, Clone, PartialEq, Eq, Spanned)]
pub struct UnicodeEscapeSequence {
    span: Span,
    code_unit: u16,
}

fn is_single_escape_char(ch: &char) -> bool {
    matches!(ch, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')
}

// ---

impl LexT for EscapeSequence {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming("\\")
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        let start = input.current();

        // .unwrap() ok since Self::peek() -> `\` is next.
        input.take().unwrap();

        match input.peek() {
            Some(ch) if is_single_escape_char(ch) => {
                // Unwrap ok since we just peeked a character.
                let (_, raw) = input.take().unwrap();
                Ok(Self::Single(SingleEscapeChar {
                    span: Span::new(start, input.current()),
                    raw,
                }))
            }
            Some('u') => {
                input.take();
                let mut code_unit: u16 = 0;

                for _ in 0..4 {
                    let Some(digit) = input.peek().and_then(|ch| ch.to_digit(16)) else {
                        return Err(LexError::InvalidUnicodeEscape { span: input.span() });
                    };
                    input.take();

                    // At most four hex digits, so this never overflows.
                    code_unit = code_unit * 16 + digit as u16;
                }

                Ok(Self::Unicode(UnicodeEscapeSequence {
                    span: Span::new(start, input.current()),
                    code_unit,
                }))
            }
            Some(&ch) => Err(LexError::InvalidEscape {
                ch,
                span: input.span(),
            }),
            None => Err(LexError::UnterminatedString {
                span: Span::new(start, input.current()),
            }),
        }
    }
}

// ---

impl CharacterValue for EscapeSequence {
    fn cv<'a, 'b: 'a>(&'a self, buf: &'b mut [u16; 2]) -> &'b [u16] {
        match self {
            EscapeSequence::Single(single) => single.cv(buf),
            EscapeSequence::Unicode(unicode) => unicode.cv(buf),
        }
    }
}

impl CharacterValue for SingleEscapeChar {
    fn cv<'a, 'b: 'a>(&'a self, buf: &'b mut [u16; 2]) -> &'b [u16] {
        match self.raw {
            '"' => '\u{0022}',  // quotation mark
            '\\' => '\u{005C}', // reverse solidus
            '/' => '\u{002F}',  // solidus
            'b' => '\u{0008}',  // backspace
            'f' => '\u{000C}',  // form feed
            'n' => '\u{000A}',  // line feed
            'r' => '\u{000D}',  // carriage return
            't' => '\u{0009}',  // tab
            _ => unreachable!(),
        }
        .encode_utf16(buf)
    }
}

impl CharacterValue for UnicodeEscapeSequence {
    fn cv<'a, 'b: 'a>(&'a self, buf: &'b mut [u16; 2]) -> &'b [u16] {
        buf[0] = self.code_unit;
        &buf[0..1]
    }
}
