//!
//! ## Punctuators
//!
//! Pieces of punctuation: `{}[]:,`.
//!

use rjson_macros::{RfcRef, Spanned};

use crate::{
    common::{Loc, Span},
    lexing::{LexError, LexT, SourceStream},
};

use super::TokenKind;

///
/// `[ ] { } : ,`
///
#[RfcRef("2", "Structural characters")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Spanned)]
pub enum Punctuator {
    OpenBracket(Span),
    CloseBracket(Span),
    OpenBrace(Span),
    CloseBrace(Span),
    Colon(Span),
    Comma(Span),
}

impl Punctuator {
    fn from_char(ch: char, loc: Loc) -> Option<Self> {
        let span = Span::from(loc);
        Some(match ch {
            '[' => Self::OpenBracket(span),
            ']' => Self::CloseBracket(span),
            '{' => Self::OpenBrace(span),
            '}' => Self::CloseBrace(span),
            ':' => Self::Colon(span),
            ',' => Self::Comma(span),
            _ => return None,
        })
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Self::OpenBracket(_) => TokenKind::BeginArray,
            Self::CloseBracket(_) => TokenKind::EndArray,
            Self::OpenBrace(_) => TokenKind::BeginObject,
            Self::CloseBrace(_) => TokenKind::EndObject,
            Self::Colon(_) => TokenKind::Colon,
            Self::Comma(_) => TokenKind::Comma,
        }
    }
}

impl LexT for Punctuator {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming(|ch: &char| matches!(ch, '[' | ']' | '{' | '}' | ':' | ','))
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        // .unwrap() ok since Self::peek() -> next character exists.
        let (loc, ch) = input.take().unwrap();

        // Ditto: Self::peek() -> this is one of ours.
        Ok(Self::from_char(ch, loc).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::{Span, Spanned},
        lexing::{LexResult, SourceStream},
    };

    use super::Punctuator;

    #[test]
    fn mixed_test() {
        let source = "{}[]:,".chars().collect::<Vec<_>>();
        let input = &mut SourceStream::new(&source);

        let mut puncts = vec![];
        while let LexResult::Lexed(p) = input.lex::<Punctuator>() {
            puncts.push(p);
        }

        assert!(matches!(
            &puncts[..],
            &[
                Punctuator::OpenBrace(_),
                Punctuator::CloseBrace(_),
                Punctuator::OpenBracket(_),
                Punctuator::CloseBracket(_),
                Punctuator::Colon(_),
                Punctuator::Comma(_)
            ]
        ));
        assert_eq!(puncts[3].span(), Span::new(3, 4));
    }

    #[test]
    fn not_punctuation() {
        let source = "x".chars().collect::<Vec<_>>();
        let input = &mut SourceStream::new(&source);
        assert!(input.lex::<Punctuator>().is_nothing());
    }
}
