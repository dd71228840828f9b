//!
//! Syntax Grammar.
//!
//! A recursive-descent parser over the tokens
//! produced by [crate::lexing].
//!

pub mod grammar;
pub mod value;

use log::debug;
use rjson_macros::Spanned;
use thiserror::Error;

use crate::{
    common::{Span, Spanned},
    config::Options,
    lexing::{Token, TokenKind},
};

pub use self::value::{Member, Value};

///
/// Errors that can occur during parsing.
///
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash, Spanned)]
pub enum ParseError {
    ///
    /// A token that cannot start a value.
    ///
    #[error("unexpected token `{found}` at {}", .span.start)]
    Unexpected { found: TokenKind, span: Span },

    #[error("expected `{expected}`, got `{found}` at {}", .span.start)]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    #[error("nesting deeper than {limit} levels at {}", .span.start)]
    TooDeep { limit: usize, span: Span },

    ///
    /// Only raised by [Parser::finish].
    ///
    #[error("unexpected trailing `{found}` after value at {}", .span.start)]
    TrailingInput { found: TokenKind, span: Span },
}

///
/// Something that can be parsed from tokens.
///
pub trait Parse: Sized {
    fn parse(input: &mut Parser) -> Result<Self, ParseError>;
}

///
/// Parses a single value, ignoring anything after it.
///
pub fn parse(tokens: &[Token]) -> Result<Value, ParseError> {
    Parser::new(tokens).parse()
}

///
/// A cursor over a token sequence.
///
/// The sequence may, but need not, end with a
/// [TokenKind::EndOfInput] token: running out
/// of tokens counts as the end, too.
///
#[derive(Debug, Clone)]
pub struct Parser<'t> {
    tokens: &'t [Token],
    index: usize,
    depth: usize,
    options: Options,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_options(tokens, Options::default())
    }

    pub fn with_options(tokens: &'t [Token], options: Options) -> Self {
        Self {
            tokens,
            index: 0,
            depth: 0,
            options,
        }
    }

    ///
    /// Parses one value starting at the current token.
    ///
    /// Tokens following the value are left alone,
    /// see [Parser::finish].
    ///
    pub fn parse(&mut self) -> Result<Value, ParseError> {
        let result = self.parse_node::<Value>();
        match &result {
            Ok(value) => debug!("parsed {} ending at token {}", value.kind_name(), self.index),
            Err(err) => debug!("parsing failed: {err}"),
        }

        result
    }

    pub fn parse_node<P: Parse>(&mut self) -> Result<P, ParseError> {
        P::parse(self)
    }

    ///
    /// Checks that nothing but the end of input remains.
    ///
    pub fn finish(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            return Ok(());
        }

        let (found, span) = self.here();
        Err(ParseError::TrailingInput { found, span })
    }

    ///
    /// The token under the cursor.
    ///
    pub fn upcoming(&self) -> Option<&'t Token> {
        self.tokens.get(self.index)
    }

    pub fn current_kind(&self) -> TokenKind {
        self.upcoming()
            .map(Token::kind)
            .unwrap_or(TokenKind::EndOfInput)
    }

    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::EndOfInput
    }

    pub fn position(&self) -> usize {
        self.index
    }

    ///
    /// Consumes the current token if it is a `kind`,
    /// otherwise leaves the cursor where it is.
    ///
    pub fn accept(&mut self, kind: TokenKind) -> bool {
        match self.next() {
            Some(token) if token.kind() == kind => true,
            Some(_) => {
                self.backup();
                false
            }
            None => false,
        }
    }

    ///
    /// Like [Parser::accept], but a mismatch is an error.
    ///
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, ParseError> {
        let token = self.upcoming();
        if self.accept(kind) {
            // .unwrap() ok since accept() just consumed it.
            return Ok(token.unwrap());
        }

        Err(self.expected(kind))
    }

    pub fn backup(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    ///
    /// Marks the start of an array or object.
    ///
    pub(crate) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            let (_, span) = self.here();
            return Err(ParseError::TooDeep {
                limit: self.options.max_depth,
                span,
            });
        }

        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn unexpected(&self) -> ParseError {
        let (found, span) = self.here();
        ParseError::Unexpected { found, span }
    }

    pub(crate) fn expected(&self, expected: TokenKind) -> ParseError {
        let (found, span) = self.here();
        ParseError::Expected {
            expected,
            found,
            span,
        }
    }

    ///
    /// What the cursor is looking at, for error reporting.
    ///
    /// Past the last token, this is an empty span
    /// just after it.
    ///
    fn here(&self) -> (TokenKind, Span) {
        match self.upcoming() {
            Some(token) => (token.kind(), token.span()),
            None => {
                let end = self
                    .tokens
                    .last()
                    .map(|token| token.span().end())
                    .unwrap_or_default();
                (TokenKind::EndOfInput, Span::empty(end))
            }
        }
    }
}

impl<'t> Iterator for Parser<'t> {
    type Item = &'t Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::{Span, Spanned},
        config::Options,
        lexing::{lex, Token, TokenKind},
    };

    use super::{parse, ParseError, Parser, Value};

    fn tokens(source: &str) -> Vec<Token> {
        lex(source).into_result().expect("Should lex")
    }

    #[test]
    fn accept() {
        let tokens = tokens("[1]");
        let mut parser = Parser::new(&tokens);

        assert!(!parser.accept(TokenKind::BeginObject));
        assert_eq!(parser.position(), 0);
        assert!(parser.accept(TokenKind::BeginArray));
        assert_eq!(parser.position(), 1);
        assert!(parser.accept(TokenKind::Number));
        assert!(parser.accept(TokenKind::EndArray));
        assert!(parser.is_at_end());
        assert!(parser.accept(TokenKind::EndOfInput));

        // Exhausted: nothing moves.
        assert!(!parser.accept(TokenKind::EndOfInput));
        assert_eq!(parser.position(), 4);
        assert!(parser.is_at_end());
    }

    #[test]
    fn exhausted_without_eof_token() {
        let tokens = tokens("[true");
        let without_eof = &tokens[..tokens.len() - 1];

        let err = parse(without_eof).expect_err("Should fail");
        assert_eq!(
            err,
            ParseError::Expected {
                expected: TokenKind::EndArray,
                found: TokenKind::EndOfInput,
                span: Span::empty(5),
            }
        );
        assert_eq!(parse(&[]).map_err(|e| e.span()), Err(Span::empty(0)));
    }

    #[test]
    fn trailing_tokens() {
        let tokens = tokens("1 2");
        let mut parser = Parser::new(&tokens);

        assert_eq!(parser.parse(), Ok(Value::Number(1.0)));
        let err = parser.finish().expect_err("Should have trailing input");
        assert_eq!(
            err,
            ParseError::TrailingInput {
                found: TokenKind::Number,
                span: Span::new(2, 3),
            }
        );
        assert!(err.to_string().contains("trailing `number`"));

        let tokens = self::tokens(" {} ");
        let mut parser = Parser::new(&tokens);
        assert!(parser.parse().is_ok());
        assert_eq!(parser.finish(), Ok(()));
    }

    #[test]
    fn depth_limit() {
        let nested = |n: usize| format!("{}{}", "[".repeat(n), "]".repeat(n));

        let tokens = tokens(&nested(3));
        assert!(Parser::with_options(&tokens, Options::new().max_depth(3))
            .parse()
            .is_ok());

        let err = Parser::with_options(&tokens, Options::new().max_depth(2))
            .parse()
            .expect_err("Should be too deep");
        assert_eq!(
            err,
            ParseError::TooDeep {
                limit: 2,
                span: Span::new(2, 3),
            }
        );

        // Scalars don't count.
        let tokens = self::tokens("1");
        assert!(Parser::with_options(&tokens, Options::new().max_depth(0))
            .parse()
            .is_ok());

        let tokens = self::tokens(&nested(600));
        assert!(matches!(
            parse(&tokens),
            Err(ParseError::TooDeep { limit: 512, .. })
        ));
    }

    #[test]
    fn depth_restored_after_error() {
        let tokens = tokens("[[1,]]");
        let mut parser = Parser::with_options(&tokens, Options::new().max_depth(2));

        assert!(matches!(
            parser.parse(),
            Err(ParseError::Unexpected {
                found: TokenKind::EndArray,
                ..
            })
        ));
        assert_eq!(parser.depth, 0);
    }

    #[test]
    fn messages() {
        let err = parse(&tokens("]")).expect_err("Should fail");
        assert_eq!(err.to_string(), "unexpected token `]` at char 0");

        let err = parse(&tokens(r#"{"a" 1}"#)).expect_err("Should fail");
        assert_eq!(err.to_string(), "expected `:`, got `number` at char 5");
    }
}
