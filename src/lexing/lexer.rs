//!
//! The scanner: source text in, tokens out.
//!

use log::{debug, trace};

use crate::common::{SourceText, Spanned};

use super::{
    tokens::{JsonNumber, JsonString, Keyword, Punctuator, Token, TokenKind, WhiteSpace},
    LexError, LexT, SourceStream,
};

///
/// Everything a [Lexer] managed to produce.
///
/// On failure, `tokens` still holds every token emitted
/// before the error, but no [TokenKind::EndOfInput].
///
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub error: Option<LexError>,
}

impl Lexed {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    ///
    /// Discards the partial tokens on failure.
    ///
    pub fn into_result(self) -> Result<Vec<Token>, LexError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.tokens),
        }
    }
}

///
/// Lexes a whole document.
///
pub fn lex(source: &str) -> Lexed {
    let chars = source.chars().collect::<Vec<_>>();
    Lexer::new(&chars).lex()
}

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    stream: SourceStream<'a>,
    error: Option<LexError>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [char]) -> Self {
        Self {
            stream: SourceStream::new(source),
            error: None,
            finished: false,
        }
    }

    pub fn from_source(source: &'a SourceText) -> Self {
        Self::new(source.characters())
    }

    ///
    /// The first error encountered, if any.
    ///
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    ///
    /// Scans the next token.
    ///
    /// Once the input is exhausted, every call
    /// returns a [TokenKind::EndOfInput] token.
    ///
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let input = &mut self.stream;
        input.begin();

        if WhiteSpace::peek(input) {
            WhiteSpace::lex(input)?;
            return self.next_token();
        }

        if input.is_at_end() {
            return Ok(Token::end_of_input(input.current()));
        }

        input
            .lex::<Punctuator>()
            .map(Token::from)
            .or(|| input.lex::<JsonString>().map(Token::from))
            .or(|| input.lex::<JsonNumber>().map(Token::from))
            .or(|| input.lex::<Keyword>().map(Token::from))
            .or_error(|| LexError::UnexpectedCharacter {
                // .unwrap() ok since we're not at the end.
                ch: *input.peek().unwrap(),
                span: input.span(),
            })
    }

    ///
    /// Scans every token, stopping at the first error.
    ///
    pub fn lex(mut self) -> Lexed {
        let mut tokens = vec![];

        for result in self.by_ref() {
            match result {
                Ok(token) => tokens.push(token),
                Err(_) => break,
            }
        }

        match &self.error {
            Some(err) => debug!("lexing stopped after {} tokens: {err}", tokens.len()),
            None => debug!("lexed {} tokens", tokens.len()),
        }

        Lexed {
            tokens,
            error: self.error,
        }
    }
}

///
/// Yields tokens up to, and including, [TokenKind::EndOfInput],
/// or up to the first error.
///
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) => {
                trace!("{token}");
                self.finished = token.kind() == TokenKind::EndOfInput;
            }
            Err(err) => {
                self.error = Some(err.clone());
                self.finished = true;
            }
        }

        Some(result)
    }
}
