//!
//! The process of lexing involves converting [char]s
//! from source code into lexical tokens according to
//! some [lexical grammar](https://en.wikipedia.org/wiki/Lexical_grammar).
//!

pub mod lexer;
pub mod tokens;
pub mod utils;

pub use self::{
    lexer::{lex, Lexed, Lexer},
    tokens::{Token, TokenKind, TokenValue},
    utils::{LexError, LexResult, LexT, NumberError, SourceStream},
};
