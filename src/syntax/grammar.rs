//!
//! The productions of the JSON grammar.
//!

use log::trace;

use crate::lexing::{Token, TokenKind, TokenValue};

use super::{Member, Parse, ParseError, Parser, Value};

///
/// `value = false / null / true / object / array / number / string`
///
impl Parse for Value {
    fn parse(input: &mut Parser) -> Result<Self, ParseError> {
        match input.current_kind() {
            TokenKind::BeginArray => {
                delimited(input, TokenKind::BeginArray, TokenKind::EndArray, Value::parse)
                    .map(Value::Array)
            }
            TokenKind::BeginObject => {
                delimited(input, TokenKind::BeginObject, TokenKind::EndObject, Member::parse)
                    .map(Value::Object)
            }
            _ => {
                let Some(value) = input.upcoming().and_then(scalar) else {
                    return Err(input.unexpected());
                };

                input.next();
                Ok(value)
            }
        }
    }
}

///
/// `member = string name-separator value`
///
impl Parse for Member {
    fn parse(input: &mut Parser) -> Result<Self, ParseError> {
        let key = match input
            .upcoming()
            .filter(|token| token.kind() == TokenKind::String)
            .and_then(Token::value)
        {
            Some(TokenValue::String(key)) => key.clone(),
            _ => return Err(input.expected(TokenKind::String)),
        };
        input.next();

        input.expect(TokenKind::Colon)?;
        let value = input.parse_node()?;

        Ok(Self { key, value })
    }
}

///
/// Lifts a literal, number, or string token.
///
fn scalar(token: &Token) -> Option<Value> {
    match (token.kind(), token.value()) {
        (TokenKind::Null, _) => Some(Value::Null),
        (TokenKind::True, _) => Some(Value::Bool(true)),
        (TokenKind::False, _) => Some(Value::Bool(false)),
        (TokenKind::Number | TokenKind::String, Some(value)) => Some(value.clone().into()),
        _ => None,
    }
}

///
/// `open [ item *( value-separator item ) ] close`
///
/// Shared by arrays and objects.
///
fn delimited<T>(
    input: &mut Parser,
    open: TokenKind,
    close: TokenKind,
    mut item: impl FnMut(&mut Parser) -> Result<T, ParseError>,
) -> Result<Vec<T>, ParseError> {
    input.enter()?;
    let items = items_between(input, open, close, &mut item);
    input.leave();

    let items = items?;
    trace!("parsed `{open}` ... `{close}` with {} items", items.len());
    Ok(items)
}

fn items_between<T>(
    input: &mut Parser,
    open: TokenKind,
    close: TokenKind,
    item: &mut impl FnMut(&mut Parser) -> Result<T, ParseError>,
) -> Result<Vec<T>, ParseError> {
    input.expect(open)?;

    let mut items = vec![];
    while !input.is_at_end()
        && input.current_kind() != close
        && (items.is_empty() || input.accept(TokenKind::Comma))
    {
        items.push(item(input)?);
    }

    input.expect(close)?;
    Ok(items)
}
