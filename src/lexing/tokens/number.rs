//!
//! ## Number
//!
//! `[ minus ] int [ frac ] [ exp ]`, read as a double.
//!

use rjson_macros::{RfcRef, Spanned};

use crate::{
    common::{Span, Spanned as _},
    lexing::{LexError, LexT, NumberError, SourceStream},
};

#[RfcRef("6", "Numbers")]
#[derive(Debug, Clone, Copy, PartialEq, Spanned)]
pub struct JsonNumber {
    span: Span,
    value: f64,
}

impl JsonNumber {
    pub fn value(&self) -> f64 {
        self.value
    }
}

const DIGIT_1_9: &str = "123456789";

fn is_digit(ch: &char) -> bool {
    ch.is_ascii_digit()
}

fn bad_number(input: &SourceStream, reason: NumberError) -> LexError {
    LexError::BadNumber {
        reason,
        span: input.span(),
    }
}

impl LexT for JsonNumber {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming(|ch: &char| *ch == '-' || is_digit(ch))
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        input.accept("-");

        // int = zero / ( digit1-9 *DIGIT )
        if input.accept("0") {
            if input.upcoming(is_digit) {
                return Err(bad_number(input, NumberError::LeadingZero));
            }
        } else if input.accept(DIGIT_1_9) {
            input.accept_while(is_digit);
        } else {
            return Err(bad_number(input, NumberError::MissingDigit));
        }

        // frac = decimal-point 1*DIGIT
        if input.accept(".") && input.accept_while(is_digit) == 0 {
            return Err(bad_number(input, NumberError::MissingFractionDigit));
        }

        // exp = e [ minus / plus ] 1*DIGIT
        if input.accept("eE") {
            input.accept("+-");
            if input.accept_while(is_digit) == 0 {
                return Err(bad_number(input, NumberError::MissingExponentDigit));
            }
        }

        let span = input.token_span();
        let text = input.text();

        // The grammar above only admits text that Rust's float parser accepts.
        let value = text
            .parse::<f64>()
            .unwrap_or_else(|err| unreachable!("lexed number {text:?} does not parse: {err}"));

        Ok(Self { span, value })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::{
        common::{Span, Spanned},
        lexing::{LexError, LexResult, NumberError, SourceStream},
    };

    use super::JsonNumber;

    fn lex(src: &str) -> Result<JsonNumber, LexError> {
        let source = src.chars().collect::<Vec<_>>();
        let input = &mut SourceStream::new(&source);
        match input.lex::<JsonNumber>() {
            LexResult::Lexed(n) => Ok(n),
            LexResult::Errant(err) => Err(err),
            LexResult::Nothing => panic!("Not a number"),
        }
    }

    #[rstest]
    #[case("12", 12.0)]
    #[case("0", 0.0)]
    #[case("-0", 0.0)]
    #[case("10.10", 10.10)]
    #[case("12e-1", 1.2)]
    #[case("4E1", 40.0)]
    #[case("-10.23", -10.23)]
    #[case("1e+2", 100.0)]
    #[case("0.5", 0.5)]
    #[case("-0.0e0", 0.0)]
    #[case("123456789", 123456789.0)]
    fn values(#[case] src: &str, #[case] expected: f64) {
        let n = lex(src).expect("Valid lex");
        assert_eq!(n.value(), expected);
        assert_eq!(n.span(), Span::new(0, src.chars().count()));
    }

    #[test]
    fn stops_at_non_number() {
        let n = lex("42,").expect("Valid lex");
        assert_eq!(n.span(), Span::new(0, 2));

        let n = lex("7]").expect("Valid lex");
        assert_eq!(n.value(), 7.0);
    }

    #[rstest]
    #[case("01", NumberError::LeadingZero, "leading zero")]
    #[case("-00", NumberError::LeadingZero, "leading zero")]
    #[case("--0", NumberError::MissingDigit, "bad number")]
    #[case("-", NumberError::MissingDigit, "bad number")]
    #[case("1.", NumberError::MissingFractionDigit, "bad number")]
    #[case("1.e5", NumberError::MissingFractionDigit, "bad number")]
    #[case("1e", NumberError::MissingExponentDigit, "bad number")]
    #[case("2E+", NumberError::MissingExponentDigit, "bad number")]
    fn malformed(#[case] src: &str, #[case] expected: NumberError, #[case] message: &str) {
        let err = lex(src).unwrap_err();
        assert!(matches!(err, LexError::BadNumber { reason, .. } if reason == expected));
        assert!(
            err.to_string().contains(message),
            "{err} should mention {message:?}"
        );
    }

    #[test]
    fn error_position() {
        // Points at the offending character.
        assert_eq!(lex("01").unwrap_err().span(), Span::new(1, 2));
        assert_eq!(lex("--0").unwrap_err().span(), Span::new(1, 2));
        assert_eq!(lex("1.").unwrap_err().span(), Span::empty(2));
    }
}
