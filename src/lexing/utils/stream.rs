use crate::common::{Loc, Span, Spanned};

use super::{LexResult, LexT};

///
/// Things that [SourceStream] can
/// check are coming up.
///
pub trait Lookahead {
    fn upcoming(self, input: &SourceStream) -> bool;
}

impl<'a> Lookahead for &'a str {
    fn upcoming(self, input: &SourceStream) -> bool {
        let rest = input.source.get(input.current..).unwrap_or_default();
        let mut count = 0;

        for (expected, actual) in self.chars().zip(rest) {
            if expected != *actual {
                return false;
            }
            count += 1;
        }

        count == self.chars().count()
    }
}

impl<F: Fn(&char) -> bool> Lookahead for F {
    fn upcoming(self, input: &SourceStream) -> bool {
        input.peek().map(self).unwrap_or(false)
    }
}

///
/// The scanner's cursor over some source characters.
///
/// * `start` marks the beginning of the token currently being scanned,
/// * `current` is the read head.
///
/// The read head only ever moves backwards by a single step ([SourceStream::backup]).
///
#[derive(Debug, Clone)]
pub struct SourceStream<'a> {
    source: &'a [char],
    start: usize,
    current: usize,
}

impl<'a> SourceStream<'a> {
    ///
    /// Create a new stream from some characters.
    ///
    pub fn new(source: &'a [char]) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
        }
    }

    ///
    /// Returns the characters this [SourceStream]
    /// came from.
    ///
    pub fn source(&self) -> &'a [char] {
        self.source
    }

    ///
    /// Mark the read head as the start of a new token.
    ///
    pub fn begin(&mut self) {
        self.start = self.current;
    }

    pub fn current(&self) -> Loc {
        Loc(self.current)
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    ///
    /// Peeks at the next upcoming character.
    ///
    pub fn peek(&self) -> Option<&char> {
        self.source.get(self.current)
    }

    ///
    /// Take the next character in this [SourceStream].
    ///
    pub fn take(&mut self) -> Option<(Loc, char)> {
        let ch = *self.source.get(self.current)?;
        self.current += 1;
        Some((Loc(self.current - 1), ch))
    }

    ///
    /// Step the read head back by one character,
    /// never past the start of the current token.
    ///
    pub fn backup(&mut self) {
        if self.current > self.start {
            self.current -= 1;
        }
    }

    ///
    /// Consume exactly one character if it is one of `set`.
    ///
    /// An exhausted stream never accepts, and never moves.
    ///
    pub fn accept(&mut self, set: &str) -> bool {
        match self.take() {
            Some((_, ch)) if set.contains(ch) => true,
            Some(_) => {
                self.backup();
                false
            }
            None => false,
        }
    }

    ///
    /// Take characters whilst they satisfy some predicate,
    /// returning how many were taken.
    ///
    pub fn accept_while(&mut self, pred: impl Fn(&char) -> bool) -> usize {
        let from = self.current;
        while self.peek().is_some_and(&pred) {
            self.current += 1;
        }

        self.current - from
    }

    ///
    /// Checks if a lookahead pattern is next in the stream.
    ///
    pub fn upcoming<L: Lookahead>(&self, lookahead: L) -> bool {
        lookahead.upcoming(self)
    }

    ///
    /// Attempt to lex for token `L`.
    ///
    pub fn lex<L: LexT>(&mut self) -> LexResult<L> {
        if !L::peek(self) {
            return LexResult::Nothing;
        }

        match L::lex(self) {
            Ok(lexed) => LexResult::Lexed(lexed),
            Err(errant) => LexResult::Errant(errant),
        }
    }

    ///
    /// The span of the token being scanned so far.
    ///
    pub fn token_span(&self) -> Span {
        Span::new(self.start, self.current)
    }

    ///
    /// The text of the token being scanned so far.
    ///
    pub fn text(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }
}

///
/// The character under the read head,
/// or an empty span at the end of input.
///
impl<'a> Spanned for SourceStream<'a> {
    fn span(&self) -> Span {
        if self.is_at_end() {
            return Span::empty(self.current);
        }

        Span::from(Loc(self.current))
    }
}

#[cfg(test)]
mod tests {
    use crate::common::{Loc, Span, Spanned};

    use super::SourceStream;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn accept() {
        let source = chars("+...");
        let mut input = SourceStream::new(&source);
        assert!(input.accept("+-"));
        assert_eq!(input.current(), Loc(1));

        assert!(!input.accept("+-"));
        assert_eq!(input.current(), Loc(1));
    }

    #[test]
    fn accept_exhausted() {
        let source = chars("");
        let mut input = SourceStream::new(&source);
        assert!(!input.accept("+-"));
        assert_eq!(input.current(), Loc(0));

        let source = chars("-");
        let mut input = SourceStream::new(&source);
        assert!(input.accept("+-"));
        assert!(!input.accept("+-"));
        assert_eq!(input.current(), Loc(1));
    }

    #[test]
    fn backup() {
        let source = chars("ab");
        let mut input = SourceStream::new(&source);
        input.backup();
        assert_eq!(input.current(), Loc(0));

        assert_eq!(input.take(), Some((Loc(0), 'a')));
        input.backup();
        assert_eq!(input.peek(), Some(&'a'));

        input.take();
        input.begin();
        input.backup();
        assert_eq!(input.current(), Loc(1));
    }

    #[test]
    fn upcoming() {
        let source = chars("nul");
        let input = SourceStream::new(&source);
        assert!(input.upcoming("nu"));
        assert!(input.upcoming("nul"));
        assert!(!input.upcoming("null"));
        assert!(input.upcoming(|ch: &char| ch.is_alphabetic()));
    }

    #[test]
    fn spans() {
        let source = chars("12345 x");
        let mut input = SourceStream::new(&source);
        assert_eq!(input.accept_while(char::is_ascii_digit), 5);
        assert_eq!(input.token_span(), Span::new(0, 5));
        assert_eq!(input.text(), "12345");
        assert_eq!(input.span(), Span::from(Loc(5)));

        input.begin();
        assert!(input.accept(" "));
        assert_eq!(input.token_span(), Span::new(5, 6));
        assert_eq!(input.text(), " ");

        input.accept_while(|_| true);
        assert!(input.is_at_end());
        assert!(input.span().is_empty());
    }
}
