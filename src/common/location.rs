//!
//! Things that help trace errors and tokens: [Span] and [Loc].
//!
//! All indices are in code points (Rust [char]s), not bytes.
//!

use std::{
    fmt::{Display, Formatter},
    ops::{Add, Range},
};

///
/// Represents the index of a character in source code.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Loc(pub(crate) usize);

impl Loc {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for Loc {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Loc> for usize {
    fn from(value: Loc) -> Self {
        value.0
    }
}

impl<A> Add<A> for Loc
where
    usize: Add<A, Output = usize>,
{
    type Output = Loc;

    fn add(self, rhs: A) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "char {}", self.0)
    }
}

///
/// Represents the location of a token in source code.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    ///
    /// Start index: inclusive lower bound.
    ///
    pub(crate) start: Loc,

    ///
    /// End index: exclusive upper bound.
    ///
    pub(crate) end: Loc,
}

impl Span {
    pub fn new(start: impl Into<Loc>, end: impl Into<Loc>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    ///
    /// A zero-width span, used for end of input.
    ///
    pub fn empty(at: impl Into<Loc>) -> Self {
        let at = at.into();
        Self { start: at, end: at }
    }

    pub fn start(&self) -> Loc {
        self.start
    }

    pub fn end(&self) -> Loc {
        self.end
    }

    ///
    /// Number of characters covered.
    ///
    pub fn len(&self) -> usize {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Return the start and end bounds as a Rust [Range]
    ///
    pub fn as_range(&self) -> Range<usize> {
        self.start.0..self.end.0
    }
}

impl From<Loc> for Span {
    fn from(value: Loc) -> Self {
        Self {
            start: value,
            end: value + 1,
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "char {}:{}", self.start.0, self.end.0)
    }
}

///
/// Returns the span attached to this
/// object.
///
pub trait Spanned {
    ///
    /// Returns the span attached to this
    /// object.
    ///
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl<T: Spanned> Spanned for &T {
    fn span(&self) -> Span {
        (**self).span()
    }
}

#[cfg(test)]
mod tests {
    use super::{Loc, Span};

    #[test]
    fn lengths() {
        let span = Span::new(3, 9);
        assert_eq!(span.len(), 6);
        assert_eq!(span.as_range(), 3..9);
        assert_eq!(Span::new(4, 2).len(), 0);
        assert_eq!(Loc(3) + 2, Loc(5));
    }

    #[test]
    fn single_char() {
        let span = Span::from(Loc(4));
        assert_eq!(span.len(), 1);
        assert!(Span::empty(4).is_empty());
        assert_eq!(span.to_string(), "char 4:5");
        assert_eq!(span.start().to_string(), "char 4");
    }
}
