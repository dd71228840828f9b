//!
//! Source text, with line-column lookup for diagnostics.
//!

use std::{fmt::Formatter, path::Path};

use super::{Loc, Spanned};

///
/// Line and column information for
/// a particular location in source code.
///
#[derive(Debug, PartialEq, Eq)]
pub struct LineColumn<'a> {
    name: &'a str,
    line: usize,
    column: usize,
}

impl<'a> LineColumn<'a> {
    ///
    /// 0-based line.
    ///
    pub fn line(&self) -> usize {
        self.line
    }

    ///
    /// 0-based column, in characters.
    ///
    pub fn column(&self) -> usize {
        self.column
    }
}

///
/// Converting to 1-based only for display.
///
impl<'a> std::fmt::Display for LineColumn<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.name, self.line + 1, self.column + 1)
    }
}

///
/// Finds the starting character index of all
/// lines. JSON only knows `<LF>`, `<CR>` and `<CR><LF>`.
///
fn line_starts(st: &[char]) -> Vec<usize> {
    let mut v = vec![0];
    let mut i = 0;

    while i < st.len() {
        match st[i] {
            '\n' => v.push(i + 1),
            '\r' => {
                if matches!(st.get(i + 1), Some('\n')) {
                    v.push(i + 2); // <CR><LF>
                    i += 1;
                } else {
                    v.push(i + 1);
                }
            }
            _ => (),
        }

        i += 1;
    }

    v
}

///
/// A JSON document, held as characters so that
/// [Loc]s (code-point indices) can be resolved.
///
#[derive(Debug, Clone)]
pub struct SourceText {
    name: String,
    chars: Vec<char>,
    line_starts: Vec<usize>,
}

impl SourceText {
    ///
    /// Wrap some in-memory text, naming it for diagnostics.
    ///
    pub fn new(name: impl ToString, contents: &str) -> Self {
        let chars = contents.chars().collect::<Vec<_>>();
        let line_starts = line_starts(&chars);

        Self {
            name: name.to_string(),
            chars,
            line_starts,
        }
    }

    ///
    /// Attempts to read source text from a given file path.
    ///
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::new(path.display(), &contents))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn characters(&self) -> &[char] {
        &self.chars
    }

    ///
    /// Returns the source code at a given [super::Span], if within bounds.
    ///
    pub fn source_at(&self, span: impl Spanned) -> Option<String> {
        let span = span.span();
        self.chars
            .get(span.as_range())
            .map(|chars| chars.iter().collect())
    }

    ///
    /// Return the line and column information of a [super::Span]'s start.
    ///
    /// The end-of-input position (one past the last character) is
    /// also locatable.
    ///
    pub fn locate(&self, span: impl Spanned) -> Option<LineColumn<'_>> {
        let Loc(loc) = span.span().start;
        if loc > self.chars.len() {
            return None;
        }

        // The last line that starts at, or before, loc.
        let line = self.line_starts.partition_point(|&start| start <= loc) - 1;

        Some(LineColumn {
            name: &self.name,
            line,
            column: loc - self.line_starts[line],
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::common::{Loc, Span};

    use super::{line_starts, SourceText};

    #[test]
    fn lines() {
        assert_eq!(
            &line_starts(&"ba\nb\nc".chars().collect::<Vec<_>>())[..],
            &[0, 3, 5]
        );

        assert_eq!(
            &line_starts(&"babs\r\nbaaa\r__\n".chars().collect::<Vec<_>>())[..],
            &[0, 6, 11, 14]
        );
    }

    #[test]
    fn line_col() {
        let f = SourceText::new("fruit.json", "PEN\nPINEAPPLE\nAPPLE\nPEN");
        let ananas = Span::new(4, 13);
        assert_eq!(f.source_at(ananas), Some("PINEAPPLE".to_string()));

        let loc = f.locate(ananas).expect("in bounds");
        assert_eq!((loc.line(), loc.column()), (1, 0));
        assert_eq!(loc.to_string(), "fruit.json:2:1");

        let apple = f.locate(Span::from(Loc(16))).expect("in bounds");
        assert_eq!((apple.line(), apple.column()), (2, 2));
    }

    #[test]
    fn end_of_input() {
        let f = SourceText::new("t", "[1,\n2");
        let eof = f.locate(Span::empty(5)).expect("end of input is locatable");
        assert_eq!((eof.line(), eof.column()), (1, 1));
        assert!(f.locate(Span::empty(6)).is_none());
    }

    #[test]
    fn code_points() {
        let f = SourceText::new("t", "\"é\u{1F4A9}\" x");
        assert_eq!(f.source_at(Span::new(1, 3)), Some("é\u{1F4A9}".to_string()));
        assert_eq!(f.locate(Span::from(Loc(5))).map(|l| l.column()), Some(5));
    }
}
