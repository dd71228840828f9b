//!
//! Parser configuration.
//!

///
/// The nesting limit used when none is given.
///
pub const DEFAULT_MAX_DEPTH: usize = 512;

///
/// Options controlling how strictly a document is parsed.
///
/// ```rust
/// use rjson::config::Options;
///
/// let options = Options::new().max_depth(16).allow_trailing(true);
/// assert_eq!(options.max_depth, 16);
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
    ///
    /// How many arrays and objects may be nested
    /// inside each other.
    ///
    /// RFC 7159 §9 allows parsers to set such a limit;
    /// deeper documents are rejected as a syntax error.
    ///
    /// # Default
    ///
    /// [DEFAULT_MAX_DEPTH]
    ///
    pub max_depth: usize,

    ///
    /// Whether tokens may follow the top-level value.
    ///
    /// Only consulted by [crate::from_str_with]; a bare
    /// [crate::syntax::Parser] never looks past the value it parsed.
    ///
    /// # Default
    ///
    /// `false`
    ///
    pub allow_trailing: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn allow_trailing(mut self, allow_trailing: bool) -> Self {
        self.allow_trailing = allow_trailing;
        self
    }
}
