//!
//! Common utilities across lexing and syntax-parsing.
//!

pub mod file;
pub mod location;

pub use file::*;
pub use location::*;
