//! # hsc Parser
//!
//! Parser for the hsc sketch language and the legacy raw point format. This
//! crate provides the pipeline from source text to a
//! [`hsc_core::Sketch`] or [`hsc_core::RawSketch`].
//!
//! ## Usage
//!
//! ```
//! # use hsc_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     // `%` opens a comment only in the first column.
//!     let source = "% a pencil stroke moved right by 10\n\
//!                   Pencil: [000000 00a00a] Affine: [1 0 10 0 1 0 0 0 1],\n\
//!                   Marker: (done);";
//!
//!     let sketch = parse(source)?;
//!     assert_eq!(sketch.elements().len(), 1);
//!     assert_eq!(sketch.atoms().len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! Raw documents go through [`raw::verify`] and [`raw::parse`] instead.

pub mod chars;
mod element;
pub mod error;
pub mod grammar;
mod lexer;
pub mod numeral;
mod parser;
pub mod raw;
mod span;
mod tokens;

pub use lexer::tokenize;
pub use parser::{BuiltinGroups, GroupLookup, build_sketch};
pub use span::Span;
pub use tokens::Token;

use hsc_core::Sketch;

use error::ParseError;

/// Parse sketch source text with every built-in grouping kind enabled.
///
/// This is the main entry point for parsing sketch documents:
///
/// 1. **Tokenize** - Split source text into tokens, stopping after the first `;`
/// 2. **Build** - Parse statements and decode their arguments into a sketch
///
/// # Errors
///
/// Returns a [`ParseError`] holding the diagnostic for the first malformed
/// statement.
///
/// # Example
///
/// ```
/// # use hsc_parser::parse;
/// let sketch = parse("Marker: (hi);").unwrap();
/// assert_eq!(sketch.atoms()[0].as_marker().unwrap().message(), "hi");
/// ```
pub fn parse(source: &str) -> Result<Sketch, ParseError> {
    parse_with(source, &BuiltinGroups)
}

/// Parse sketch source text, treating only the kinds `groups` knows as groups.
///
/// # Example
///
/// ```
/// # use hsc_core::GroupKind;
/// # use hsc_parser::parse_with;
/// let sketch = parse_with("Pencil: [000000];", &[GroupKind::Brush][..]).unwrap();
/// assert!(sketch.elements().is_empty());
/// assert_eq!(sketch.atoms().len(), 1);
/// ```
pub fn parse_with<L>(source: &str, groups: &L) -> Result<Sketch, ParseError>
where
    L: GroupLookup + ?Sized,
{
    let tokens = lexer::tokenize(source);
    let sketch = parser::build_sketch(&tokens, groups)?;
    Ok(sketch)
}
