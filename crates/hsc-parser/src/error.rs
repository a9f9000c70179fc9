//! Error and diagnostic system for the hsc parsers.
//!
//! Every rejection the grammar layer can produce is reported as a
//! [`Diagnostic`] carrying an [`ErrorCode`], labelled source [`Span`]s and
//! optional help text. Decoding failures also label the type name of the
//! element the rejected argument belongs to. Parsing stops at the first
//! failure, so a [`ParseError`] holds exactly one diagnostic.
//!
//! # Example
//!
//! ```
//! # use hsc_parser::error::{Diagnostic, ErrorCode};
//! # use hsc_parser::{Span, grammar::ElementType};
//!
//! let diag = Diagnostic::error("digit string ends with an incomplete point")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(8..15), "2 digits left over")
//!     .with_element(Span::new(0..6), ElementType::Pencil)
//!     .with_help("each point needs 6 digits");
//!
//! assert_eq!(diag.element(), Some(ElementType::Pencil));
//! ```
//!
//! [`Span`]: crate::Span

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::{Label, LabelKind};
pub use parse_error::ParseError;
