//! Error types for hsc operations.
//!
//! This module provides the main error type [`HscError`] which wraps
//! the error conditions that can occur while loading and parsing documents.

use std::io;

use thiserror::Error;

use hsc_parser::error::ParseError;

/// The main error type for hsc operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant contains structured error information with source code
/// spans, together with the source it was produced from, so reporters can
/// render labelled snippets.
#[derive(Debug, Error)]
pub enum HscError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HscError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
