//! hsc - A compiler for a compact text format describing freehand sketches.
//!
//! Parsing for sketch documents (strokes, markers and affine-transformed
//! groups) and for the legacy raw point format, selected by configuration.

pub mod config;

mod error;

pub use hsc_core::{geometry, group, raw, sketch};
pub use hsc_parser::Token;

pub use error::HscError;

use std::fmt;

use log::{debug, info, trace, warn};

use hsc_core::{RawSketch, Sketch};
use hsc_parser::{BuiltinGroups, error::ParseError};

use config::{AppConfig, SourceFormat};

/// A parsed document in either source format.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Sketch(Sketch),
    Raw(RawSketch),
}

impl Document {
    /// Returns the format this document was parsed from.
    pub fn format(&self) -> SourceFormat {
        match self {
            Document::Sketch(_) => SourceFormat::Sketch,
            Document::Raw(_) => SourceFormat::Raw,
        }
    }

    pub fn as_sketch(&self) -> Option<&Sketch> {
        match self {
            Document::Sketch(sketch) => Some(sketch),
            Document::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawSketch> {
        match self {
            Document::Raw(raw) => Some(raw),
            Document::Sketch(_) => None,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Sketch(sketch) => sketch.fmt(f),
            Document::Raw(raw) => raw.fmt(f),
        }
    }
}

/// Builder for parsing hsc documents.
///
/// This provides the configured entry point for turning source text into a
/// [`Document`]: it picks the source format and the enabled grouping kinds
/// from its [`AppConfig`].
///
/// # Examples
///
/// ```
/// use hsc::{SketchBuilder, config::AppConfig};
///
/// let builder = SketchBuilder::new(AppConfig::default());
///
/// let document = builder.parse("Marker: (hello);")
///     .expect("Failed to parse");
/// assert_eq!(document.as_sketch().unwrap().atoms().len(), 1);
///
/// let document = builder.parse("00000a0a")
///     .expect("Failed to parse");
/// assert_eq!(document.as_raw().unwrap().strokes().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SketchBuilder {
    config: AppConfig,
}

impl SketchBuilder {
    /// Create a new sketch builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder parses with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decide which format `source` is parsed as.
    ///
    /// With [`SourceFormat::Auto`], a non-blank source that passes
    /// [`hsc_parser::raw::verify`] is raw; anything else is a sketch.
    pub fn resolve_format(&self, source: &str) -> SourceFormat {
        match self.config.parse().format() {
            SourceFormat::Auto => {
                if !source.trim().is_empty() && hsc_parser::raw::verify(source) {
                    SourceFormat::Raw
                } else {
                    SourceFormat::Sketch
                }
            }
            format => format,
        }
    }

    /// Parse source text in the configured format.
    ///
    /// # Errors
    ///
    /// Returns `HscError::Parse` with the diagnostic for the first malformed
    /// statement or raw coordinate.
    pub fn parse(&self, source: &str) -> Result<Document, HscError> {
        let format = self.resolve_format(source);
        info!(format:% = format; "Parsing document");

        let document = match format {
            SourceFormat::Raw => Document::Raw(self.parse_raw(source)?),
            SourceFormat::Auto | SourceFormat::Sketch => {
                Document::Sketch(self.parse_sketch(source)?)
            }
        };

        debug!("Document parsed successfully");
        trace!(document:?; "Parsed document");
        Ok(document)
    }

    /// Parse source text as a sketch document.
    ///
    /// Only the grouping kinds enabled in the configuration produce
    /// grouping elements.
    ///
    /// # Errors
    ///
    /// Returns `HscError::Parse` for grammar and decoding errors.
    pub fn parse_sketch(&self, source: &str) -> Result<Sketch, HscError> {
        let result = match self.config.parse().groups() {
            Some(groups) => hsc_parser::parse_with(source, groups),
            None => hsc_parser::parse_with(source, &BuiltinGroups),
        };
        let sketch = result.map_err(|err| rejected(err, source))?;

        debug!(
            elements = sketch.elements().len(),
            atoms = sketch.atoms().len();
            "Sketch parsed"
        );
        Ok(sketch)
    }

    /// Parse source text as a raw document.
    ///
    /// # Errors
    ///
    /// Returns `HscError::Parse` when a complete point holds a character that
    /// is not a base-36 digit.
    pub fn parse_raw(&self, source: &str) -> Result<RawSketch, HscError> {
        if !hsc_parser::raw::verify(source) {
            warn!("Source is not a well-formed raw document, partial points will be dropped");
        }

        hsc_parser::raw::parse(source).map_err(|err| rejected(err, source))
    }

    /// Split sketch source text into its tokens.
    pub fn tokens<'src>(&self, source: &'src str) -> Vec<Token<'src>> {
        hsc_parser::tokenize(source)
    }
}

/// Wrap a parse error with its source, logging where the source was rejected.
fn rejected(err: ParseError, source: &str) -> HscError {
    match err.line_column(source) {
        Some((line, column)) => debug!(code:? = err.code(), line, column; "Source rejected"),
        None => debug!(code:? = err.code(); "Source rejected"),
    }
    HscError::new_parse_error(err, source)
}
