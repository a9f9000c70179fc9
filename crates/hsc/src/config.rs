//! Configuration types for hsc document parsing.
//!
//! This module provides configuration structures that control which source
//! format is parsed, which grouping kinds are recognized and what gets
//! printed. All types implement [`serde::Deserialize`] for loading from
//! external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining parse and output settings.
//! - [`ParseConfig`] - Controls the [`SourceFormat`] and the enabled [`GroupKind`]s.
//! - [`OutputConfig`] - Controls whether the token listing is printed.
//!
//! # Example
//!
//! ```
//! # use hsc::config::{AppConfig, SourceFormat};
//! let config: AppConfig = Default::default();
//! assert_eq!(config.parse().format(), SourceFormat::Auto);
//! assert!(config.parse().groups().is_none());
//! assert!(!config.output().tokens());
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

use hsc_core::GroupKind;

/// Top-level application configuration combining parse and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Parse configuration section.
    #[serde(default)]
    parse: ParseConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified parse and output configurations.
    pub fn new(parse: ParseConfig, output: OutputConfig) -> Self {
        Self { parse, output }
    }

    /// Returns the parse configuration.
    pub fn parse(&self) -> &ParseConfig {
        &self.parse
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Replaces the source format, keeping everything else.
    pub fn with_format(mut self, format: SourceFormat) -> Self {
        self.parse.format = format;
        self
    }

    /// Turns the token listing on or off, keeping everything else.
    pub fn with_tokens(mut self, tokens: bool) -> Self {
        self.output.tokens = tokens;
        self
    }
}

/// Which source format a document is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Raw when the whole source is a well-formed raw document, sketch otherwise.
    #[default]
    Auto,
    /// The sketch language.
    Sketch,
    /// The legacy raw point format.
    Raw,
}

impl SourceFormat {
    /// Returns the configuration name of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceFormat::Auto => "auto",
            SourceFormat::Sketch => "sketch",
            SourceFormat::Raw => "raw",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name does not denote a [`SourceFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown source format `{0}` (expected auto, sketch or raw)")]
pub struct UnknownSourceFormat(pub String);

impl FromStr for SourceFormat {
    type Err = UnknownSourceFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(SourceFormat::Auto),
            "sketch" => Ok(SourceFormat::Sketch),
            "raw" => Ok(SourceFormat::Raw),
            other => Err(UnknownSourceFormat(other.to_string())),
        }
    }
}

/// Parse settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseConfig {
    /// Source format of the input.
    #[serde(default)]
    format: SourceFormat,

    /// Enabled grouping kinds; `None` enables every built-in kind.
    #[serde(default)]
    groups: Option<Vec<GroupKind>>,
}

impl ParseConfig {
    /// Creates a new [`ParseConfig`].
    ///
    /// # Arguments
    ///
    /// * `format` - Source format of the input.
    /// * `groups` - Enabled grouping kinds, or `None` for every built-in kind.
    pub fn new(format: SourceFormat, groups: Option<Vec<GroupKind>>) -> Self {
        Self { format, groups }
    }

    /// Returns the configured [`SourceFormat`].
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Returns the enabled grouping kinds, or `None` when every kind is enabled.
    pub fn groups(&self) -> Option<&[GroupKind]> {
        self.groups.as_deref()
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Print the token listing before the document.
    #[serde(default)]
    tokens: bool,
}

impl OutputConfig {
    pub fn new(tokens: bool) -> Self {
        Self { tokens }
    }

    /// Returns `true` if the token listing is printed.
    pub fn tokens(&self) -> bool {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_format_names() {
        for format in [SourceFormat::Auto, SourceFormat::Sketch, SourceFormat::Raw] {
            assert_eq!(format.as_str().parse(), Ok(format));
        }
        assert_eq!(
            "svg".parse::<SourceFormat>(),
            Err(UnknownSourceFormat("svg".to_string()))
        );
    }

    #[test]
    fn test_overrides_keep_other_settings() {
        let config = AppConfig::new(
            ParseConfig::new(SourceFormat::Sketch, Some(vec![GroupKind::Brush])),
            OutputConfig::default(),
        )
        .with_tokens(true)
        .with_format(SourceFormat::Raw);

        assert_eq!(config.parse().format(), SourceFormat::Raw);
        assert_eq!(config.parse().groups(), Some(&[GroupKind::Brush][..]));
        assert!(config.output().tokens());
    }
}
