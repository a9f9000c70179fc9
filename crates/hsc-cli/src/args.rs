//! Command-line argument definitions for the hsc CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input path, where the report goes,
//! format and configuration overrides, and logging verbosity.

use clap::Parser;
use log::LevelFilter;

use hsc::config::SourceFormat;

/// Command-line arguments for the hsc sketch compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input sketch file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to write the report to instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,

    /// Source format (auto, sketch, raw); overrides the configuration file
    #[arg(short, long)]
    pub format: Option<SourceFormat>,

    /// Print the token listing before the document
    #[arg(short, long)]
    pub tokens: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The log level to install; an unrecognized name falls back to `warn`.
    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            eprintln!(
                "Invalid log level `{}`, using `warn` instead",
                self.log_level
            );
            LevelFilter::Warn
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["hsc", "drawing.hsc"]).unwrap();

        assert_eq!(args.input, "drawing.hsc");
        assert!(args.output.is_none());
        assert!(args.format.is_none());
        assert!(!args.tokens);
        assert_eq!(args.log_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "hsc",
            "drawing.hsc",
            "--format",
            "raw",
            "--tokens",
            "-o",
            "out.txt",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.format, Some(SourceFormat::Raw));
        assert!(args.tokens);
        assert_eq!(args.output.as_deref(), Some("out.txt"));
        assert_eq!(args.log_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_values() {
        assert!(Args::try_parse_from(["hsc", "drawing.hsc", "--format", "svg"]).is_err());

        let args = Args::try_parse_from(["hsc", "drawing.hsc", "--log-level", "loud"]).unwrap();
        assert_eq!(args.log_filter(), LevelFilter::Warn);
    }
}
