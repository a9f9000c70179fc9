//! hsc CLI library
//!
//! This module contains the core CLI logic for the hsc sketch compiler: it
//! reads a document, optionally lists its tokens and prints the parsed
//! document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use hsc::{HscError, SketchBuilder, config::SourceFormat};

/// Run the hsc CLI application
///
/// Loads the configuration, applies the command-line overrides, parses the
/// input file and writes the report to the output file, or to standard
/// output when none is given.
///
/// # Errors
///
/// Returns `HscError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
pub fn run(args: &Args) -> Result<(), HscError> {
    info!(input_path = args.input; "Processing document");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        app_config = app_config.with_format(format);
    }
    if args.tokens {
        app_config = app_config.with_tokens(true);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = SketchBuilder::new(app_config);
    let report = render_report(&builder, &source)?;

    match &args.output {
        Some(path) => {
            fs::write(path, report)?;
            info!(output_file = path; "Report written");
        }
        None => print!("{report}"),
    }

    Ok(())
}

/// Parse `source` and render the report printed by [`run`].
///
/// The report holds a `TOKENS` section listing every token (sketch documents
/// only, when enabled in the configuration) followed by a `DOCUMENT` section
/// with the parsed document.
///
/// # Errors
///
/// Returns `HscError::Parse` if the document does not parse.
pub fn render_report(builder: &SketchBuilder, source: &str) -> Result<String, HscError> {
    let document = builder.parse(source)?;

    let mut sections = Vec::new();
    if builder.config().output().tokens() && document.format() == SourceFormat::Sketch {
        let listing: Vec<String> = builder
            .tokens(source)
            .iter()
            .map(|token| format!("\t\"{token}\""))
            .collect();
        sections.push(format!("#### TOKENS ####\n{}\n", listing.join("\n")));
    }
    sections.push(format!("#### DOCUMENT ####\n{document}\n"));
    sections.push("#### END ####\n".to_string());

    Ok(sections.join("\n"))
}
