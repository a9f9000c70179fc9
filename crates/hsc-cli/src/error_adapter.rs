//! Rendering [`HscError`]s as miette reports.
//!
//! A parse error renders against its source: the rejected tokens carry the
//! primary label and, for decoding errors, the type name of the element they
//! belong to carries a secondary one. I/O and configuration errors have no
//! source and render as plain reports with a code and a hint.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan,
    SourceSpan,
};

use hsc::HscError;
use hsc_parser::{Span, error::Diagnostic};

/// A miette view of an [`HscError`].
pub struct Report<'a> {
    err: &'a HscError,
}

impl<'a> Report<'a> {
    pub fn new(err: &'a HscError) -> Self {
        Self { err }
    }

    /// The diagnostic and the source it points into, for parse errors.
    fn parse_diagnostic(&self) -> Option<(&'a Diagnostic, &'a str)> {
        match self.err {
            HscError::Parse { err, src } => Some((err.diagnostic(), src.as_str())),
            HscError::Io(_) | HscError::Config(_) => None,
        }
    }
}

impl fmt::Debug for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Report").field(self.err).finish()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parse_diagnostic() {
            Some((diag, _)) => f.write_str(diag.message()),
            None => fmt::Display::fmt(self.err, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.err {
            HscError::Io(err) => Some(err),
            HscError::Parse { .. } | HscError::Config(_) => None,
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            HscError::Parse { err, .. } => err
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
            HscError::Io(_) => Some(Box::new("hsc::io")),
            HscError::Config(_) => Some(Box::new("hsc::config")),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            HscError::Parse { err, .. } => err
                .diagnostic()
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            HscError::Io(_) => Some(Box::new("check that the input file exists and is readable")),
            HscError::Config(_) => Some(Box::new(
                "check the [parse] and [output] sections of the configuration file",
            )),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.err {
            HscError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
            HscError::Io(_) | HscError::Config(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (diag, _) = self.parse_diagnostic()?;
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let message = Some(label.message().to_string());
            let span = to_source_span(label.span());
            if label.is_cause() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Render `err` as a report in the given theme.
///
/// Falls back to the plain error message if the report cannot be written.
pub fn render(err: &HscError, theme: GraphicalTheme) -> String {
    let mut out = String::new();
    match GraphicalReportHandler::new_themed(theme).render_report(&mut out, &Report::new(err)) {
        Ok(()) => out,
        Err(_) => format!("{err}\n"),
    }
}
