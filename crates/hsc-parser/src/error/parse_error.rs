//! The error returned by the public parse entry points.

use std::fmt;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// Error type returned by [`parse`](crate::parse), [`parse_with`](crate::parse_with)
/// and [`raw::parse`](crate::raw::parse).
///
/// Parsing stops at the first rejected statement or coordinate, so the error
/// holds exactly the one diagnostic that stopped it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(Diagnostic);

impl ParseError {
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.0
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        self.0
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.0.code()
    }

    /// Span of the rejected tokens.
    pub fn span(&self) -> Option<Span> {
        self.0.primary_span()
    }

    /// One-based line and column of the rejected tokens in `source`.
    ///
    /// Columns count characters, and `\r\n` counts as one line break.
    pub fn line_column(&self, source: &str) -> Option<(usize, usize)> {
        let start = self.span()?.start();
        let before = source.get(..start)?;
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Some((line, before[line_start..].chars().count() + 1))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_wraps_one_diagnostic() {
        let err: ParseError = Diagnostic::error("statement has no elements")
            .with_code(ErrorCode::E105)
            .with_label(Span::new(3..4), "expected an element")
            .into();

        assert_eq!(err.code(), Some(ErrorCode::E105));
        assert_eq!(err.span(), Some(Span::new(3..4)));
        assert_eq!(err.to_string(), "error[E105]: statement has no elements");
        assert_eq!(err.into_diagnostic().labels().len(), 1);
    }

    #[test]
    fn test_line_column() {
        let source = "% comment\r\nPencil: [000000]\nMask: [1];";
        let err: ParseError = Diagnostic::error("unknown element type `Mask`")
            .with_label(Span::new(28..32), "unknown")
            .into();

        assert_eq!(err.line_column(source), Some((3, 1)));

        let err: ParseError = Diagnostic::error("invalid digit string")
            .with_label(Span::new(20..26), "here")
            .into();
        assert_eq!(err.line_column(source), Some((2, 10)));
    }

    #[test]
    fn test_line_column_without_span() {
        let err: ParseError = Diagnostic::error("no label").into();
        assert_eq!(err.line_column("Marker: (a);"), None);
    }
}
