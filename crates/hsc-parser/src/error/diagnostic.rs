//! The core diagnostic type for the hsc error system.

use std::fmt;

use crate::{
    error::{
        error_code::ErrorCode,
        label::{Label, LabelKind},
    },
    grammar::ElementType,
    span::Span,
};

/// A rich error message with source location information.
///
/// # Example
///
/// ```text
/// error[E104]: list is never closed
///   --> drawing.hsc:3:12
///    |
///  3 | Pencil: [ 000000 001001
///    |         ^ `[` opened here
///    |
///    = help: add `]` after the last argument
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use hsc_parser::error::{Diagnostic, ErrorCode};
    /// # use hsc_parser::Span;
    ///
    /// let diag = Diagnostic::error("unknown element type `Pen`")
    ///     .with_code(ErrorCode::E102)
    ///     .with_label(Span::new(0..3), "not in the grammar")
    ///     .with_help("did you mean `Pencil`?");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the span of the first label marking the rejected tokens, if any.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_cause())
            .map(Label::span)
    }

    /// Get the type of the element whose argument was rejected, if recorded.
    pub fn element(&self) -> Option<ElementType> {
        self.labels.iter().find_map(|label| match label.kind() {
            LabelKind::Element(ty) => Some(ty),
            LabelKind::Cause => None,
        })
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Label the rejected tokens.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::cause(span, message));
        self
    }

    /// Label the type name of the element the rejected tokens belong to.
    pub fn with_element(mut self, span: Span, ty: ElementType) -> Self {
        self.labels.push(Label::element(span, ty));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E101]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::error("test error");

        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.primary_span().is_none());
        assert!(diag.element().is_none());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_labels() {
        let diag = Diagnostic::error("digit string ends with an incomplete point")
            .with_element(Span::new(0..6), ElementType::Pencil)
            .with_label(Span::new(8..12), "left over");

        assert_eq!(diag.labels().len(), 2);
        assert!(!diag.labels()[0].is_cause());
        assert_eq!(diag.primary_span(), Some(Span::new(8..12)));
        assert_eq!(diag.element(), Some(ElementType::Pencil));
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("unknown element type `Pen`").with_code(ErrorCode::E102);

        assert_eq!(diag.to_string(), "error[E102]: unknown element type `Pen`");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::error("something went wrong");

        assert_eq!(diag.to_string(), "error: something went wrong");
    }

    #[test]
    fn test_diagnostic_with_help() {
        let diag = Diagnostic::error("list is never closed").with_help("add `]`");

        assert_eq!(diag.help(), Some("add `]`"));
    }
}
