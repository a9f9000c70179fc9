//! Labelled source spans for diagnostic messages.

use crate::{grammar::ElementType, span::Span};

/// What a [`Label`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// The tokens that were rejected.
    Cause,
    /// The type name of the element whose argument was rejected.
    Element(ElementType),
}

/// A labelled span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    kind: LabelKind,
    message: String,
}

impl Label {
    /// Label the tokens that caused a failure.
    pub fn cause(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            kind: LabelKind::Cause,
            message: message.into(),
        }
    }

    /// Label the type name of the element a rejected argument belongs to.
    pub fn element(span: Span, ty: ElementType) -> Self {
        Self {
            span,
            kind: LabelKind::Element(ty),
            message: format!("in this {ty} element"),
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this label marks the rejected tokens themselves.
    pub fn is_cause(&self) -> bool {
        self.kind == LabelKind::Cause
    }
}
