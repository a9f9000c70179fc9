//! Token type produced by the lexer.

use std::fmt;

use crate::span::Span;

/// A slice of the source text recognized as one token.
///
/// Tokens never copy text: `text` borrows from the source buffer and `span`
/// records where it came from. Tokens are immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    text: &'src str,
    span: Span,
}

impl<'src> Token<'src> {
    /// Create a token covering `span` of `source`.
    ///
    /// # Panics
    ///
    /// Panics if `span` is out of bounds or not on character boundaries.
    pub fn new(source: &'src str, span: Span) -> Self {
        Self {
            text: &source[span.range()],
            span,
        }
    }

    /// The token text.
    pub fn as_str(&self) -> &'src str {
        self.text
    }

    /// Where the token sits in the source.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` if this token is the single-character operator `op`.
    pub fn is_operator(&self, op: char) -> bool {
        let mut chars = self.text.chars();
        chars.next() == Some(op) && chars.next().is_none()
    }

    /// Returns `true` for the statement separators `,` and `;`.
    pub fn is_separator(&self) -> bool {
        self.is_operator(',') || self.is_operator(';')
    }

    /// Returns `true` if this token looks like a parenthesized string literal.
    ///
    /// An unterminated string still starts with `(` but lacks the closing `)`.
    pub fn is_string(&self) -> bool {
        self.text.len() >= 2 && self.text.starts_with('(') && self.text.ends_with(')')
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_borrows_source() {
        let source = "Marker:(hi)";
        let token = Token::new(source, Span::new(7..11));

        assert_eq!(token.as_str(), "(hi)");
        assert_eq!(token, "(hi)");
        assert_eq!(token.span(), Span::new(7..11));
        assert!(token.is_string());
    }

    #[test]
    fn test_operator_checks() {
        let source = ";,:";
        assert!(Token::new(source, Span::new(0..1)).is_operator(';'));
        assert!(Token::new(source, Span::new(0..1)).is_separator());
        assert!(Token::new(source, Span::new(1..2)).is_separator());
        assert!(!Token::new(source, Span::new(2..3)).is_separator());
        assert!(!Token::new(source, Span::new(0..2)).is_operator(';'));
    }

    #[test]
    fn test_unterminated_string_is_not_a_string() {
        let source = "(open";
        assert!(!Token::new(source, Span::new(0..5)).is_string());
        assert!(!Token::new("(", Span::new(0..1)).is_string());
    }
}
