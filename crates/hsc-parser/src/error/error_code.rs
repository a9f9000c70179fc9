//! Error codes for the hsc diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Grammar errors (element and statement structure)
//! - `E2xx` - Decoding errors (argument contents)

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Grammar Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// A list element is missing the `:` or `[` that introduces its arguments.
    E100,

    /// Incomplete input.
    ///
    /// The document has no tokens at all, or ends in the middle of an element.
    E101,

    /// Unknown element type.
    ///
    /// The type name is not one of `Data`, `Pencil`, `Brush`, `Affine`, `Marker`.
    E102,

    /// Argument count mismatch.
    ///
    /// A fixed-count list has the wrong number of arguments, a variable-count
    /// list is not a multiple of its grouping, or a single-argument element is
    /// missing its `:` or its value.
    E103,

    /// Unterminated list.
    ///
    /// A `[` was never closed by `]`.
    E104,

    /// Empty statement.
    ///
    /// A `,` or `;` appeared where a statement needs at least one element.
    E105,

    // =========================================================================
    // Decoding Errors (E2xx)
    // =========================================================================
    /// Malformed digit group.
    ///
    /// A digit string ended with a partial point left over.
    E200,

    /// Malformed marker.
    ///
    /// A marker argument is not wrapped in parentheses.
    E201,

    /// Invalid numeral.
    ///
    /// A numeral has characters outside its digit set, the wrong width, or
    /// does not fit its target type.
    E202,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Grammar errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            // Decoding errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Grammar errors
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E102 => "unknown element type",
            ErrorCode::E103 => "argument count mismatch",
            ErrorCode::E104 => "unterminated list",
            ErrorCode::E105 => "empty statement",
            // Decoding errors
            ErrorCode::E200 => "malformed digit group",
            ErrorCode::E201 => "malformed marker",
            ErrorCode::E202 => "invalid numeral",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
