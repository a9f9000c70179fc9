//! The element grammar table.
//!
//! Every element starts with a type name that fixes the shape of the
//! arguments that follow it:
//!
//! | Type     | Shape               | Arguments           |
//! |----------|---------------------|---------------------|
//! | `Data`   | variable-count list | base-36 digit strings |
//! | `Pencil` | variable-count list | base-36 digit strings |
//! | `Brush`  | variable-count list | diameter / digit string pairs |
//! | `Affine` | fixed-count list    | 9 decimal numbers   |
//! | `Marker` | single argument     | 1 string literal    |

use std::fmt;

/// What kind of value an argument holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// Base-36 digit strings.
    Base36,
    /// Decimal numbers.
    Number,
    /// A parenthesized string literal.
    String,
}

/// The argument syntax that follows an element type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Nothing follows the type name.
    NoArgs,
    /// `: value`
    Single(ArgumentKind),
    /// `: [ v1 v2 ... ]` with exactly `count` values.
    Fixed { kind: ArgumentKind, count: usize },
    /// `: [ v1 v2 ... ]` with any number of values, read `multiplier` at a
    /// time; the count must be a multiple of `multiplier`.
    Variable {
        kind: ArgumentKind,
        multiplier: usize,
    },
}

/// The element types known to the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Data,
    Pencil,
    Brush,
    Affine,
    Marker,
}

impl ElementType {
    /// Every element type, in table order.
    pub const ALL: [ElementType; 5] = [
        ElementType::Data,
        ElementType::Pencil,
        ElementType::Brush,
        ElementType::Affine,
        ElementType::Marker,
    ];

    /// Look up an element type by its source name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Data" => Some(ElementType::Data),
            "Pencil" => Some(ElementType::Pencil),
            "Brush" => Some(ElementType::Brush),
            "Affine" => Some(ElementType::Affine),
            "Marker" => Some(ElementType::Marker),
            _ => None,
        }
    }

    /// The source name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Data => "Data",
            ElementType::Pencil => "Pencil",
            ElementType::Brush => "Brush",
            ElementType::Affine => "Affine",
            ElementType::Marker => "Marker",
        }
    }

    /// The argument shape this type expects.
    pub fn shape(self) -> Shape {
        match self {
            ElementType::Data | ElementType::Pencil => Shape::Variable {
                kind: ArgumentKind::Base36,
                multiplier: 1,
            },
            ElementType::Brush => Shape::Variable {
                kind: ArgumentKind::Base36,
                multiplier: 2,
            },
            ElementType::Affine => Shape::Fixed {
                kind: ArgumentKind::Number,
                count: 9,
            },
            ElementType::Marker => Shape::Single(ArgumentKind::String),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        for ty in ElementType::ALL {
            assert_eq!(ElementType::from_name(ty.as_str()), Some(ty));
        }
        assert_eq!(ElementType::from_name("Mask"), None);
        assert_eq!(ElementType::from_name("data"), None);
    }

    #[test]
    fn test_shapes() {
        assert_eq!(
            ElementType::Brush.shape(),
            Shape::Variable {
                kind: ArgumentKind::Base36,
                multiplier: 2
            }
        );
        assert_eq!(
            ElementType::Affine.shape(),
            Shape::Fixed {
                kind: ArgumentKind::Number,
                count: 9
            }
        );
        assert_eq!(
            ElementType::Marker.shape(),
            Shape::Single(ArgumentKind::String)
        );
    }
}
