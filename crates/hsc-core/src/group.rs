//! Grouping kinds.
//!
//! A statement whose payload element names a grouping kind produces an
//! [`Element`](crate::sketch::Element) of that kind in addition to its
//! flattened atoms. The names are the element type names used in source text.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// The kind of a grouping [`Element`](crate::sketch::Element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum GroupKind {
    /// Strokes drawn with the fixed-width pencil tool.
    Pencil,
    /// Strokes drawn with the pressure-sensitive brush tool.
    Brush,
}

impl GroupKind {
    /// Every built-in grouping kind, in declaration order.
    pub const ALL: [GroupKind; 2] = [GroupKind::Pencil, GroupKind::Brush];

    /// Looks up a grouping kind by its source name.
    ///
    /// Names are case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hsc_core::GroupKind;
    /// assert_eq!(GroupKind::from_name("Brush"), Some(GroupKind::Brush));
    /// assert_eq!(GroupKind::from_name("Data"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Pencil" => Some(GroupKind::Pencil),
            "Brush" => Some(GroupKind::Brush),
            _ => None,
        }
    }

    /// Returns the source name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            GroupKind::Pencil => "Pencil",
            GroupKind::Brush => "Brush",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name does not denote a [`GroupKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown group kind `{0}`")]
pub struct UnknownGroupKind(pub String);

impl FromStr for GroupKind {
    type Err = UnknownGroupKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownGroupKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for kind in GroupKind::ALL {
            assert_eq!(GroupKind::from_name(kind.as_str()), Some(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_non_grouping_names() {
        assert_eq!(GroupKind::from_name("Data"), None);
        assert_eq!(GroupKind::from_name("Marker"), None);
        assert_eq!(GroupKind::from_name("pencil"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "Affine".parse::<GroupKind>().unwrap_err();
        assert_eq!(err, UnknownGroupKind("Affine".to_string()));
        assert_eq!(err.to_string(), "unknown group kind `Affine`");
    }
}
