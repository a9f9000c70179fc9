//! The legacy raw point-list document.
//!
//! Raw documents carry no pen diameter, pressure, markers or groups: just
//! strokes of plain points.

use std::fmt;

use crate::geometry::RawPoint;

/// One stroke of a raw document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStroke {
    points: Vec<RawPoint>,
}

impl RawStroke {
    pub fn new(points: Vec<RawPoint>) -> Self {
        Self { points }
    }

    /// Returns the samples of this stroke in drawing order.
    pub fn points(&self) -> &[RawPoint] {
        &self.points
    }
}

impl fmt::Display for RawStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawStroke")?;
        for point in &self.points {
            write!(f, " {point}")?;
        }
        Ok(())
    }
}

/// A complete raw document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSketch {
    strokes: Vec<RawStroke>,
}

impl RawSketch {
    pub fn new(strokes: Vec<RawStroke>) -> Self {
        Self { strokes }
    }

    /// Returns the strokes in source order.
    pub fn strokes(&self) -> &[RawStroke] {
        &self.strokes
    }
}

impl fmt::Display for RawSketch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawSketch ({} strokes)", self.strokes.len())?;
        for stroke in &self.strokes {
            write!(f, "\n  {stroke}")?;
        }
        Ok(())
    }
}
