//! Point types for sketch documents.
//!
//! Coordinates are signed 16-bit integers in canvas space with the origin in
//! the top-left corner, X growing rightward and Y growing downward:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - [`Point`] - A stroke sample with pen pressure
//! - [`RawPoint`] - A stroke sample from the legacy raw format, without pressure

use std::fmt;

/// A single pen sample of a stroke.
///
/// Pressure is normalized to `[0, 1]`, where `1.0` is full pressure.
///
/// # Examples
///
/// ```
/// # use hsc_core::geometry::Point;
/// let p = Point::new(10, -4, 0.5);
/// assert_eq!(p.x(), 10);
/// assert_eq!(p.y(), -4);
/// assert_eq!(p.pressure(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: i16,
    y: i16,
    pressure: f32,
}

impl Point {
    /// Creates a new point. `pressure` is clamped to `[0, 1]`.
    pub fn new(x: i16, y: i16, pressure: f32) -> Self {
        Self {
            x,
            y,
            pressure: pressure.clamp(0.0, 1.0),
        }
    }

    /// Creates a point at full pressure.
    pub fn full_pressure(x: i16, y: i16) -> Self {
        Self::new(x, y, 1.0)
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i16 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i16 {
        self.y
    }

    /// Returns the normalized pen pressure
    pub fn pressure(self) -> f32 {
        self.pressure
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {:.3})", self.x, self.y, self.pressure)
    }
}

/// A single sample of a legacy raw stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RawPoint {
    x: i16,
    y: i16,
}

impl RawPoint {
    /// Creates a new raw point
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i16 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i16 {
        self.y
    }
}

impl From<RawPoint> for Point {
    fn from(point: RawPoint) -> Self {
        Point::full_pressure(point.x, point.y)
    }
}

impl fmt::Display for RawPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_pressure_is_clamped() {
        assert_approx_eq!(f32, Point::new(0, 0, 1.5).pressure(), 1.0);
        assert_approx_eq!(f32, Point::new(0, 0, -0.25).pressure(), 0.0);
        assert_approx_eq!(f32, Point::new(0, 0, 0.25).pressure(), 0.25);
    }

    #[test]
    fn test_raw_point_into_point() {
        let point: Point = RawPoint::new(-3, 7).into();
        assert_eq!(point.x(), -3);
        assert_eq!(point.y(), 7);
        assert_approx_eq!(f32, point.pressure(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1, -2, 0.5).to_string(), "(1, -2, 0.500)");
        assert_eq!(RawPoint::new(1, -2).to_string(), "(1, -2)");
    }
}
