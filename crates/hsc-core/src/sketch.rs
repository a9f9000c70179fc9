//! The sketch document model.
//!
//! A [`Sketch`] holds two views of the same drawing:
//!
//! - a flat list of every [`Atom`] (strokes and markers) in document order, and
//! - the grouping [`Element`]s, each owning its own copy of the atoms it groups
//!   together with the [`Modifier`]s applied to them.
//!
//! Atoms are duplicated between the two views rather than shared, so each view
//! can be consumed independently.

use std::fmt;

use crate::{geometry::Point, group::GroupKind};

/// One continuous pen motion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    diameter: u32,
    points: Vec<Point>,
}

impl Stroke {
    /// Creates a stroke with the given pen diameter and samples.
    pub fn new(diameter: u32, points: Vec<Point>) -> Self {
        Self { diameter, points }
    }

    /// Returns the pen diameter.
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Returns the samples of this stroke in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns `true` if the stroke has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stroke (diameter {})", self.diameter)?;
        for point in &self.points {
            write!(f, " {point}")?;
        }
        Ok(())
    }
}

/// A textual annotation with no spatial data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marker {
    message: String,
}

impl Marker {
    /// Creates a marker carrying `message` verbatim.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the marker text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marker ({})", self.message)
    }
}

/// An indivisible drawable unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Stroke(Stroke),
    Marker(Marker),
}

impl Atom {
    /// Returns the stroke if this atom is one.
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Atom::Stroke(stroke) => Some(stroke),
            Atom::Marker(_) => None,
        }
    }

    /// Returns the marker if this atom is one.
    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            Atom::Marker(marker) => Some(marker),
            Atom::Stroke(_) => None,
        }
    }
}

impl From<Stroke> for Atom {
    fn from(stroke: Stroke) -> Self {
        Atom::Stroke(stroke)
    }
}

impl From<Marker> for Atom {
    fn from(marker: Marker) -> Self {
        Atom::Marker(marker)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Stroke(stroke) => stroke.fmt(f),
            Atom::Marker(marker) => marker.fmt(f),
        }
    }
}

/// A 3×3 affine transform stored row-major.
///
/// The coefficients are stored exactly as written in the source; nothing
/// checks that the matrix is invertible or even affine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    matrix: [f32; 9],
}

impl Affine {
    /// The identity transform.
    pub const IDENTITY: Affine = Affine {
        matrix: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Creates a transform from nine row-major coefficients.
    pub fn new(matrix: [f32; 9]) -> Self {
        Self { matrix }
    }

    /// Returns the row-major coefficients.
    pub fn matrix(&self) -> &[f32; 9] {
        &self.matrix
    }

    /// Returns the coefficient at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below 3.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < 3 && col < 3, "affine index ({row}, {col}) out of range");
        self.matrix[row * 3 + col]
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.matrix;
        write!(
            f,
            "Affine [{} {} {}; {} {} {}; {} {} {}]",
            m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8]
        )
    }
}

/// A transform or annotation applied to a grouping [`Element`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modifier {
    Affine(Affine),
}

impl From<Affine> for Modifier {
    fn from(affine: Affine) -> Self {
        Modifier::Affine(affine)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Affine(affine) => affine.fmt(f),
        }
    }
}

/// A named group of atoms with the modifiers applied to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: GroupKind,
    atoms: Vec<Atom>,
    modifiers: Vec<Modifier>,
}

impl Element {
    /// Creates an empty element of the given kind.
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            atoms: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    /// Replaces the grouped atoms.
    pub fn with_atoms(mut self, atoms: Vec<Atom>) -> Self {
        self.atoms = atoms;
        self
    }

    /// Appends a modifier; modifiers keep source order.
    pub fn push_modifier(&mut self, modifier: impl Into<Modifier>) {
        self.modifiers.push(modifier.into());
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for atom in &self.atoms {
            write!(f, "\n    {atom}")?;
        }
        for modifier in &self.modifiers {
            write!(f, "\n    {modifier}")?;
        }
        Ok(())
    }
}

/// A complete sketch document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sketch {
    elements: Vec<Element>,
    atoms: Vec<Atom>,
}

impl Sketch {
    /// Creates an empty sketch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the grouping elements in source order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the flattened atom list.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Returns `true` if the sketch holds neither elements nor atoms.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.atoms.is_empty()
    }

    /// Appends a grouping element.
    pub fn push_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Inserts `atoms` in front of the flattened atom list.
    ///
    /// The inserted atoms keep their relative order, so prepending the atoms
    /// of each statement in turn leaves the last statement's atoms first.
    ///
    /// ```
    /// # use hsc_core::{Atom, Marker, Sketch};
    /// let mut sketch = Sketch::new();
    /// sketch.prepend_atoms(vec![Marker::new("a").into(), Marker::new("b").into()]);
    /// sketch.prepend_atoms(vec![Marker::new("c").into()]);
    ///
    /// let messages: Vec<_> = sketch
    ///     .atoms()
    ///     .iter()
    ///     .filter_map(Atom::as_marker)
    ///     .map(Marker::message)
    ///     .collect();
    /// assert_eq!(messages, ["c", "a", "b"]);
    /// ```
    pub fn prepend_atoms(&mut self, atoms: Vec<Atom>) {
        self.atoms.splice(0..0, atoms);
    }
}

impl fmt::Display for Sketch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sketch ({} elements, {} atoms)",
            self.elements.len(),
            self.atoms.len()
        )?;
        if !self.elements.is_empty() {
            write!(f, "\nelements:")?;
            for element in &self.elements {
                write!(f, "\n  {element}")?;
            }
        }
        if !self.atoms.is_empty() {
            write!(f, "\natoms:")?;
            for atom in &self.atoms {
                write!(f, "\n  {atom}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_prepend_atoms_reverses_statement_order() {
        let first = Stroke::new(3, vec![Point::full_pressure(0, 0)]);
        let second = Stroke::new(3, vec![Point::full_pressure(1, 1)]);

        let mut sketch = Sketch::new();
        sketch.prepend_atoms(vec![first.clone().into()]);
        sketch.prepend_atoms(vec![second.clone().into()]);

        assert_eq!(sketch.atoms(), &[Atom::Stroke(second), Atom::Stroke(first)]);
    }

    #[test]
    fn test_affine_identity() {
        let affine = Affine::default();
        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_approx_eq!(f32, affine.get(row, col), expected);
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_affine_get_out_of_range() {
        Affine::IDENTITY.get(3, 0);
    }

    #[test]
    fn test_element_keeps_modifier_order() {
        let shift = Affine::new([1.0, 0.0, 5.0, 0.0, 1.0, 5.0, 0.0, 0.0, 1.0]);
        let mut element = Element::new(GroupKind::Pencil);
        element.push_modifier(Affine::IDENTITY);
        element.push_modifier(shift);

        assert_eq!(
            element.modifiers(),
            &[Modifier::Affine(Affine::IDENTITY), Modifier::Affine(shift)]
        );
    }

    #[test]
    fn test_atom_accessors() {
        let marker: Atom = Marker::new("note").into();
        assert!(marker.as_stroke().is_none());
        assert_eq!(marker.as_marker().map(Marker::message), Some("note"));
    }

    #[test]
    fn test_sketch_display() {
        let mut sketch = Sketch::new();
        let atoms: Vec<Atom> = vec![Marker::new("hi").into()];
        sketch.push_element(Element::new(GroupKind::Brush).with_atoms(atoms.clone()));
        sketch.prepend_atoms(atoms);

        assert_eq!(
            sketch.to_string(),
            "Sketch (1 elements, 1 atoms)\nelements:\n  Brush\n    Marker (hi)\natoms:\n  Marker (hi)"
        );
    }

    #[test]
    fn test_empty_sketch() {
        let sketch = Sketch::new();
        assert!(sketch.is_empty());
        assert_eq!(sketch.to_string(), "Sketch (0 elements, 0 atoms)");
    }
}
