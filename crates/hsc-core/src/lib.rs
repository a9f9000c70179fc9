//! hsc Core Types
//!
//! This crate provides the document model produced by the hsc parsers and
//! consumed by renderers. It includes:
//!
//! - **Geometry**: Pressure-carrying [`geometry::Point`]s and pressure-less [`geometry::RawPoint`]s
//! - **Groups**: The grouping-kind enumeration ([`group::GroupKind`])
//! - **Sketch**: Strokes, markers, modifiers and grouped elements ([`sketch`] module)
//! - **Raw**: The legacy point-list document ([`raw`] module)
//!
//! All documents are plain owned values. Once a parser hands one back, nothing
//! in it borrows from the source text.

pub mod geometry;
pub mod group;
pub mod raw;
pub mod sketch;

pub use geometry::{Point, RawPoint};
pub use group::{GroupKind, UnknownGroupKind};
pub use raw::{RawSketch, RawStroke};
pub use sketch::{Affine, Atom, Element, Marker, Modifier, Sketch, Stroke};
