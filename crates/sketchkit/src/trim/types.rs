//! Path table types and the checked-construction error.

use std::fmt;

use nalgebra::Vector2;

use crate::inverse_lerp;

/// One polygon edge tagged with its share of the perimeter.
///
/// `from` and `to` index into the owning table's vertex list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSegment {
    pub from: usize,
    pub to: usize,
    pub length: f64,
    pub previous_ratio: f64,
    pub next_ratio: f64,
}

impl PathSegment {
    /// Fraction of the perimeter covered by this segment.
    #[inline]
    pub fn span(&self) -> f64 {
        self.next_ratio - self.previous_ratio
    }

    /// Position of a perimeter `ratio` inside this segment (unclamped).
    #[inline]
    pub fn local_fraction(&self, ratio: f64) -> f64 {
        inverse_lerp(ratio, self.previous_ratio, self.next_ratio)
    }
}

/// Arc-length parameterization of a closed polygon.
///
/// Invariants:
/// - `segments.len() == vertices.len()`; segment `i` runs from vertex `i` to
///   vertex `(i + 1) % n`.
/// - `segments[0].previous_ratio == 0.0` and the last `next_ratio == 1.0`
///   exactly.
/// - `segments[i].next_ratio == segments[i + 1].previous_ratio`.
///
/// There is no mutating API; build a new table for new vertices.
#[derive(Clone, Debug)]
pub struct PathTable {
    pub(super) vertices: Vec<Vector2<f64>>,
    pub(super) segments: Vec<PathSegment>,
    pub(super) perimeter: f64,
}

impl PathTable {
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }
    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
    /// Sum of all segment lengths.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }
    #[inline]
    pub fn segment_from(&self, seg: &PathSegment) -> Vector2<f64> {
        self.vertices[seg.from]
    }
    #[inline]
    pub fn segment_to(&self, seg: &PathSegment) -> Vector2<f64> {
        self.vertices[seg.to]
    }
}

/// Rejections from `PathTable::checked`.
#[derive(Clone, Debug, PartialEq)]
pub enum TrimError {
    /// A closed path needs at least two vertices.
    TooFewVertices { count: usize },
    /// A vertex has a NaN or infinite coordinate.
    NonFinite { index: usize },
    /// The perimeter is zero (all vertices coincide) or overflows.
    DegeneratePerimeter { perimeter: f64 },
    /// Edge `index` (vertex `index` to the next one) covers no share of the
    /// perimeter, e.g. a ring whose last vertex repeats the first.
    ZeroLengthEdge { index: usize },
}

impl fmt::Display for TrimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrimError::TooFewVertices { count } => {
                write!(f, "polygon needs at least 2 vertices, got {count}")
            }
            TrimError::NonFinite { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
            TrimError::DegeneratePerimeter { perimeter } => write!(
                f,
                "polygon perimeter must be positive and finite, got {perimeter}"
            ),
            TrimError::ZeroLengthEdge { index } => {
                write!(f, "edge {index} has zero length (repeated vertex)")
            }
        }
    }
}

impl std::error::Error for TrimError {}
