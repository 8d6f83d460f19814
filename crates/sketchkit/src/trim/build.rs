//! Path table construction.

use nalgebra::Vector2;

use super::types::{PathSegment, PathTable, TrimError};

impl PathTable {
    /// Build the arc-length table of the closed polygon through `vertices`.
    ///
    /// Pre: at least 2 vertices and a non-zero perimeter (not checked).
    /// A zero perimeter yields NaN ratios, a zero-length edge yields NaN points
    /// at its ratio, and an empty list yields a table that panics on the first
    /// trace.
    pub fn new(vertices: Vec<Vector2<f64>>) -> Self {
        debug_assert!(vertices.len() >= 2, "closed path needs 2+ vertices");
        let n = vertices.len();
        let mut lengths = Vec::with_capacity(n);
        let mut perimeter = 0.0;
        for i in 0..n {
            let len = (vertices[(i + 1) % n] - vertices[i]).norm();
            lengths.push(len);
            perimeter += len;
        }

        let mut segments = Vec::with_capacity(n);
        let mut previous_ratio = 0.0;
        for (i, &length) in lengths.iter().enumerate() {
            // Last segment absorbs the accumulated rounding drift.
            let next_ratio = if i + 1 == n {
                1.0
            } else {
                previous_ratio + length / perimeter
            };
            segments.push(PathSegment {
                from: i,
                to: (i + 1) % n,
                length,
                previous_ratio,
                next_ratio,
            });
            previous_ratio = next_ratio;
        }

        Self {
            vertices,
            segments,
            perimeter,
        }
    }

    /// Like `new`, but rejects inputs that break its preconditions.
    pub fn checked(vertices: Vec<Vector2<f64>>) -> Result<Self, TrimError> {
        if vertices.len() < 2 {
            return Err(TrimError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(TrimError::NonFinite { index });
        }
        let table = Self::new(vertices);
        if !(table.perimeter > 0.0 && table.perimeter.is_finite()) {
            return Err(TrimError::DegeneratePerimeter {
                perimeter: table.perimeter,
            });
        }
        // A segment with an empty ratio span makes `local_fraction` 0/0.
        if let Some(index) = table.segments.iter().position(|s| !(s.span() > 0.0)) {
            return Err(TrimError::ZeroLengthEdge { index });
        }
        Ok(table)
    }

    /// Convenience for borrowed point lists.
    pub fn from_points(points: &[Vector2<f64>]) -> Self {
        Self::new(points.to_vec())
    }
}
