//! Trimmable primitives besides general polygons.
//!
//! - `TrimmedLine`: the sub-segment between two ratios.
//! - `TrimmedEllipse`: an arc from `start * TAU` to `end * TAU`, sampled into
//!   line segments.
//! - Rectangle/square constructors returning a `PathTable`.
//! - `TrimShape`: closed set of the above behind one `trace` call.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use super::types::PathTable;
use crate::lerp2;
use crate::sink::PathSink;

/// Sub-segment of `a -> b` between `start` and `end` (unclamped ratios).
#[inline]
pub fn trim_line(
    a: Vector2<f64>,
    b: Vector2<f64>,
    start: f64,
    end: f64,
) -> (Vector2<f64>, Vector2<f64>) {
    (lerp2(a, b, start), lerp2(a, b, end))
}

/// Straight line that can be drawn partially.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrimmedLine {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl TrimmedLine {
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    pub fn trace<S: PathSink + ?Sized>(&self, start: f64, end: f64, sink: &mut S) {
        let (p, q) = trim_line(self.a, self.b, start, end);
        sink.begin_path();
        sink.vertex(p);
        sink.vertex(q);
        sink.end_path();
    }
}

/// How an open arc is closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArcMode {
    /// Arc points only.
    #[default]
    Open,
    /// Arc points, then back to the first arc point.
    Chord,
    /// Center, arc points, then back to the center.
    Pie,
}

/// Ellipse outline that can be drawn partially.
///
/// Ratios map to angles (`ratio * TAU`, measured from +x towards +y), not to
/// arc length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrimmedEllipse {
    pub center: Vector2<f64>,
    /// Full width and height.
    pub size: Vector2<f64>,
    pub mode: ArcMode,
    /// Line segments used for a full turn.
    pub detail: usize,
}

impl TrimmedEllipse {
    pub const DEFAULT_DETAIL: usize = 64;

    pub fn new(center: Vector2<f64>, size: Vector2<f64>) -> Self {
        Self {
            center,
            size,
            mode: ArcMode::Open,
            detail: Self::DEFAULT_DETAIL,
        }
    }

    pub fn circle(center: Vector2<f64>, diameter: f64) -> Self {
        Self::new(center, Vector2::new(diameter, diameter))
    }

    pub fn with_mode(self, mode: ArcMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_detail(self, detail: usize) -> Self {
        Self { detail, ..self }
    }

    /// Point on the outline at angle `theta`.
    #[inline]
    pub fn point_at_angle(&self, theta: f64) -> Vector2<f64> {
        self.center
            + Vector2::new(
                0.5 * self.size.x * theta.cos(),
                0.5 * self.size.y * theta.sin(),
            )
    }

    /// Emit the arc between `start` and `end`. Equal ratios emit nothing.
    pub fn trace<S: PathSink + ?Sized>(&self, start: f64, end: f64, sink: &mut S) {
        if start == end {
            return;
        }
        let a0 = start * TAU;
        let a1 = end * TAU;
        let turns = (end - start).abs();
        let steps = ((turns * self.detail as f64).ceil() as usize).max(1);

        sink.begin_path();
        if self.mode == ArcMode::Pie {
            sink.vertex(self.center);
        }
        for k in 0..=steps {
            let theta = a0 + (a1 - a0) * (k as f64 / steps as f64);
            sink.vertex(self.point_at_angle(theta));
        }
        match self.mode {
            ArcMode::Open => {}
            ArcMode::Chord => sink.vertex(self.point_at_angle(a0)),
            ArcMode::Pie => sink.vertex(self.center),
        }
        sink.end_path();
    }
}

/// Rectangle from its top-left corner. Vertex order: TL, TR, BR, BL.
pub fn rect_corner(x: f64, y: f64, width: f64, height: f64) -> PathTable {
    let x2 = x + width;
    let y2 = y + height;
    PathTable::new(vec![
        Vector2::new(x, y),
        Vector2::new(x2, y),
        Vector2::new(x2, y2),
        Vector2::new(x, y2),
    ])
}

/// Rectangle from its center. Vertex order: TL, TR, BR, BL.
pub fn rect_center(x: f64, y: f64, width: f64, height: f64) -> PathTable {
    rect_corner(x - 0.5 * width, y - 0.5 * height, width, height)
}

pub fn square_corner(x: f64, y: f64, size: f64) -> PathTable {
    rect_corner(x, y, size, size)
}

pub fn square_center(x: f64, y: f64, size: f64) -> PathTable {
    rect_center(x, y, size, size)
}

/// Any trimmable shape.
#[derive(Clone, Debug)]
pub enum TrimShape {
    Line(TrimmedLine),
    Ellipse(TrimmedEllipse),
    Polygon(PathTable),
}

impl TrimShape {
    pub fn trace<S: PathSink + ?Sized>(&self, start: f64, end: f64, sink: &mut S) {
        match self {
            TrimShape::Line(l) => l.trace(start, end, sink),
            TrimShape::Ellipse(e) => e.trace(start, end, sink),
            TrimShape::Polygon(p) => p.trace(start, end, sink),
        }
    }
}

impl From<TrimmedLine> for TrimShape {
    fn from(l: TrimmedLine) -> Self {
        TrimShape::Line(l)
    }
}
impl From<TrimmedEllipse> for TrimShape {
    fn from(e: TrimmedEllipse) -> Self {
        TrimShape::Ellipse(e)
    }
}
impl From<PathTable> for TrimShape {
    fn from(p: PathTable) -> Self {
        TrimShape::Polygon(p)
    }
}

/// Grow-then-shrink trim window for a cycle `progress` in [0, 1).
///
/// First half: `(0, 2p)`, the outline is drawn in. Second half:
/// `(2(p - 0.5), 1)`, it is erased from the start.
pub fn sweep_window(progress: f64) -> (f64, f64) {
    if progress < 0.5 {
        (0.0, 2.0 * progress)
    } else {
        (2.0 * (progress - 0.5), 1.0)
    }
}
