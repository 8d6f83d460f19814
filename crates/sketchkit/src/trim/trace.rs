//! Trim queries against a built path table.

use nalgebra::Vector2;

use super::locate::{locate_end, locate_start};
use super::types::{PathSegment, PathTable};
use crate::lerp2;
use crate::sink::{PathSink, Polyline};

impl PathTable {
    /// Emit the part of the outline between perimeter ratios `start` and `end`.
    ///
    /// Pre: `0 <= start <= end <= 1` (not checked).
    /// Post: exactly one `begin_path`/`end_path` bracket; the interpolated
    /// start point, every whole vertex strictly inside the window, then the
    /// interpolated end point.
    pub fn trace<S: PathSink + ?Sized>(&self, start: f64, end: f64, sink: &mut S) {
        let start_index = locate_start(start, &self.segments);
        let end_index = locate_end(end, &self.segments);
        let start_seg = &self.segments[start_index];
        let end_seg = &self.segments[end_index];

        sink.begin_path();
        sink.vertex(self.point_on(start_seg, start_seg.local_fraction(start)));
        if start_index < end_index {
            for seg in &self.segments[start_index..end_index] {
                sink.vertex(self.vertices[seg.to]);
            }
        }
        sink.vertex(self.point_on(end_seg, end_seg.local_fraction(end)));
        sink.end_path();
    }

    /// Points of `trace(start, end)` collected into a vector.
    pub fn trimmed(&self, start: f64, end: f64) -> Vec<Vector2<f64>> {
        let mut line = Polyline::default();
        self.trace(start, end, &mut line);
        line.points
    }

    /// Point at perimeter fraction `ratio`.
    pub fn point_at(&self, ratio: f64) -> Vector2<f64> {
        let seg = &self.segments[locate_start(ratio, &self.segments)];
        self.point_on(seg, seg.local_fraction(ratio))
    }

    #[inline]
    fn point_on(&self, seg: &PathSegment, t: f64) -> Vector2<f64> {
        lerp2(self.vertices[seg.from], self.vertices[seg.to], t)
    }
}
