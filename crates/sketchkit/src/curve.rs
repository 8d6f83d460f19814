//! Catmull-Rom curves through a list of points.
//!
//! A Catmull-Rom span is drawn between the middle two of its four control
//! points, so a curve through `points` needs extra controls at the ends:
//! - open: the first and last point are repeated, and the curve starts at the
//!   first point and stops at the last one;
//! - closed: the first three points are appended, and the curve runs from the
//!   second point all the way round and back to it.

use nalgebra::Vector2;

use crate::sink::PathSink;

/// Control points for a curve through `points`.
///
/// Closed curves with fewer than 3 points wrap around what there is.
pub fn curve_controls(points: &[Vector2<f64>], closed: bool) -> Vec<Vector2<f64>> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }
    let mut controls = Vec::with_capacity(n + 3);
    if closed {
        controls.extend_from_slice(points);
        controls.extend((0..3).map(|i| points[i % n]));
    } else {
        controls.push(points[0]);
        controls.extend_from_slice(points);
        controls.push(points[n - 1]);
    }
    controls
}

/// Point at `t` in [0, 1] on the uniform Catmull-Rom span from `p1` to `p2`.
pub fn catmull_rom(
    p0: Vector2<f64>,
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    t: f64,
) -> Vector2<f64> {
    let t2 = t * t;
    let t3 = t2 * t;
    (p1 * 2.0
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
        * 0.5
}

/// Emit the curve through `points`, sampled with `detail` line segments per
/// span. Fewer than 4 controls (a single point) emit nothing.
pub fn trace_curve<S: PathSink + ?Sized>(
    points: &[Vector2<f64>],
    closed: bool,
    detail: usize,
    sink: &mut S,
) {
    let controls = curve_controls(points, closed);
    if controls.len() < 4 {
        return;
    }
    let detail = detail.max(1);
    sink.begin_path();
    sink.vertex(controls[1]);
    for w in controls.windows(4) {
        for k in 1..detail {
            sink.vertex(catmull_rom(w[0], w[1], w[2], w[3], k as f64 / detail as f64));
        }
        // Span ends land on the input points exactly.
        sink.vertex(w[2]);
    }
    sink.end_path();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{PathRecorder, Polyline};
    use nalgebra::vector;

    fn square() -> Vec<Vector2<f64>> {
        vec![
            vector![30.0, 30.0],
            vector![70.0, 30.0],
            vector![70.0, 70.0],
            vector![30.0, 70.0],
        ]
    }

    #[test]
    fn controls_repeat_ends_or_wrap() {
        let pts = square();
        let open = curve_controls(&pts, false);
        assert_eq!(open.len(), 6);
        assert_eq!((open[0], open[1]), (pts[0], pts[0]));
        assert_eq!((open[4], open[5]), (pts[3], pts[3]));

        let closed = curve_controls(&pts, true);
        assert_eq!(closed.len(), 7);
        assert_eq!(&closed[4..], &pts[..3]);

        let pair = [vector![0.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(curve_controls(&pair, true).len(), 5);
        assert!(curve_controls(&[], true).is_empty());
    }

    #[test]
    fn span_hits_its_inner_controls() {
        let [a, b, c, d] = [
            vector![0.0, 0.0],
            vector![1.0, 2.0],
            vector![4.0, 2.0],
            vector![5.0, 0.0],
        ];
        assert_eq!(catmull_rom(a, b, c, d, 0.0), b);
        assert!((catmull_rom(a, b, c, d, 1.0) - c).norm() < 1e-12);
        // Collinear evenly spaced controls give a straight, uniform span.
        let line = |x: f64| vector![x, 0.0];
        let mid = catmull_rom(line(0.0), line(1.0), line(2.0), line(3.0), 0.5);
        assert!((mid - line(1.5)).norm() < 1e-12);
    }

    #[test]
    fn open_curve_passes_through_every_point() {
        let pts = square();
        let mut line = Polyline::default();
        trace_curve(&pts, false, 8, &mut line);
        assert_eq!(line.points.len(), 1 + 3 * 8);
        assert_eq!(line.points[0], pts[0]);
        for (i, p) in pts.iter().enumerate() {
            assert_eq!(line.points[i * 8], *p);
        }
    }

    #[test]
    fn closed_curve_returns_to_its_start() {
        let pts = square();
        let mut rec = PathRecorder::new();
        trace_curve(&pts, true, 4, &mut rec);
        trace_curve(&pts[..1], false, 4, &mut rec);
        assert_eq!(rec.paths.len(), 1);
        let path = &rec.paths[0];
        assert_eq!(path.len(), 1 + 4 * 4);
        assert_eq!(path.first(), Some(&pts[1]));
        assert_eq!(path.last(), Some(&pts[1]));
        for p in &pts {
            assert!(path.contains(p));
        }
    }
}
