//! Small creative-coding utilities around 2D sketches.
//!
//! Modules
//! - `trim`: perimeter-parameterized trimming of polygons, lines and ellipses.
//! - `sink`: the vertex-emission seam that trimmed shapes write into.
//! - `curve`: Catmull-Rom curves through a list of points.
//! - `ease`: easing curves and their composition.
//! - `random`: random helpers over any `rand::Rng`, plus radial random polygons.
//! - `timer`, `canvas`, `join`, `pixels`: frame timers, canvas fitting, pair
//!   iteration and an RGBA pixel buffer with pixel density and textures.
//!
//! Rendering is not done here. Shapes emit vertices into a caller-supplied
//! `PathSink`; everything else is plain data in, plain data out.

pub mod canvas;
pub mod curve;
pub mod ease;
pub mod join;
pub mod pixels;
pub mod random;
pub mod sink;
pub mod timer;
pub mod trim;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::canvas::{scale_factor, ScaledCanvas, Size};
    pub use crate::curve::{curve_controls, trace_curve};
    pub use crate::ease::{concatenate, integrate, Curve, Easing};
    pub use crate::random::{draw_radial_polygon, RadialCfg, RandomFns, ReplayToken, VertexCount};
    pub use crate::sink::{PathRecorder, PathSink, Polyline};
    pub use crate::timer::{step_timers, Timer};
    pub use crate::trim::shapes::{
        rect_center, rect_corner, square_center, square_corner, sweep_window, ArcMode,
        TrimShape, TrimmedEllipse, TrimmedLine,
    };
    pub use crate::trim::{PathSegment, PathTable, TrimError};
    pub use nalgebra::Vector2 as Vec2;
}

/// Point at fraction `t` between `a` and `b` (unclamped).
///
/// Exact at both ends: `t = 0` yields `a` and `t = 1` yields `b`.
#[inline]
pub fn lerp2(a: Vec2<f64>, b: Vec2<f64>, t: f64) -> Vec2<f64> {
    a * (1.0 - t) + b * t
}

/// Maps `value` from `[start, end]` to `[0, 1]` (unclamped).
#[inline]
pub fn inverse_lerp(value: f64, start: f64, end: f64) -> f64 {
    (value - start) / (end - start)
}
