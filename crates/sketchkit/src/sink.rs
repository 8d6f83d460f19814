//! Vertex-emission seam for trimmed shapes.
//!
//! A trace calls `begin_path` once, `vertex` any number of times, then
//! `end_path` once. Sinks own whatever drawing context they wrap; shapes never
//! create one.

use nalgebra::Vector2;

/// Receiver of emitted path vertices.
pub trait PathSink {
    fn begin_path(&mut self);
    fn vertex(&mut self, p: Vector2<f64>);
    fn end_path(&mut self);
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    #[inline]
    fn begin_path(&mut self) {
        (**self).begin_path();
    }
    #[inline]
    fn vertex(&mut self, p: Vector2<f64>) {
        (**self).vertex(p);
    }
    #[inline]
    fn end_path(&mut self) {
        (**self).end_path();
    }
}

/// Keeps the points of the most recent path only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vector2<f64>>,
}

impl Polyline {
    /// Sum of distances between consecutive points.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}

impl PathSink for Polyline {
    fn begin_path(&mut self) {
        self.points.clear();
    }
    fn vertex(&mut self, p: Vector2<f64>) {
        self.points.push(p);
    }
    fn end_path(&mut self) {}
}

/// Records every path as its own point list, in emission order.
#[derive(Clone, Debug, Default)]
pub struct PathRecorder {
    pub paths: Vec<Vec<Vector2<f64>>>,
    open: bool,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a `begin_path` has not been matched by `end_path`.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl PathSink for PathRecorder {
    fn begin_path(&mut self) {
        debug_assert!(!self.open, "begin_path inside an open path");
        self.paths.push(Vec::new());
        self.open = true;
    }
    fn vertex(&mut self, p: Vector2<f64>) {
        debug_assert!(self.open, "vertex outside begin_path/end_path");
        if let Some(path) = self.paths.last_mut() {
            path.push(p);
        }
    }
    fn end_path(&mut self) {
        debug_assert!(self.open, "end_path without begin_path");
        self.open = false;
    }
}
