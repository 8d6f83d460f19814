//! Random star-shaped polygons by radial jitter.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π) (plus an optional random
//!   phase), jitter each angle by up to `angle_jitter_frac` of the spacing,
//!   and pick each radius uniformly in `[radius_min, radius_max)`.
//! - Vertices stay in angle order, so the outline is simple (never
//!   self-intersecting) while the jitter stays below half the spacing.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::Rng;

use crate::trim::PathTable;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(5),
            angle_jitter_frac: 1.0 / 3.0,
            radius_min: 15.0,
            radius_max: 50.0,
            random_phase: false,
        }
    }
}

impl RadialCfg {
    /// Irregular triangle, roughly 25..45 units from the center.
    pub fn triangle() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(3),
            // π/4 out of a 2π/3 spacing.
            angle_jitter_frac: 0.375,
            radius_min: 25.0,
            radius_max: 45.0,
            random_phase: false,
        }
    }

    /// Irregular pentagon, 15..50 units from the center.
    pub fn pentagon() -> Self {
        Self::default()
    }
}

/// Draw the vertices of a random polygon around the origin.
pub fn draw_radial_polygon<R: Rng>(cfg: RadialCfg, rng: &mut R) -> Vec<Vector2<f64>> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r_lo = cfg.radius_min.max(0.0);
    let r_hi = cfg.radius_max.max(r_lo);
    let delta = TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let theta = phase + (k as f64) * delta + jitter;
            let r = r_lo + rng.gen::<f64>() * (r_hi - r_lo);
            Vector2::new(theta.cos() * r, theta.sin() * r)
        })
        .collect()
}

/// `draw_radial_polygon` wrapped into a trimmable path table.
pub fn draw_radial_table<R: Rng>(cfg: RadialCfg, rng: &mut R) -> PathTable {
    PathTable::new(draw_radial_polygon(cfg, rng))
}
