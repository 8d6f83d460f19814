//! Random helpers over any `rand::Rng`.
//!
//! Purpose
//! - Name the small random draws sketches keep rewriting: ranges, signs,
//!   coin flips, stepped values, picks from a list, curve-remapped draws.
//! - Keep draws reproducible: `ReplayToken` turns `(seed, index)` into an
//!   independent `StdRng`, so the n-th shape of a run can be redrawn alone.
//!
//! All ranges are half-open (`[min, max)`), matching `Rng::gen::<f64>()`.

mod polygon;

pub use polygon::{draw_radial_polygon, draw_radial_table, RadialCfg, VertexCount};

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next item of the same run.
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Named random draws backed by `rng`.
#[derive(Clone, Debug)]
pub struct RandomFns<R> {
    rng: R,
}

impl RandomFns<StdRng> {
    pub fn from_token(tok: ReplayToken) -> Self {
        Self::new(tok.to_std_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomFns<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn ratio(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform in `[0, max)`.
    pub fn value(&mut self, max: f64) -> f64 {
        self.ratio() * max
    }

    /// Uniform in `[min, max)`. Pre: `min <= max`.
    pub fn between(&mut self, min: f64, max: f64) -> f64 {
        min + self.ratio() * (max - min)
    }

    /// Uniform angle in `[0, TAU)`.
    pub fn angle(&mut self) -> f64 {
        self.ratio() * TAU
    }

    /// `n` with probability `positive_probability`, otherwise `-n`.
    pub fn signed(&mut self, n: f64, positive_probability: f64) -> f64 {
        if self.ratio() < positive_probability {
            n
        } else {
            -n
        }
    }

    /// `true` with probability `probability`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.ratio() < probability
    }

    /// Uniform in `[-magnitude, magnitude)`.
    pub fn from_absolute(&mut self, magnitude: f64) -> f64 {
        -magnitude + self.ratio() * 2.0 * magnitude
    }

    /// Integer in `[0, max)`. Pre: `max >= 0`.
    pub fn int_value(&mut self, max: i64) -> i64 {
        (self.ratio() * max as f64).floor() as i64
    }

    /// Integer in `[min, max)`. Pre: `min <= max`.
    pub fn int_between(&mut self, min: i64, max: i64) -> i64 {
        min + (self.ratio() * (max - min) as f64).floor() as i64
    }

    /// Multiple of `step` in `[0, 1)`, e.g. step 0.25 gives 0, 0.25, 0.5 or 0.75.
    pub fn discrete_ratio(&mut self, step: f64) -> f64 {
        (self.ratio() / step).floor() * step
    }

    /// Multiple of `step` in `[0, max)`.
    pub fn discrete_value(&mut self, step: f64, max: f64) -> f64 {
        (self.ratio() * (max / step)).floor() * step
    }

    /// `min` plus a multiple of `step`, in `[min, max)`.
    pub fn discrete_between(&mut self, step: f64, min: f64, max: f64) -> f64 {
        min + (self.ratio() * ((max - min) / step)).floor() * step
    }

    /// Multiple of `step` in `[0, TAU)`.
    pub fn discrete_angle(&mut self, step: f64) -> f64 {
        (self.ratio() * (TAU / step)).floor() * step
    }

    /// Uniformly chosen element; `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.index_below(items.len());
        items.get(i)
    }

    /// Remove and return a uniformly chosen element; `None` if empty.
    pub fn remove_pick<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let i = self.index_below(items.len());
        Some(items.remove(i))
    }

    /// `curve` applied to a uniform ratio.
    pub fn curved_ratio(&mut self, curve: impl Fn(f64) -> f64) -> f64 {
        curve(self.ratio())
    }

    pub fn curved_value(&mut self, curve: impl Fn(f64) -> f64, magnitude: f64) -> f64 {
        curve(self.ratio()) * magnitude
    }

    /// `start + curve(u) * (end - start)`.
    pub fn curved_between(&mut self, curve: impl Fn(f64) -> f64, start: f64, end: f64) -> f64 {
        start + curve(self.ratio()) * (end - start)
    }

    /// Unit vector with a uniform angle.
    pub fn unit_vec2(&mut self) -> Vector2<f64> {
        let theta = self.angle();
        Vector2::new(theta.cos(), theta.sin())
    }

    pub fn vec2_with_length(&mut self, length: f64) -> Vector2<f64> {
        self.unit_vec2() * length
    }

    #[inline]
    fn index_below(&mut self, len: usize) -> usize {
        // Guard against ratio * len rounding up to len.
        ((self.ratio() * len as f64) as usize).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ease::{Curve, Easing};

    #[test]
    fn ranges_are_half_open() {
        let mut r = RandomFns::seeded(1);
        for _ in 0..500 {
            let v = r.between(-3.0, 2.0);
            assert!((-3.0..2.0).contains(&v));
            let a = r.angle();
            assert!((0.0..TAU).contains(&a));
            let m = r.from_absolute(4.0);
            assert!((-4.0..4.0).contains(&m));
            let i = r.int_between(-2, 3);
            assert!((-2..3).contains(&i));
            assert!((0..7).contains(&r.int_value(7)));
            let s = r.signed(1.5, 0.5);
            assert!(s == 1.5 || s == -1.5);
        }
    }

    #[test]
    fn probabilities_at_the_extremes() {
        let mut r = RandomFns::seeded(2);
        for _ in 0..100 {
            assert!(r.chance(1.0));
            assert!(!r.chance(0.0));
            assert_eq!(r.signed(2.0, 1.0), 2.0);
            assert_eq!(r.signed(2.0, 0.0), -2.0);
        }
    }

    #[test]
    fn discrete_draws_land_on_steps() {
        let mut r = RandomFns::seeded(3);
        for _ in 0..200 {
            let q = r.discrete_ratio(0.25);
            assert!([0.0, 0.25, 0.5, 0.75].contains(&q));
            let v = r.discrete_value(5.0, 20.0);
            assert!([0.0, 5.0, 10.0, 15.0].contains(&v));
            let b = r.discrete_between(2.0, 10.0, 16.0);
            assert!([10.0, 12.0, 14.0].contains(&b));
            let a = r.discrete_angle(std::f64::consts::FRAC_PI_2);
            let k = a / std::f64::consts::FRAC_PI_2;
            assert!((k - k.round()).abs() < 1e-12 && (0.0..4.0).contains(&k));
        }
    }

    #[test]
    fn picks_cover_and_drain() {
        let mut r = RandomFns::seeded(4);
        let empty: [u8; 0] = [];
        assert!(r.pick(&empty).is_none());
        let items = ['a', 'b', 'c'];
        let mut seen = [false; 3];
        for _ in 0..100 {
            let c = *r.pick(&items).unwrap();
            seen[(c as u8 - b'a') as usize] = true;
        }
        assert_eq!(seen, [true; 3]);

        let mut pool = vec![1, 2, 3, 4];
        let mut drained = Vec::new();
        while let Some(x) = r.remove_pick(&mut pool) {
            drained.push(x);
        }
        drained.sort_unstable();
        assert_eq!(drained, vec![1, 2, 3, 4]);
    }

    #[test]
    fn curved_draws_follow_the_curve() {
        let mut r = RandomFns::seeded(5);
        let square = Easing::In(Curve::Quad).as_fn();
        for _ in 0..100 {
            let v = r.curved_between(&square, 10.0, 20.0);
            assert!((10.0..20.0).contains(&v));
            assert!((0.0..3.0).contains(&r.curved_value(&square, 3.0)));
            assert!((0.0..1.0).contains(&r.curved_ratio(|u| u * u)));
        }
    }

    #[test]
    fn vectors_have_requested_length() {
        let mut r = RandomFns::seeded(6);
        assert!((r.unit_vec2().norm() - 1.0).abs() < 1e-12);
        assert!((r.vec2_with_length(3.5).norm() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn replay_tokens_are_deterministic_and_distinct() {
        let tok = ReplayToken::new(42, 0);
        let a: Vec<f64> = {
            let mut r = RandomFns::from_token(tok);
            (0..4).map(|_| r.ratio()).collect()
        };
        let b: Vec<f64> = {
            let mut r = RandomFns::from_token(tok);
            (0..4).map(|_| r.ratio()).collect()
        };
        let c: Vec<f64> = {
            let mut r = RandomFns::from_token(tok.next());
            (0..4).map(|_| r.ratio()).collect()
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(tok.next().index, 1);
    }
}
