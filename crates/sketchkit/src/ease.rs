//! Easing curves.
//!
//! Purpose
//! - Map a progress ratio in [0, 1] to an eased ratio with `f(0) = 0` and
//!   `f(1) = 1` (back curves overshoot in between).
//! - Compose two curves around a threshold (`concatenate`, `integrate`).
//!
//! Named curves are a closed set (`Easing`), so they can be parsed from and
//! printed as names such as `in-out-cubic` or `out-back=2.5`.

use std::fmt;
use std::str::FromStr;

/// Base shape shared by the four easing directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Quad,
    Cubic,
    Quart,
    Expo,
    /// Overshooting curve with the given coefficient.
    Back(f64),
}

impl Curve {
    /// Overshoot coefficient commonly used for "back" easing (about 10%).
    pub const BACK_DEFAULT: f64 = 1.70158;

    pub fn back() -> Self {
        Curve::Back(Self::BACK_DEFAULT)
    }

    /// Ease-in form.
    pub fn ease_in(self, x: f64) -> f64 {
        match self {
            Curve::Quad => x * x,
            Curve::Cubic => x * x * x,
            Curve::Quart => {
                let x2 = x * x;
                x2 * x2
            }
            Curve::Expo => {
                if x == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * (x - 1.0))
                }
            }
            Curve::Back(c) => x * x * ((c + 1.0) * x - c),
        }
    }

    /// Ease-out form.
    pub fn ease_out(self, x: f64) -> f64 {
        let r = x - 1.0;
        match self {
            Curve::Quad => 1.0 - r * r,
            Curve::Cubic => r * r * r + 1.0,
            Curve::Quart => {
                let r2 = r * r;
                1.0 - r2 * r2
            }
            Curve::Expo => {
                if x < 1.0 {
                    1.0 - 2f64.powf(-10.0 * x)
                } else {
                    1.0
                }
            }
            Curve::Back(c) => {
                let r2 = r * r;
                (c + 1.0) * (r * r2) + c * r2 + 1.0
            }
        }
    }

    fn name(self) -> &'static str {
        match self {
            Curve::Quad => "quad",
            Curve::Cubic => "cubic",
            Curve::Quart => "quart",
            Curve::Expo => "expo",
            Curve::Back(_) => "back",
        }
    }
}

/// Named easing function.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    In(Curve),
    Out(Curve),
    /// Ease-in for the first half, ease-out for the second.
    InOut(Curve),
    /// Ease-out for the first half, ease-in for the second.
    OutIn(Curve),
}

impl Easing {
    /// Every direction/curve pair with the default back coefficient.
    pub fn all() -> Vec<Easing> {
        let curves = [
            Curve::Quad,
            Curve::Cubic,
            Curve::Quart,
            Curve::Expo,
            Curve::back(),
        ];
        let mut out = vec![Easing::Linear];
        let dirs: [fn(Curve) -> Easing; 4] =
            [Easing::In, Easing::Out, Easing::InOut, Easing::OutIn];
        for dir in dirs {
            out.extend(curves.iter().map(|&c| dir(c)));
        }
        out
    }

    pub fn apply(self, x: f64) -> f64 {
        match self {
            Easing::Linear => x,
            Easing::In(c) => c.ease_in(x),
            Easing::Out(c) => c.ease_out(x),
            Easing::InOut(c) => integrate_at(|t| c.ease_in(t), |t| c.ease_out(t), 0.5, x),
            Easing::OutIn(c) => integrate_at(|t| c.ease_out(t), |t| c.ease_in(t), 0.5, x),
        }
    }

    /// The curve as a plain closure.
    pub fn as_fn(self) -> impl Fn(f64) -> f64 {
        move |x| self.apply(x)
    }
}

/// Run `a` on `[0, threshold)` and `b` on `[threshold, 1]`, each rescaled to
/// its own full input range. Outputs are not rescaled, so the result jumps at
/// the threshold unless `a(1) == b(0)`.
pub fn concatenate<A, B>(a: A, b: B, threshold: f64) -> impl Fn(f64) -> f64
where
    A: Fn(f64) -> f64,
    B: Fn(f64) -> f64,
{
    move |x| {
        if x < threshold {
            a(x / threshold)
        } else {
            b((x - threshold) / (1.0 - threshold))
        }
    }
}

/// Like `concatenate`, but outputs are rescaled into `[0, threshold]` and
/// `[threshold, 1]`, so two normalized curves join into a normalized curve.
pub fn integrate<A, B>(a: A, b: B, threshold: f64) -> impl Fn(f64) -> f64
where
    A: Fn(f64) -> f64,
    B: Fn(f64) -> f64,
{
    move |x| integrate_at(&a, &b, threshold, x)
}

#[inline]
fn integrate_at(a: impl Fn(f64) -> f64, b: impl Fn(f64) -> f64, threshold: f64, x: f64) -> f64 {
    if x < threshold {
        threshold * a(x / threshold)
    } else {
        let rest = 1.0 - threshold;
        threshold + rest * b((x - threshold) / rest)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dir, curve) = match *self {
            Easing::Linear => return f.write_str("linear"),
            Easing::In(c) => ("in", c),
            Easing::Out(c) => ("out", c),
            Easing::InOut(c) => ("in-out", c),
            Easing::OutIn(c) => ("out-in", c),
        };
        write!(f, "{dir}-{}", curve.name())?;
        match curve {
            Curve::Back(c) if c != Curve::BACK_DEFAULT => write!(f, "={c}"),
            _ => Ok(()),
        }
    }
}

/// Unrecognized easing name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseEasingError(pub String);

impl fmt::Display for ParseEasingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown easing {:?} (expected linear or <in|out|in-out|out-in>-<quad|cubic|quart|expo|back[=c]>)",
            self.0
        )
    }
}

impl std::error::Error for ParseEasingError {}

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseEasingError(s.to_string());
        let name = s.trim().to_ascii_lowercase();
        if name == "linear" {
            return Ok(Easing::Linear);
        }
        let (head, coefficient) = match name.split_once('=') {
            Some((h, c)) => (h, Some(c.parse::<f64>().map_err(|_| err())?)),
            None => (name.as_str(), None),
        };
        let (dir, curve_name) = head.rsplit_once('-').ok_or_else(err)?;
        let curve = match (curve_name, coefficient) {
            ("quad", None) => Curve::Quad,
            ("cubic", None) => Curve::Cubic,
            ("quart", None) => Curve::Quart,
            ("expo", None) => Curve::Expo,
            ("back", c) => Curve::Back(c.unwrap_or(Curve::BACK_DEFAULT)),
            _ => return Err(err()),
        };
        match dir {
            "in" => Ok(Easing::In(curve)),
            "out" => Ok(Easing::Out(curve)),
            "in-out" => Ok(Easing::InOut(curve)),
            "out-in" => Ok(Easing::OutIn(curve)),
            _ => Err(err()),
        }
    }
}
