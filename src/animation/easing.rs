use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CompositorError, Result};

/// Easing curve applied to a normalized progress ratio.
///
/// `in`/`out`/`in-out` variants are built from a base curve the usual way:
/// `out(f)(t) = 1 - f(1 - t)` and `in_out(f)` mirrors `f` around `t = 0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SinIn,
    SinOut,
    SinInOut,
}

impl Easing {
    pub const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SinIn,
        Easing::SinOut,
        Easing::SinInOut,
    ];

    /// Map `t` through the curve.
    ///
    /// Inputs in `[0, 1]` map into `[0, 1]`. Inputs outside that range are not
    /// clamped so extended interpolation can keep following the curve.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::QuadIn => quad(t),
            Self::QuadOut => out(quad, t),
            Self::QuadInOut => in_out(quad, t),
            Self::CubicIn => cubic(t),
            Self::CubicOut => out(cubic, t),
            Self::CubicInOut => in_out(cubic, t),
            Self::SinIn => sin(t),
            Self::SinOut => out(sin, t),
            Self::SinInOut => in_out(sin, t),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadIn => "quadIn",
            Self::QuadOut => "quadOut",
            Self::QuadInOut => "quadInOut",
            Self::CubicIn => "cubicIn",
            Self::CubicOut => "cubicOut",
            Self::CubicInOut => "cubicInOut",
            Self::SinIn => "sinIn",
            Self::SinOut => "sinOut",
            Self::SinInOut => "sinInOut",
        }
    }
}

fn quad(t: f64) -> f64 {
    t * t
}

fn cubic(t: f64) -> f64 {
    t * t * t
}

fn sin(t: f64) -> f64 {
    1.0 - (t * PI / 2.0).cos()
}

fn out(curve: fn(f64) -> f64, t: f64) -> f64 {
    1.0 - curve(1.0 - t)
}

fn in_out(curve: fn(f64) -> f64, t: f64) -> f64 {
    if t < 0.5 {
        curve(t * 2.0) / 2.0
    } else {
        1.0 - curve((1.0 - t) * 2.0) / 2.0
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Easing {
    type Err = CompositorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|curve| curve.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CompositorError::generic(format!("unknown easing curve '{}'", s)))
    }
}

/// Map a progress ratio through a named curve.
pub fn ease(curve: Easing, t: f64) -> f64 {
    curve.apply(t)
}
