use serde::{Deserialize, Serialize};

use super::easing::Easing;

/// What happens to values outside the input range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolate {
    /// Hold the boundary output value
    Clamp,
    /// Keep following the eased curve past the boundary
    Extend,
}

/// Options for [`interpolate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolateOptions {
    pub easing: Easing,
    pub extrapolate_left: Extrapolate,
    pub extrapolate_right: Extrapolate,
}

impl Default for InterpolateOptions {
    fn default() -> Self {
        Self::clamped(Easing::Linear)
    }
}

impl InterpolateOptions {
    /// Clamp on both sides
    pub fn clamped(easing: Easing) -> Self {
        Self {
            easing,
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
        }
    }

    /// Extend on both sides
    pub fn extended(easing: Easing) -> Self {
        Self {
            easing,
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
        }
    }
}

/// Map `value` from control points in `input` onto the matching points in `output`.
///
/// The segment containing `value` is located, the value is normalized within it,
/// passed through the easing curve and mapped to the segment's output range.
/// Values before the first or after the last control point follow the
/// extrapolation settings. A zero-width segment yields its left output for
/// values at or before it and its right output otherwise.
pub fn interpolate<const N: usize>(
    value: f64,
    input: [f64; N],
    output: [f64; N],
    options: InterpolateOptions,
) -> f64 {
    let (input, output) = (&input[..], &output[..]);
    match output {
        [] => value,
        [only] => *only,
        _ => {
            let mut segment = 1;
            while segment < N - 1 && input[segment] < value {
                segment += 1;
            }
            let segment = segment - 1;

            interpolate_segment(
                value,
                (input[segment], input[segment + 1]),
                (output[segment], output[segment + 1]),
                options,
            )
        }
    }
}

fn interpolate_segment(
    value: f64,
    (in_min, in_max): (f64, f64),
    (out_min, out_max): (f64, f64),
    options: InterpolateOptions,
) -> f64 {
    if in_min == in_max {
        return if value <= in_min { out_min } else { out_max };
    }

    let mut t = (value - in_min) / (in_max - in_min);
    if t < 0.0 && options.extrapolate_left == Extrapolate::Clamp {
        t = 0.0;
    }
    if t > 1.0 && options.extrapolate_right == Extrapolate::Clamp {
        t = 1.0;
    }

    out_min + options.easing.apply(t) * (out_max - out_min)
}
