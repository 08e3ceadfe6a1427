use serde::{Deserialize, Serialize};

/// Color used by fills, gradients, tints and strokes.
///
/// Hue-driven overlays keep their HSL form so hosts can see the animated hue
/// directly; [`Color::to_rgba8`] resolves either form to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Hue in degrees, saturation and lightness in percent
    Hsla { h: f64, s: f64, l: f64, a: f64 },
}

impl Color {
    pub const BLACK: Color = Color::Rgba { r: 0, g: 0, b: 0, a: 1.0 };
    pub const WHITE: Color = Color::Rgba { r: 255, g: 255, b: 255, a: 1.0 };
    pub const TRANSPARENT: Color = Color::Rgba { r: 0, g: 0, b: 0, a: 0.0 };

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// HSL color with the hue wrapped into `[0, 360)`
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Color::Hsla {
            h: h.rem_euclid(360.0),
            s,
            l,
            a: 1.0,
        }
    }

    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    /// Resolve to `[r, g, b, a]` bytes
    pub fn to_rgba8(&self) -> [u8; 4] {
        match *self {
            Color::Rgba { r, g, b, a } => [r, g, b, unit_to_byte(a)],
            Color::Hsla { h, s, l, a } => {
                let [r, g, b] = hsl_to_rgb(h, s / 100.0, l / 100.0);
                [unit_to_byte(r), unit_to_byte(g), unit_to_byte(b), unit_to_byte(a)]
            }
        }
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    [r + m, g + m, b + m]
}
