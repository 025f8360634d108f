//! sRGB → CIE XYZ → CIE L*a*b* conversion.
//!
//! Observer 2°, illuminant D65. Every XYZ and Lab component is rounded
//! half-up to three decimals on construction so that distances computed
//! from the same pair of colors are bit-for-bit stable.

use super::Rgb;

/// D65 reference white, 2° observer.
const REF_X: f64 = 95.047;
const REF_Y: f64 = 100.0;
const REF_Z: f64 = 108.883;

/// Gamma companding breakpoint on the normalized channel value.
const GAMMA_BREAKPOINT: f64 = 0.04045;

/// Lab breakpoint on the normalized XYZ ratio, (6/29)^3.
const LAB_EPSILON: f64 = 0.008856;
const LAB_KAPPA: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Round half-up to `places` decimals.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    let power = 10f64.powi(places as i32);
    (value * power + 0.5).floor() / power
}

/// CIE 1931 XYZ tristimulus values, scaled so that Y of white is 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: round_half_up(x, 3),
            y: round_half_up(y, 3),
            z: round_half_up(z, 3),
        }
    }

    /// Convert normalized `[0.0, 1.0]` sRGB channels.
    pub fn from_normalized(r: f64, g: f64, b: f64) -> Self {
        let r = linearize(r) * 100.0;
        let g = linearize(g) * 100.0;
        let b = linearize(b) * 100.0;

        Self::new(
            r * 0.4124564 + g * 0.3575761 + b * 0.1804375,
            r * 0.2126729 + g * 0.7151522 + b * 0.0721750,
            r * 0.0193339 + g * 0.1191920 + b * 0.9503041,
        )
    }

    /// Convert back from Lab.
    pub fn from_lab(lab: Lab) -> Self {
        let y = (lab.l + 16.0) / 116.0;
        let x = lab.a / 500.0 + y;
        let z = y - lab.b / 200.0;

        Self::new(REF_X * unpivot(x), REF_Y * unpivot(y), REF_Z * unpivot(z))
    }
}

impl From<Rgb> for Xyz {
    fn from(color: Rgb) -> Self {
        Self::from_normalized(
            f64::from(color.r) / 255.0,
            f64::from(color.g) / 255.0,
            f64::from(color.b) / 255.0,
        )
    }
}

/// CIE 1976 L*a*b*.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self {
            l: round_half_up(l, 3),
            a: round_half_up(a, 3),
            b: round_half_up(b, 3),
        }
    }

    /// Chroma, the distance from the neutral axis.
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let x = pivot(xyz.x / REF_X);
        let y = pivot(xyz.y / REF_Y);
        let z = pivot(xyz.z / REF_Z);

        Self::new(116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }
}

impl From<Rgb> for Lab {
    fn from(color: Rgb) -> Self {
        Lab::from(Xyz::from(color))
    }
}

fn linearize(channel: f64) -> f64 {
    if channel > GAMMA_BREAKPOINT {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}

fn pivot(ratio: f64) -> f64 {
    if ratio > LAB_EPSILON {
        ratio.cbrt()
    } else {
        LAB_KAPPA * ratio + LAB_OFFSET
    }
}

fn unpivot(value: f64) -> f64 {
    let cubed = value * value * value;
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (value - LAB_OFFSET) / LAB_KAPPA
    }
}
