//! Color difference formulas.
//!
//! All functions take two colors and return a non-negative distance where
//! `0.0` means identical. [`cie94`] is the metric used for fuzzy chroma-key
//! matching.

use serde::{Deserialize, Serialize};

use super::{Lab, Rgb};

/// Graphic-arts weighting constants for CIE94.
const CIE94_K1: f64 = 0.045;
const CIE94_K2: f64 = 0.015;

/// 25^7, shared by the CIEDE2000 chroma compensation terms.
const POW25_7: f64 = 6_103_515_625.0;

/// Selectable color difference algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaAlgorithm {
    /// Euclidean distance on raw 0-255 channels.
    Rgb,
    /// Euclidean distance in L*a*b*.
    Cie76,
    /// CIE 1994, graphic arts weighting.
    #[default]
    Cie94,
    /// CIEDE2000.
    Cie2000,
}

impl DeltaAlgorithm {
    pub fn distance(self, a: Rgb, b: Rgb) -> f64 {
        match self {
            DeltaAlgorithm::Rgb => delta_rgb(a, b),
            DeltaAlgorithm::Cie76 => cie76(a, b),
            DeltaAlgorithm::Cie94 => cie94(a, b),
            DeltaAlgorithm::Cie2000 => cie2000(a, b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeltaAlgorithm::Rgb => "rgb",
            DeltaAlgorithm::Cie76 => "cie76",
            DeltaAlgorithm::Cie94 => "cie94",
            DeltaAlgorithm::Cie2000 => "cie2000",
        }
    }

    /// Parse a lowercase algorithm name as printed by [`as_str`](Self::as_str).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rgb" => Some(DeltaAlgorithm::Rgb),
            "cie76" => Some(DeltaAlgorithm::Cie76),
            "cie94" => Some(DeltaAlgorithm::Cie94),
            "cie2000" | "ciede2000" => Some(DeltaAlgorithm::Cie2000),
            _ => None,
        }
    }
}

/// Euclidean distance between raw channels, range `[0, ~441.7]`.
pub fn delta_rgb(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// CIE76: Euclidean distance in L*a*b*.
pub fn cie76(a: Rgb, b: Rgb) -> f64 {
    cie76_lab(Lab::from(a), Lab::from(b))
}

pub fn cie76_lab(a: Lab, b: Lab) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE94 with graphic-arts constants (kL = 1, K1 = 0.045, K2 = 0.015).
///
/// The chroma weighting uses the larger of the two chromas as reference,
/// which keeps `cie94(a, b) == cie94(b, a)`.
pub fn cie94(a: Rgb, b: Rgb) -> f64 {
    cie94_lab(Lab::from(a), Lab::from(b))
}

pub fn cie94_lab(lab1: Lab, lab2: Lab) -> f64 {
    let delta_l = lab1.l - lab2.l;
    let delta_a = lab1.a - lab2.a;
    let delta_b = lab1.b - lab2.b;

    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let delta_c = c1 - c2;

    // ΔH² can dip below zero through rounding
    let delta_h_squared = delta_a * delta_a + delta_b * delta_b - delta_c * delta_c;
    let delta_h = if delta_h_squared > 0.0 {
        delta_h_squared.sqrt()
    } else {
        0.0
    };

    let reference_chroma = c1.max(c2);
    let sc = 1.0 + CIE94_K1 * reference_chroma;
    let sh = 1.0 + CIE94_K2 * reference_chroma;

    let weighted_c = delta_c / sc;
    let weighted_h = delta_h / sh;

    (delta_l * delta_l + weighted_c * weighted_c + weighted_h * weighted_h).sqrt()
}

/// CIEDE2000 with unit weighting factors.
pub fn cie2000(a: Rgb, b: Rgb) -> f64 {
    cie2000_lab(Lab::from(a), Lab::from(b))
}

pub fn cie2000_lab(lab1: Lab, lab2: Lab) -> f64 {
    let c_bar = (lab1.chroma() + lab2.chroma()) / 2.0;
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * lab1.a;
    let a2p = (1.0 + g) * lab2.a;
    let c1p = a1p.hypot(lab1.b);
    let c2p = a2p.hypot(lab2.b);
    let h1p = hue_degrees(a1p, lab1.b);
    let h2p = hue_degrees(a2p, lab2.b);

    let delta_lp = lab2.l - lab1.l;
    let delta_cp = c2p - c1p;

    let chroma_product = c1p * c2p;
    let delta_hp_angle = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let delta_hp = 2.0 * chroma_product.sqrt() * (delta_hp_angle / 2.0).to_radians().sin();

    let l_bar_p = (lab1.l + lab2.l) / 2.0;
    let c_bar_p = (c1p + c2p) / 2.0;
    let h_bar_p = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let rc = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();

    let l_offset = (l_bar_p - 50.0).powi(2);
    let sl = 1.0 + (0.015 * l_offset) / (20.0 + l_offset).sqrt();
    let sc = 1.0 + 0.045 * c_bar_p;
    let sh = 1.0 + 0.015 * c_bar_p * t;
    let rt = -(2.0 * delta_theta).to_radians().sin() * rc;

    let dl = delta_lp / sl;
    let dc = delta_cp / sc;
    let dh = delta_hp / sh;

    (dl * dl + dc * dc + dh * dh + rt * dc * dh).max(0.0).sqrt()
}

/// Hue angle in degrees, `[0, 360)`.
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}
