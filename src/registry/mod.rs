//! Chroma-key area registries.
//!
//! A registry stores the clickable [`Area`]s of one image map, keyed by
//! chroma key, and answers the hit-resolution question "which area does
//! this key-map pixel belong to?".
//!
//! Two variants exist:
//!
//! - [`ExactRegistry`]: one area per key, byte-for-byte lookup, fuzziness
//!   ignored. Rejects duplicate keys.
//! - [`NearestRegistry`]: accepts duplicate keys and resolves to the area
//!   whose key is closest by CIE94 distance, within a fuzziness threshold.
//!
//! The button holds a `Box<dyn AreaRegistry>` built with [`registry_for`].

mod exact;
mod nearest;

use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::color::Rgb;
use crate::error::RegistryError;

pub use exact::ExactRegistry;
pub use nearest::NearestRegistry;

/// Largest meaningful fuzziness value. CIE94 distances between sRGB colors
/// do not exceed it by much, so anything larger behaves like "always match".
pub const MAX_FUZZINESS: f64 = 100.0;

/// How pixel colors are matched against registered chroma keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Byte-for-byte key equality.
    #[default]
    Exact,
    /// Closest key by CIE94 distance within the fuzziness threshold.
    Nearest,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::Nearest => "nearest",
        }
    }
}

/// Storage and hit resolution for the areas of one image map.
pub trait AreaRegistry: Send + std::fmt::Debug {
    /// Register an area.
    ///
    /// Exact registries fail with [`RegistryError::DuplicateKey`] when the
    /// key is taken. Nearest registries always append.
    fn add(&mut self, area: Area) -> Result<(), RegistryError>;

    /// Remove the area registered under `key` and return it.
    ///
    /// For nearest registries holding duplicates, every area under `key`
    /// is removed and the first one inserted is returned.
    fn remove(&mut self, key: Rgb) -> Result<Area, RegistryError>;

    /// Remove every area.
    fn clear(&mut self);

    /// Exact-key lookup.
    fn lookup(&self, key: Rgb) -> Result<&Area, RegistryError>;

    /// Exact-key lookup for mutation of the `pressed`/`enabled` flags.
    fn lookup_mut(&mut self, key: Rgb) -> Result<&mut Area, RegistryError>;

    /// Find the area for a sampled key-map pixel.
    ///
    /// `fuzziness` is clamped into `[0, 100]` and NaN counts as 0. Exact
    /// registries ignore it.
    fn resolve(&self, pixel: Rgb, fuzziness: f64) -> Option<&Area>;

    /// Areas in insertion order.
    fn iter(&self) -> Box<dyn Iterator<Item = &Area> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn match_mode(&self) -> MatchMode;
}

/// Build an empty registry for the given match mode.
pub fn registry_for(mode: MatchMode) -> Box<dyn AreaRegistry> {
    match mode {
        MatchMode::Exact => Box::new(ExactRegistry::new()),
        MatchMode::Nearest => Box::new(NearestRegistry::new()),
    }
}

/// Clamp a fuzziness threshold into `[0, MAX_FUZZINESS]`.
#[inline]
pub fn clamp_fuzziness(fuzziness: f64) -> f64 {
    if fuzziness.is_nan() {
        0.0
    } else {
        fuzziness.clamp(0.0, MAX_FUZZINESS)
    }
}
