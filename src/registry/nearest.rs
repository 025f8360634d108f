//! Nearest-color registry: CIE94 distance within a fuzziness threshold.

use tracing::{debug, info, trace};

use super::{clamp_fuzziness, AreaRegistry, MatchMode};
use crate::area::Area;
use crate::color::{cie94_lab, Lab, Rgb};
use crate::error::RegistryError;

#[derive(Debug, Clone)]
struct Entry {
    lab: Lab,
    area: Area,
}

/// Registry resolving pixels to the closest registered key.
///
/// Keys are converted to CIELAB once on insertion. Resolution is a linear
/// scan, which is fine for the handful of areas an image map carries.
/// Duplicate keys are accepted; the first one inserted shadows the rest.
#[derive(Debug, Default)]
pub struct NearestRegistry {
    entries: Vec<Entry>,
}

impl NearestRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AreaRegistry for NearestRegistry {
    fn add(&mut self, area: Area) -> Result<(), RegistryError> {
        info!("Registered area '{}' for {} (nearest)", area.label(), area.chroma_key());
        self.entries.push(Entry {
            lab: Lab::from(area.chroma_key()),
            area,
        });
        Ok(())
    }

    fn remove(&mut self, key: Rgb) -> Result<Area, RegistryError> {
        let (matching, kept): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.area.chroma_key() == key);
        self.entries = kept;

        let removed = matching.len();
        let first = matching
            .into_iter()
            .next()
            .map(|e| e.area)
            .ok_or(RegistryError::NotFound { key })?;
        info!("Removed {} area(s) for {}", removed, key);
        Ok(first)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn lookup(&self, key: Rgb) -> Result<&Area, RegistryError> {
        self.entries
            .iter()
            .map(|e| &e.area)
            .find(|a| a.chroma_key() == key)
            .ok_or(RegistryError::NotFound { key })
    }

    fn lookup_mut(&mut self, key: Rgb) -> Result<&mut Area, RegistryError> {
        self.entries
            .iter_mut()
            .map(|e| &mut e.area)
            .find(|a| a.chroma_key() == key)
            .ok_or(RegistryError::NotFound { key })
    }

    fn resolve(&self, pixel: Rgb, fuzziness: f64) -> Option<&Area> {
        let threshold = clamp_fuzziness(fuzziness);
        let target = Lab::from(pixel);

        let mut best: Option<(f64, &Area)> = None;
        for entry in &self.entries {
            let distance = if entry.area.chroma_key() == pixel {
                0.0
            } else {
                cie94_lab(target, entry.lab)
            };
            // Strict comparison keeps the earliest entry on ties
            if best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, &entry.area));
            }
        }

        match best {
            Some((distance, area)) if distance <= threshold => {
                trace!("{} resolved to {} at distance {:.3}", pixel, area.chroma_key(), distance);
                Some(area)
            }
            Some((distance, _)) => {
                debug!("{} nearest distance {:.3} exceeds {:.3}", pixel, distance, threshold);
                None
            }
            None => None,
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Area> + '_> {
        Box::new(self.entries.iter().map(|e| &e.area))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn match_mode(&self) -> MatchMode {
        MatchMode::Nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};

    fn area(label: &str, key: Rgb) -> Area {
        Area::new(label, key, Point::new(0, 0), Size::new(16, 16))
    }

    fn resolved_label<'a>(registry: &'a NearestRegistry, pixel: Rgb, fuzz: f64) -> Option<&'a str> {
        registry.resolve(pixel, fuzz).map(|a| a.label())
    }

    // ============= Resolution Tests =============

    #[test]
    fn test_fuzziness_zero_is_exact() {
        let mut registry = NearestRegistry::new();
        registry.add(area("cyan", Rgb::CYAN)).unwrap();
        assert_eq!(resolved_label(&registry, Rgb::CYAN, 0.0), Some("cyan"));
        assert_eq!(resolved_label(&registry, Rgb::LIGHT_CYAN, 0.0), None);
    }

    #[test]
    fn test_threshold_around_known_distance() {
        // Cyan to LightCyan is 13.93 under CIE94
        let mut registry = NearestRegistry::new();
        registry.add(area("cyan", Rgb::CYAN)).unwrap();
        assert_eq!(resolved_label(&registry, Rgb::LIGHT_CYAN, 13.9), None);
        assert_eq!(resolved_label(&registry, Rgb::LIGHT_CYAN, 14.0), Some("cyan"));
    }

    #[test]
    fn test_picks_closest_key() {
        let mut registry = NearestRegistry::new();
        registry.add(area("red", Rgb::RED)).unwrap();
        registry.add(area("blue", Rgb::BLUE)).unwrap();
        assert_eq!(resolved_label(&registry, Rgb::new(200, 10, 10), 100.0), Some("red"));
        assert_eq!(resolved_label(&registry, Rgb::new(10, 10, 200), 100.0), Some("blue"));
    }

    #[test]
    fn test_ties_go_to_first_inserted() {
        let mut registry = NearestRegistry::new();
        registry.add(area("first", Rgb::RED)).unwrap();
        registry.add(area("second", Rgb::RED)).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(resolved_label(&registry, Rgb::RED, 0.0), Some("first"));
        assert_eq!(resolved_label(&registry, Rgb::new(250, 0, 0), 50.0), Some("first"));
    }

    #[test]
    fn test_monotonic_in_fuzziness() {
        let mut registry = NearestRegistry::new();
        registry.add(area("lime", Rgb::LIME)).unwrap();
        let pixel = Rgb::new(40, 220, 60);
        let mut matched = false;
        for step in 0..=100 {
            let now = registry.resolve(pixel, step as f64).is_some();
            assert!(!(matched && !now), "match lost when fuzziness rose to {}", step);
            matched |= now;
        }
        assert!(matched);
    }

    #[test]
    fn test_nan_and_negative_fuzziness_are_zero() {
        let mut registry = NearestRegistry::new();
        registry.add(area("red", Rgb::RED)).unwrap();
        let near = Rgb::new(254, 0, 0);
        assert!(registry.resolve(near, f64::NAN).is_none());
        assert!(registry.resolve(near, -1.0).is_none());
        assert!(registry.resolve(Rgb::RED, f64::NAN).is_some());
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = NearestRegistry::new();
        assert!(registry.resolve(Rgb::WHITE, 100.0).is_none());
    }

    // ============= Mutation Tests =============

    #[test]
    fn test_remove_drops_all_duplicates() {
        let mut registry = NearestRegistry::new();
        registry.add(area("first", Rgb::RED)).unwrap();
        registry.add(area("blue", Rgb::BLUE)).unwrap();
        registry.add(area("second", Rgb::RED)).unwrap();

        let removed = registry.remove(Rgb::RED).unwrap();
        assert_eq!(removed.label(), "first");
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup(Rgb::RED).is_err());
        assert_eq!(
            registry.remove(Rgb::RED).unwrap_err(),
            RegistryError::NotFound { key: Rgb::RED }
        );
    }

    #[test]
    fn test_lookup_mut_hits_first_duplicate() {
        let mut registry = NearestRegistry::new();
        registry.add(area("first", Rgb::RED)).unwrap();
        registry.add(area("second", Rgb::RED)).unwrap();
        registry.lookup_mut(Rgb::RED).unwrap().pressed = true;

        let pressed: Vec<bool> = registry.iter().map(|a| a.pressed).collect();
        assert_eq!(pressed, vec![true, false]);
    }
}
