//! Exact-match registry: one area per chroma key.

use std::collections::HashMap;

use tracing::{debug, info};

use super::{AreaRegistry, MatchMode};
use crate::area::Area;
use crate::color::Rgb;
use crate::error::RegistryError;

/// Registry keyed by exact chroma key.
///
/// Areas are kept in insertion order with a key index on the side, so
/// iteration order is stable and lookups are O(1).
#[derive(Debug, Default)]
pub struct ExactRegistry {
    areas: Vec<Area>,
    index: HashMap<Rgb, usize>,
}

impl ExactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn reindex(&mut self) {
        self.index = self
            .areas
            .iter()
            .enumerate()
            .map(|(i, area)| (area.chroma_key(), i))
            .collect();
    }
}

impl AreaRegistry for ExactRegistry {
    fn add(&mut self, area: Area) -> Result<(), RegistryError> {
        let key = area.chroma_key();
        if self.index.contains_key(&key) {
            debug!("Rejecting duplicate chroma key {}", key);
            return Err(RegistryError::DuplicateKey { key });
        }

        info!("Registered area '{}' for {}", area.label(), key);
        self.index.insert(key, self.areas.len());
        self.areas.push(area);
        Ok(())
    }

    fn remove(&mut self, key: Rgb) -> Result<Area, RegistryError> {
        let position = self
            .index
            .remove(&key)
            .ok_or(RegistryError::NotFound { key })?;
        let area = self.areas.remove(position);
        self.reindex();
        info!("Removed area '{}' for {}", area.label(), key);
        Ok(area)
    }

    fn clear(&mut self) {
        self.areas.clear();
        self.index.clear();
    }

    fn lookup(&self, key: Rgb) -> Result<&Area, RegistryError> {
        self.index
            .get(&key)
            .and_then(|&i| self.areas.get(i))
            .ok_or(RegistryError::NotFound { key })
    }

    fn lookup_mut(&mut self, key: Rgb) -> Result<&mut Area, RegistryError> {
        match self.index.get(&key) {
            Some(&i) => self.areas.get_mut(i).ok_or(RegistryError::NotFound { key }),
            None => Err(RegistryError::NotFound { key }),
        }
    }

    fn resolve(&self, pixel: Rgb, _fuzziness: f64) -> Option<&Area> {
        self.lookup(pixel).ok()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Area> + '_> {
        Box::new(self.areas.iter())
    }

    fn len(&self) -> usize {
        self.areas.len()
    }

    fn match_mode(&self) -> MatchMode {
        MatchMode::Exact
    }
}
