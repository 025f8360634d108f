//! Map definition files.
//!
//! A map file is JSON describing one button: the key-map bitmap, matching
//! and repeat settings, which overlay images exist, and the areas. Paths
//! are relative to the map file.
//!
//! ```json
//! {
//!   "key_map": "keys.png",
//!   "match_mode": "nearest",
//!   "fuzziness": 10,
//!   "multi_click": true,
//!   "repeat": { "initial_ms": 400 },
//!   "hot_image": "hot.png",
//!   "areas": [
//!     { "label": "Play", "color": "#ff0000",
//!       "destination": { "x": 0, "y": 0 }, "size": { "width": 64, "height": 64 } }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::area::Area;
use crate::button::{ButtonEvent, ButtonOptions, ImageMapButton, Overlays, RepeatSchedule};
use crate::color::Rgb;
use crate::error::ConfigError;
use crate::geometry::{Point, Size};
use crate::keymap::KeyMap;
use crate::registry::MatchMode;

/// One area entry of a map file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaConfig {
    #[serde(default)]
    pub label: String,
    /// `#rrggbb`
    pub color: String,
    pub destination: Point,
    /// Defaults to `destination`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Point>,
    pub size: Size,
    #[serde(default)]
    pub toggle: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Initial latch state for toggles.
    #[serde(default)]
    pub pressed: bool,
}

fn default_true() -> bool {
    true
}

impl AreaConfig {
    pub fn to_area(&self) -> Result<Area, ConfigError> {
        let key: Rgb = self.color.parse()?;
        let source = self.source.unwrap_or(self.destination);
        let mut area = Area::with_source(self.label.clone(), key, self.destination, source, self.size);
        if self.toggle {
            area = area.into_toggle();
            area.pressed = self.pressed;
        }
        area.enabled = self.enabled;
        Ok(area)
    }
}

/// A parsed map file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub key_map: PathBuf,
    /// Size the control is drawn at; defaults to the key map's size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_size: Option<Size>,
    #[serde(default)]
    pub fuzziness: f64,
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub multi_click: bool,
    #[serde(default)]
    pub repeat: RepeatSchedule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_image: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed_image: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_image: Option<PathBuf>,
    #[serde(default)]
    pub areas: Vec<AreaConfig>,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl MapConfig {
    /// Read and parse a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: MapConfig = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!("Parsed map file {} ({} areas)", path.display(), config.areas.len());
        Ok(config)
    }

    /// Key-map path with `base_dir` applied.
    pub fn key_map_path(&self) -> PathBuf {
        self.base_dir.join(&self.key_map)
    }

    pub fn options(&self) -> ButtonOptions {
        ButtonOptions {
            match_mode: self.match_mode,
            fuzziness: self.fuzziness,
            multi_click: self.multi_click,
            repeat: self.repeat,
            overlays: Overlays {
                hot: self.hot_image.is_some(),
                pressed: self.pressed_image.is_some(),
                disabled: self.disabled_image.is_some(),
            },
        }
    }

    /// Build every area, failing on the first bad color.
    pub fn areas(&self) -> Result<Vec<Area>, ConfigError> {
        self.areas.iter().map(AreaConfig::to_area).collect()
    }

    /// Load the key map and assemble a ready button.
    pub fn build_button(&self) -> Result<(ImageMapButton, mpsc::UnboundedReceiver<ButtonEvent>), ConfigError> {
        let key_map = KeyMap::load(self.key_map_path())?;
        self.build_button_with(key_map)
    }

    /// Assemble a button around an already loaded key map.
    pub fn build_button_with(
        &self,
        key_map: KeyMap,
    ) -> Result<(ImageMapButton, mpsc::UnboundedReceiver<ButtonEvent>), ConfigError> {
        let (mut button, rx) = ImageMapButton::new(self.options());
        if let Some(size) = self.control_size {
            button.set_control_size(size);
        }
        button.set_key_map(key_map);

        for (index, area) in self.areas()?.into_iter().enumerate() {
            button
                .add_area(area)
                .map_err(|source| ConfigError::Area { index, source })?;
        }

        info!(
            "Built {} button with {} areas",
            self.match_mode.as_str(),
            button.registry().len()
        );
        Ok((button, rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;

    const MINIMAL: &str = r##"{
        "key_map": "keys.png",
        "areas": [
            { "label": "A", "color": "#FF0000",
              "destination": { "x": 0, "y": 0 }, "size": { "width": 4, "height": 4 } },
            { "color": "00ff00", "toggle": true, "pressed": true, "enabled": false,
              "destination": { "x": 4, "y": 0 }, "source": { "x": 40, "y": 0 },
              "size": { "width": 4, "height": 4 } }
        ]
    }"##;

    #[test]
    fn test_defaults() {
        let config: MapConfig = serde_json::from_str(MINIMAL).unwrap();
        assert_eq!(config.match_mode, MatchMode::Exact);
        assert_eq!(config.fuzziness, 0.0);
        assert!(!config.multi_click);
        assert_eq!(config.repeat, RepeatSchedule::default());
        assert_eq!(config.options().overlays, Overlays::NONE);
    }

    #[test]
    fn test_area_conversion() {
        let config: MapConfig = serde_json::from_str(MINIMAL).unwrap();
        let areas = config.areas().unwrap();

        assert_eq!(areas[0].label(), "A");
        assert_eq!(areas[0].source(), areas[0].destination());
        assert!(areas[0].enabled);

        assert_eq!(areas[1].label(), "");
        assert_eq!(areas[1].chroma_key(), Rgb::LIME);
        assert!(areas[1].toggle_mode());
        assert!(areas[1].pressed);
        assert!(!areas[1].enabled);
        assert_eq!(areas[1].source(), Point::new(40, 0));
    }

    #[test]
    fn test_bad_color() {
        let mut config: MapConfig = serde_json::from_str(MINIMAL).unwrap();
        config.areas[0].color = "#12345".into();
        let err = config.areas().unwrap_err();
        assert_eq!(err.error_code(), "E_CFG_COLOR");
    }

    #[test]
    fn test_duplicate_key_reports_index() {
        let mut config: MapConfig = serde_json::from_str(MINIMAL).unwrap();
        config.areas[1].color = "#ff0000".into();
        let key_map = KeyMap::solid(Size::new(8, 4), Rgb::BLACK);
        match config.build_button_with(key_map) {
            Err(ConfigError::Area { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, RegistryError::DuplicateKey { key: Rgb::RED });
            }
            other => panic!("expected area error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_nearest_accepts_duplicates() {
        let mut config: MapConfig = serde_json::from_str(MINIMAL).unwrap();
        config.match_mode = MatchMode::Nearest;
        config.areas[1].color = "#ff0000".into();
        let (button, _rx) = config
            .build_button_with(KeyMap::solid(Size::new(8, 4), Rgb::BLACK))
            .unwrap();
        assert_eq!(button.registry().len(), 2);
    }

    #[test]
    fn test_control_size_applies() {
        let mut config: MapConfig = serde_json::from_str(MINIMAL).unwrap();
        config.control_size = Some(Size::new(16, 8));
        let (button, _rx) = config
            .build_button_with(KeyMap::solid(Size::new(8, 4), Rgb::BLACK))
            .unwrap();
        assert_eq!(button.layout().scale(), (2.0, 2.0));
    }

    #[test]
    fn test_relative_key_map_path() {
        let mut config: MapConfig = serde_json::from_str(MINIMAL).unwrap();
        config.base_dir = PathBuf::from("/maps/demo");
        assert_eq!(config.key_map_path(), PathBuf::from("/maps/demo/keys.png"));
    }
}
