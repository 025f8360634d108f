//! Key map and map-file loading errors.

use std::path::PathBuf;

use thiserror::Error;

use super::registry::RegistryError;
use crate::color::ParseRgbError;

/// Errors raised while loading a key-map bitmap.
#[derive(Debug, Error)]
pub enum KeyMapError {
    /// The image file could not be opened or decoded.
    #[error("failed to load key map '{path}': {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The bitmap could not be encoded or written.
    #[error("failed to save key map '{path}': {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Pixel buffer length does not match `width * height`.
    #[error("key map buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

impl KeyMapError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            KeyMapError::Load { .. } => "E_KEYMAP_LOAD",
            KeyMapError::Save { .. } => "E_KEYMAP_SAVE",
            KeyMapError::BufferSize { .. } => "E_KEYMAP_SIZE",
        }
    }
}

/// Errors raised while reading a map definition file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read map file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for a map definition.
    #[error("failed to parse map file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A color literal could not be parsed.
    #[error(transparent)]
    Color(#[from] ParseRgbError),

    /// An area could not be registered.
    #[error("area {index} rejected: {source}")]
    Area {
        index: usize,
        #[source]
        source: RegistryError,
    },

    /// The key-map bitmap failed to load.
    #[error(transparent)]
    KeyMap(#[from] KeyMapError),
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "E_CFG_READ",
            ConfigError::Parse { .. } => "E_CFG_PARSE",
            ConfigError::Color(_) => "E_CFG_COLOR",
            ConfigError::Area { .. } => "E_CFG_AREA",
            ConfigError::KeyMap(_) => "E_CFG_KEYMAP",
        }
    }
}
