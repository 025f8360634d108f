//! Area registry errors.

use thiserror::Error;

use crate::color::Rgb;

/// Errors raised by [`AreaRegistry`](crate::registry::AreaRegistry)
/// implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An exact-match registry already holds an area under this key.
    #[error("an area is already registered for chroma key {key}")]
    DuplicateKey { key: Rgb },

    /// No area is registered under this exact key.
    #[error("no area registered for chroma key {key}")]
    NotFound { key: Rgb },
}

impl RegistryError {
    /// The chroma key the failed operation was about.
    pub fn key(&self) -> Rgb {
        match self {
            RegistryError::DuplicateKey { key } | RegistryError::NotFound { key } => *key,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistryError::DuplicateKey { .. } => "E_REG_DUPLICATE",
            RegistryError::NotFound { .. } => "E_REG_NOT_FOUND",
        }
    }
}
