//! Unified error type for the imagemap library.
//!
//! `ImageMapError` consolidates the domain errors so that callers (the CLI
//! in particular) get uniform categorization, error codes and user
//! messages.

use std::fmt;

use super::asset::{ConfigError, KeyMapError};
use super::category::ErrorCategory;
use super::codec::{Base32Error, TotpError};
use super::registry::RegistryError;

/// Unified error type for the imagemap library.
#[derive(Debug)]
pub enum ImageMapError {
    /// Area registry misuse.
    Registry(RegistryError),

    /// Key-map bitmap loading.
    KeyMap(KeyMapError),

    /// Map definition file problems.
    Config(ConfigError),

    /// Base32 decoding.
    Base32(Base32Error),

    /// TOTP setup.
    Totp(TotpError),
}

impl ImageMapError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ImageMapError::Registry(_) => ErrorCategory::Misuse,
            ImageMapError::KeyMap(_) => ErrorCategory::Asset,
            ImageMapError::Config(err) => match err {
                ConfigError::Read { .. } | ConfigError::KeyMap(_) => ErrorCategory::Asset,
                _ => ErrorCategory::MapFile,
            },
            ImageMapError::Base32(_) | ImageMapError::Totp(_) => ErrorCategory::Input,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ImageMapError::Registry(RegistryError::DuplicateKey { key }) => {
                format!("Two areas share the chroma key {}. Each area needs its own color.", key)
            }
            ImageMapError::Registry(RegistryError::NotFound { key }) => {
                format!("No area uses the chroma key {}.", key)
            }
            ImageMapError::KeyMap(err) => format!("Key map image problem: {}", err),
            ImageMapError::Config(err) => format!("The map file is invalid: {}", err),
            ImageMapError::Base32(err) => format!("The text is not valid base32: {}", err),
            ImageMapError::Totp(err) => format!("Cannot generate a one-time password: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ImageMapError::Registry(err) => err.error_code(),
            ImageMapError::KeyMap(err) => err.error_code(),
            ImageMapError::Config(err) => err.error_code(),
            ImageMapError::Base32(_) => "E_BASE32",
            ImageMapError::Totp(err) => err.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for ImageMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageMapError::Registry(err) => write!(f, "{}", err),
            ImageMapError::KeyMap(err) => write!(f, "{}", err),
            ImageMapError::Config(err) => write!(f, "{}", err),
            ImageMapError::Base32(err) => write!(f, "{}", err),
            ImageMapError::Totp(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ImageMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageMapError::Registry(err) => Some(err),
            ImageMapError::KeyMap(err) => Some(err),
            ImageMapError::Config(err) => Some(err),
            ImageMapError::Base32(err) => Some(err),
            ImageMapError::Totp(err) => Some(err),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<RegistryError> for ImageMapError {
    fn from(err: RegistryError) -> Self {
        ImageMapError::Registry(err)
    }
}

impl From<KeyMapError> for ImageMapError {
    fn from(err: KeyMapError) -> Self {
        ImageMapError::KeyMap(err)
    }
}

impl From<ConfigError> for ImageMapError {
    fn from(err: ConfigError) -> Self {
        ImageMapError::Config(err)
    }
}

impl From<Base32Error> for ImageMapError {
    fn from(err: Base32Error) -> Self {
        ImageMapError::Base32(err)
    }
}

impl From<TotpError> for ImageMapError {
    fn from(err: TotpError) -> Self {
        ImageMapError::Totp(err)
    }
}
