//! Coarse error classes.
//!
//! The CLI picks its hint text from the class, so callers never need to
//! match every concrete variant.

use std::fmt;

/// Who has to act to fix an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The embedding code broke a registry rule.
    Misuse,
    /// Text the user typed (base32, TOTP settings) is malformed.
    Input,
    /// A file could not be read or decoded.
    Asset,
    /// The map definition itself is inconsistent.
    MapFile,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Misuse => "misuse",
            ErrorCategory::Input => "input",
            ErrorCategory::Asset => "asset",
            ErrorCategory::MapFile => "map-file",
        }
    }

    /// What to do next, shown under the error message.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Misuse => "Give every area its own chroma key and only address registered keys",
            ErrorCategory::Input => "Check the value and try again",
            ErrorCategory::Asset => "Check that the file exists and is a readable PNG or BMP image",
            ErrorCategory::MapFile => "Check the map file for duplicate or malformed entries",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
