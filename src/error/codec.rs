//! Base32 and TOTP errors.

use thiserror::Error;

/// Errors produced while decoding base32 text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base32Error {
    /// A character outside the RFC 4648 alphabet and the ignored separators.
    #[error("invalid base32 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Errors produced while setting up a one-time password generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TotpError {
    /// The shared secret is not valid base32.
    #[error("TOTP secret is not valid base32: {0}")]
    InvalidSecret(#[from] Base32Error),

    /// Digit count outside `1..=9`.
    #[error("TOTP digit count must be between 1 and 9, got {digits}")]
    InvalidDigits { digits: u32 },

    /// A zero-length time step.
    #[error("TOTP period must be at least one second")]
    InvalidPeriod,

    /// The HMAC implementation refused the key.
    #[error("TOTP secret has an unusable length")]
    InvalidKeyLength,

    /// Unknown HMAC algorithm name.
    #[error("unknown TOTP algorithm '{name}' (expected sha1, sha256, sha512 or md5)")]
    UnknownAlgorithm { name: String },
}

impl TotpError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TotpError::InvalidSecret(_) => "E_TOTP_SECRET",
            TotpError::InvalidDigits { .. } => "E_TOTP_DIGITS",
            TotpError::InvalidPeriod => "E_TOTP_PERIOD",
            TotpError::InvalidKeyLength => "E_TOTP_KEY",
            TotpError::UnknownAlgorithm { .. } => "E_TOTP_ALGORITHM",
        }
    }
}
