//! One-time password generation.
//!
//! - [`Totp`] - RFC 6238 time-based one-time passwords over a base32 secret
//! - [`HmacAlgorithm`] - HMAC hash selection (SHA-1, SHA-256, SHA-512, MD5)

pub mod totp;

pub use totp::{HmacAlgorithm, Totp, DEFAULT_DIGITS, DEFAULT_PERIOD_SECS};
