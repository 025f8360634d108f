//! RFC 6238 time-based one-time passwords.
//!
//! The moving factor is `unix_time / period`, encoded as a big-endian
//! `u64` and signed with HMAC under the decoded base32 secret. The MAC is
//! reduced with RFC 4226 dynamic truncation. For 16-byte MD5 MACs the
//! truncation offset is capped so the four-byte window stays in bounds.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::adapters::SystemClock;
use crate::base32;
use crate::error::TotpError;
use crate::traits::Clock;

/// Seconds per time step.
pub const DEFAULT_PERIOD_SECS: u64 = 30;
/// Length of the generated code.
pub const DEFAULT_DIGITS: u32 = 6;

const MAX_DIGITS: u32 = 9;

/// Hash function under the HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HmacAlgorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
    Md5,
}

impl HmacAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HmacAlgorithm::Sha1 => "sha1",
            HmacAlgorithm::Sha256 => "sha256",
            HmacAlgorithm::Sha512 => "sha512",
            HmacAlgorithm::Md5 => "md5",
        }
    }

    /// HMAC of `message` under `key`.
    pub fn sign(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, TotpError> {
        match self {
            HmacAlgorithm::Sha1 => sign_with::<Hmac<Sha1>>(key, message),
            HmacAlgorithm::Sha256 => sign_with::<Hmac<Sha256>>(key, message),
            HmacAlgorithm::Sha512 => sign_with::<Hmac<Sha512>>(key, message),
            HmacAlgorithm::Md5 => sign_with::<Hmac<Md5>>(key, message),
        }
    }
}

fn sign_with<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Result<Vec<u8>, TotpError> {
    let mut mac = <M as KeyInit>::new_from_slice(key).map_err(|_| TotpError::InvalidKeyLength)?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HmacAlgorithm {
    type Err = TotpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(HmacAlgorithm::Sha1),
            "sha256" => Ok(HmacAlgorithm::Sha256),
            "sha512" => Ok(HmacAlgorithm::Sha512),
            "md5" => Ok(HmacAlgorithm::Md5),
            _ => Err(TotpError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}

/// A TOTP generator bound to one secret.
///
/// # Example
///
/// ```
/// use imagemap::auth::Totp;
///
/// let totp = Totp::new("JBSWY3DPK5XXE3DE").unwrap().with_period(60).unwrap();
/// assert_eq!(totp.at(60).unwrap(), "052202");
/// ```
#[derive(Clone)]
pub struct Totp {
    secret: Vec<u8>,
    algorithm: HmacAlgorithm,
    period: u64,
    digits: u32,
    clock: Arc<dyn Clock>,
}

impl Totp {
    /// Generator with SHA-1, a 30 second period and 6 digits.
    pub fn new(secret: &str) -> Result<Self, TotpError> {
        Ok(Self {
            secret: base32::decode(secret)?,
            algorithm: HmacAlgorithm::default(),
            period: DEFAULT_PERIOD_SECS,
            digits: DEFAULT_DIGITS,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_period(mut self, period_secs: u64) -> Result<Self, TotpError> {
        if period_secs == 0 {
            return Err(TotpError::InvalidPeriod);
        }
        self.period = period_secs;
        Ok(self)
    }

    pub fn with_digits(mut self, digits: u32) -> Result<Self, TotpError> {
        if digits == 0 || digits > MAX_DIGITS {
            return Err(TotpError::InvalidDigits { digits });
        }
        self.digits = digits;
        Ok(self)
    }

    pub fn with_algorithm(mut self, algorithm: HmacAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Read the time from `clock` in [`now`](Self::now).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn period(&self) -> u64 {
        self.period
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }

    /// Time step containing `unix_time`.
    pub fn counter(&self, unix_time: u64) -> u64 {
        unix_time / self.period
    }

    /// Code for the time step containing `unix_time`, zero-padded.
    pub fn at(&self, unix_time: u64) -> Result<String, TotpError> {
        let counter = self.counter(unix_time);
        let mac = self.algorithm.sign(&self.secret, &counter.to_be_bytes())?;
        let code = truncate(&mac) % 10u32.pow(self.digits);
        tracing::trace!("TOTP counter {} ({})", counter, self.algorithm);
        Ok(format!("{:0width$}", code, width = self.digits as usize))
    }

    /// Code for the current time.
    pub fn now(&self) -> Result<String, TotpError> {
        self.at(self.clock.unix_time())
    }

    /// Seconds until the current code expires.
    pub fn seconds_remaining(&self) -> u64 {
        self.period - self.clock.unix_time() % self.period
    }
}

impl fmt::Debug for Totp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Totp")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("period", &self.period)
            .field("digits", &self.digits)
            .finish()
    }
}

/// RFC 4226 dynamic truncation to a 31-bit integer.
fn truncate(mac: &[u8]) -> u32 {
    let last = mac.last().copied().unwrap_or(0);
    let offset = usize::from(last & 0x0F).min(mac.len().saturating_sub(4));
    match mac.get(offset..offset + 4) {
        Some(&[a, b, c, d]) => u32::from_be_bytes([a & 0x7F, b, c, d]),
        _ => 0,
    }
}
