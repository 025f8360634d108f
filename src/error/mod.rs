//! Error handling for the imagemap library.
//!
//! - **Domain errors**: [`RegistryError`], [`KeyMapError`], [`ConfigError`],
//!   [`Base32Error`], [`TotpError`]
//! - **Unified error**: [`ImageMapError`] wraps them all with a category,
//!   an error code and a user message
//! - **Result alias**: [`ImageMapResult<T>`]
//!
//! # Error Categories
//!
//! | Category | Description |
//! |----------|-------------|
//! | Misuse | API misuse such as a duplicate chroma key |
//! | Input | Malformed input (base32 text, TOTP settings) |
//! | Asset | Unreadable files or undecodable images |
//! | MapFile | Invalid map definition |
//!
//! Conditions that are not errors: hovering a disabled area, an empty
//! tooltip, a missing overlay image, a disabled control. These are silent
//! no-ops in the button state machine.

mod asset;
mod category;
mod codec;
mod imagemap_error;
mod registry;
mod result;

pub use asset::{ConfigError, KeyMapError};
pub use category::ErrorCategory;
pub use codec::{Base32Error, TotpError};
pub use imagemap_error::ImageMapError;
pub use registry::RegistryError;
pub use result::ImageMapResult;
