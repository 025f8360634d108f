//! imagemap - chroma-key image-map buttons
//!
//! An image-map button shows one picture but behaves like several buttons.
//! A hidden key-map bitmap of the same layout paints each clickable region
//! in its own solid color; the pointer position is looked up in the key
//! map and the sampled color names the region. This crate provides the
//! headless core of such a control:
//!
//! - [`registry`]: area storage and CIE94 hit resolution
//! - [`button`]: the hover/press/toggle state machine, auto-repeat and the
//!   paint plan
//! - [`keymap`]: bitmap-backed key maps
//! - [`config`]: JSON map definitions
//! - [`base32`] and [`auth`]: the RFC 4648 codec and TOTP generator
//!
//! The library also exposes the CLI driver for use in integration tests.

pub mod adapters;
pub mod area;
pub mod auth;
pub mod base32;
pub mod button;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod keymap;
pub mod logging;
pub mod prelude;
pub mod registry;
pub mod traits;

pub use area::Area;
pub use button::{ButtonEvent, ButtonOptions, ButtonState, ImageMapButton, PointerEvent};
pub use color::Rgb;
pub use error::{ImageMapError, ImageMapResult};
