//! Trait abstractions for dependency injection and testability.
//!
//! The button never touches image files or the wall clock directly. It
//! reads key-map pixels through [`PixelSource`] and the TOTP generator
//! reads the time through [`Clock`], so tests can substitute the mocks in
//! [`crate::adapters::mock`].
//!
//! # Traits
//!
//! - [`PixelSource`] - Sampled access to a chroma-key bitmap
//! - [`Clock`] - Current Unix time in seconds

pub mod clock;
pub mod pixel_source;

pub use clock::Clock;
pub use pixel_source::PixelSource;
