//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`SystemClock`] - Wall clock backed by `std::time::SystemTime`
//!
//! The bitmap adapter for [`PixelSource`](crate::traits::PixelSource) is
//! [`KeyMap`](crate::keymap::KeyMap) itself.
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockPixelSource`] - Rectangle-painted bitmap that counts samples
//! - [`mock::FixedClock`] - Manually advanced clock

pub mod mock;
pub mod system_clock;

pub use mock::{FixedClock, MockPixelSource};
pub use system_clock::SystemClock;
