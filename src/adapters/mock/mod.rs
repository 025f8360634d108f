//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockPixelSource`] - Bitmap built from filled rectangles
//! - [`FixedClock`] - Clock that only moves when told to

pub mod clock;
pub mod pixels;

pub use clock::FixedClock;
pub use pixels::MockPixelSource;
