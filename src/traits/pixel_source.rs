//! Pixel source trait abstraction.

use crate::color::Rgb;
use crate::geometry::{Point, Size};

/// Read-only access to the pixels of a chroma-key bitmap.
///
/// Implementations include the owned [`KeyMap`](crate::keymap::KeyMap)
/// bitmap and [`MockPixelSource`](crate::adapters::mock::MockPixelSource)
/// for tests.
pub trait PixelSource: Send + std::fmt::Debug {
    /// Bitmap dimensions in pixels.
    fn size(&self) -> Size;

    /// Color at `point`, or `None` when the point lies outside the bitmap.
    fn sample(&self, point: Point) -> Option<Rgb>;

    /// Whether `point` lies inside the bitmap.
    fn contains(&self, point: Point) -> bool {
        let size = self.size();
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < size.width
            && (point.y as u32) < size.height
    }
}

impl<P: PixelSource + ?Sized> PixelSource for Box<P> {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn sample(&self, point: Point) -> Option<Rgb> {
        (**self).sample(point)
    }
}
