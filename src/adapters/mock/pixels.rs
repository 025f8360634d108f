//! Rectangle-painted pixel source for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::color::Rgb;
use crate::geometry::{Point, Rect, Size};
use crate::traits::PixelSource;

/// A synthetic bitmap described as a background color plus filled
/// rectangles, later fills on top.
///
/// Every call to [`sample`](PixelSource::sample) is counted, which lets
/// tests assert that the button skipped sampling (for example while the
/// control is disabled).
///
/// # Example
///
/// ```
/// use imagemap::adapters::mock::MockPixelSource;
/// use imagemap::color::Rgb;
/// use imagemap::geometry::{Point, Rect, Size};
/// use imagemap::traits::PixelSource;
///
/// let source = MockPixelSource::new(Size::new(10, 10), Rgb::WHITE)
///     .with_fill(Rect::from_xywh(0, 0, 5, 5), Rgb::RED);
/// assert_eq!(source.sample(Point::new(2, 2)), Some(Rgb::RED));
/// assert_eq!(source.sample(Point::new(7, 7)), Some(Rgb::WHITE));
/// assert_eq!(source.sample(Point::new(10, 0)), None);
/// assert_eq!(source.sample_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockPixelSource {
    size: Size,
    background: Rgb,
    fills: Vec<(Rect, Rgb)>,
    samples: Arc<AtomicUsize>,
}

impl MockPixelSource {
    pub fn new(size: Size, background: Rgb) -> Self {
        Self {
            size,
            background,
            fills: Vec::new(),
            samples: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Paint `rect` with `color`.
    pub fn with_fill(mut self, rect: Rect, color: Rgb) -> Self {
        self.fills.push((rect, color));
        self
    }

    /// Number of samples taken so far, across all clones.
    pub fn sample_count(&self) -> usize {
        self.samples.load(Ordering::SeqCst)
    }
}

impl PixelSource for MockPixelSource {
    fn size(&self) -> Size {
        self.size
    }

    fn sample(&self, point: Point) -> Option<Rgb> {
        self.samples.fetch_add(1, Ordering::SeqCst);
        if !self.contains(point) {
            return None;
        }

        let color = self
            .fills
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(point))
            .map_or(self.background, |(_, color)| *color);
        Some(color)
    }
}
