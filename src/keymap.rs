//! Chroma-key bitmaps.
//!
//! A key map is an image the same size as the button's base image in which
//! every clickable region is painted with a flat, unique color. The button
//! samples it at the (unscaled) pointer position to find the area under
//! the pointer. Alpha is discarded on load.

use std::path::Path;

use image::{DynamicImage, RgbImage};
use tracing::{debug, info};

use crate::color::Rgb;
use crate::error::KeyMapError;
use crate::geometry::{Point, Rect, Size};
use crate::traits::PixelSource;

/// An owned RGB bitmap, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    size: Size,
    pixels: Vec<Rgb>,
}

impl KeyMap {
    /// A bitmap filled with one color.
    pub fn solid(size: Size, color: Rgb) -> Self {
        Self {
            size,
            pixels: vec![color; size.width as usize * size.height as usize],
        }
    }

    /// Wrap a row-major pixel buffer.
    pub fn from_pixels(size: Size, pixels: Vec<Rgb>) -> Result<Self, KeyMapError> {
        let expected = size.width as usize * size.height as usize;
        if pixels.len() != expected {
            return Err(KeyMapError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { size, pixels })
    }

    /// Copy a decoded image, dropping alpha.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let size = Size::new(rgb.width(), rgb.height());
        let pixels = rgb.pixels().map(|p| Rgb::from(*p)).collect();
        Self { size, pixels }
    }

    /// Load a PNG or BMP key map from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KeyMapError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| KeyMapError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let keymap = Self::from_image(&image);
        info!(
            "Loaded key map {} ({}x{})",
            path.display(),
            keymap.size.width,
            keymap.size.height
        );
        Ok(keymap)
    }

    /// Write the bitmap to disk; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), KeyMapError> {
        let path = path.as_ref();
        self.to_image()
            .save(path)
            .map_err(|source| KeyMapError::Save {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Saved key map to {}", path.display());
        Ok(())
    }

    /// Convert into an `image` buffer.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.size.width, self.size.height, |x, y| {
            let i = y as usize * self.size.width as usize + x as usize;
            image::Rgb(self.pixels[i].to_array())
        })
    }

    /// Paint `rect` with `color`, clipped to the bitmap.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let x0 = rect.x().max(0) as i64;
        let y0 = rect.y().max(0) as i64;
        let x1 = rect.right().min(i64::from(self.size.width));
        let y1 = rect.bottom().min(i64::from(self.size.height));

        for y in y0..y1 {
            for x in x0..x1 {
                let i = y as usize * self.size.width as usize + x as usize;
                self.pixels[i] = color;
            }
        }
    }

    /// Builder form of [`fill_rect`](Self::fill_rect).
    pub fn with_fill(mut self, rect: Rect, color: Rgb) -> Self {
        self.fill_rect(rect, color);
        self
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl PixelSource for KeyMap {
    fn size(&self) -> Size {
        self.size
    }

    #[inline]
    fn sample(&self, point: Point) -> Option<Rgb> {
        if !self.contains(point) {
            return None;
        }
        let i = point.y as usize * self.size.width as usize + point.x as usize;
        self.pixels.get(i).copied()
    }
}
