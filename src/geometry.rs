//! Integer geometry for map areas.
//!
//! Points, sizes and rectangles live in image pixel space. Scaling
//! truncates toward zero, so a rect scaled up and then down may lose a pixel.

use serde::{Deserialize, Serialize};

/// A position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Scale each axis independently, truncating toward zero.
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        Self::new((self.x as f32 * sx) as i32, (self.y as f32 * sy) as i32)
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Scale each axis independently, truncating toward zero.
    pub fn scale(self, sw: f32, sh: f32) -> Self {
        Self::new(
            (self.width as f32 * sw).max(0.0) as u32,
            (self.height as f32 * sh).max(0.0) as u32,
        )
    }
}

/// An axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn x(&self) -> i32 {
        self.origin.x
    }

    pub fn y(&self) -> i32 {
        self.origin.y
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Right edge, exclusive.
    pub fn right(&self) -> i64 {
        i64::from(self.origin.x) + i64::from(self.size.width)
    }

    /// Bottom edge, exclusive.
    pub fn bottom(&self) -> i64 {
        i64::from(self.origin.y) + i64::from(self.size.height)
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        x >= i64::from(self.origin.x) && x < self.right() && y >= i64::from(self.origin.y) && y < self.bottom()
    }

    /// Scale origin and size independently on each axis.
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        Self::new(self.origin.scale(sx, sy), self.size.scale(sx, sy))
    }
}

/// Maps between base-image pixels and control pixels.
///
/// The control may be drawn larger or smaller than the base image. Pointer
/// positions arrive in control space and are unscaled before sampling the
/// key map; overlay destinations are scaled the other way when painting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub image: Size,
    pub control: Size,
}

impl Layout {
    pub const fn new(image: Size, control: Size) -> Self {
        Self { image, control }
    }

    /// Control drawn at the image's own size.
    pub const fn identity(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Horizontal and vertical scale from image to control. An axis with a
    /// zero dimension on either side scales by 1.
    pub fn scale(&self) -> (f32, f32) {
        let axis = |control: u32, image: u32| {
            if control == 0 || image == 0 {
                1.0
            } else {
                control as f32 / image as f32
            }
        };
        (
            axis(self.control.width, self.image.width),
            axis(self.control.height, self.image.height),
        )
    }

    /// Convert a control-space pointer position into image space,
    /// truncating toward zero.
    pub fn unscale(&self, point: Point) -> Point {
        let (sx, sy) = self.scale();
        point.scale(1.0 / sx, 1.0 / sy)
    }

    /// Convert an image-space rect into control space.
    pub fn to_control(&self, rect: Rect) -> Rect {
        let (sx, sy) = self.scale();
        rect.scale(sx, sy)
    }
}
