//! Clickable map areas.
//!
//! An [`Area`] binds a chroma key to the rectangles used when painting its
//! hover/press/disabled overlays. Its identity is fixed at construction;
//! only the interaction flags `pressed` and `enabled` change afterwards.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::geometry::{Point, Rect, Size};

/// A clickable region of an image map, identified by its chroma key.
///
/// Equality and hashing cover label, chroma key, source, size, destination
/// and toggle mode. `pressed` and `enabled` are transient interaction state
/// and are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    label: String,
    chroma_key: Rgb,
    destination: Point,
    source: Point,
    size: Size,
    toggle_mode: bool,
    /// Latched state of a toggle area. Unused for momentary areas.
    pub pressed: bool,
    /// Disabled areas ignore hover and press.
    pub enabled: bool,
}

impl Area {
    /// Create a momentary area whose overlay is read from and painted to
    /// the same location.
    pub fn new(label: impl Into<String>, chroma_key: Rgb, location: Point, size: Size) -> Self {
        Self::with_source(label, chroma_key, location, location, size)
    }

    /// Create a momentary area with distinct destination and source.
    pub fn with_source(
        label: impl Into<String>,
        chroma_key: Rgb,
        destination: Point,
        source: Point,
        size: Size,
    ) -> Self {
        Self {
            label: label.into(),
            chroma_key,
            destination,
            source,
            size,
            toggle_mode: false,
            pressed: false,
            enabled: true,
        }
    }

    /// Create a toggle area at a single location.
    pub fn toggle(label: impl Into<String>, chroma_key: Rgb, location: Point, size: Size) -> Self {
        Self::new(label, chroma_key, location, size).into_toggle()
    }

    /// Turn this area into a toggle switch. Consumes the builder value, so
    /// toggle mode cannot change once the area is registered.
    pub fn into_toggle(mut self) -> Self {
        self.toggle_mode = true;
        self
    }

    /// Start disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Tooltip text. May be empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn chroma_key(&self) -> Rgb {
        self.chroma_key
    }

    pub fn destination(&self) -> Point {
        self.destination
    }

    pub fn source(&self) -> Point {
        self.source
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn toggle_mode(&self) -> bool {
        self.toggle_mode
    }

    /// Where the overlay is painted, in base-image coordinates.
    pub fn destination_rect(&self) -> Rect {
        Rect::new(self.destination, self.size)
    }

    /// Where the overlay is read from in the hover/press/disabled images.
    pub fn source_rect(&self) -> Rect {
        Rect::new(self.source, self.size)
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::new("", Rgb::MAGENTA, Point::default(), Size::default())
    }
}

impl PartialEq for Area {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.chroma_key == other.chroma_key
            && self.source == other.source
            && self.size == other.size
            && self.destination == other.destination
            && self.toggle_mode == other.toggle_mode
    }
}

impl Eq for Area {}

impl Hash for Area {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
        self.chroma_key.hash(state);
        self.source.hash(state);
        self.size.hash(state);
        self.destination.hash(state);
        self.toggle_mode.hash(state);
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.label, self.chroma_key, self.pressed)
    }
}
