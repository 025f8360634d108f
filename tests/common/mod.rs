//! Common test utilities for integration tests.
//!
//! The quadrant fixture is a 128x128 key map split into four 64x64
//! quadrants:
//!
//! | Quadrant | Key | Label | Notes |
//! |----------|-----|-------|-------|
//! | upper left | red | "Upper Left" | disabled |
//! | upper right | lime | "Upper Right" | |
//! | lower left | blue | "" | no tooltip |
//! | lower right | yellow | "Lower Right" | toggle |

#![allow(dead_code)]

use imagemap::adapters::mock::MockPixelSource;
use imagemap::button::{ButtonEvent, ButtonOptions, ImageMapButton};
use imagemap::geometry::{Point, Rect, Size};
use imagemap::keymap::KeyMap;
use imagemap::{Area, Rgb};
use tokio::sync::mpsc;

pub const SIDE: u32 = 128;
pub const HALF: u32 = 64;

pub fn upper_left() -> Area {
    Area::new("Upper Left", Rgb::RED, Point::new(0, 0), Size::new(HALF, HALF)).disabled()
}

pub fn upper_right() -> Area {
    Area::new("Upper Right", Rgb::LIME, Point::new(64, 0), Size::new(HALF, HALF))
}

pub fn lower_left() -> Area {
    Area::new("", Rgb::BLUE, Point::new(0, 64), Size::new(HALF, HALF))
}

pub fn lower_right() -> Area {
    Area::toggle("Lower Right", Rgb::YELLOW, Point::new(64, 64), Size::new(HALF, HALF))
}

pub fn quadrant_areas() -> Vec<Area> {
    vec![upper_left(), upper_right(), lower_left(), lower_right()]
}

/// The fixture as an owned bitmap.
pub fn quadrant_key_map() -> KeyMap {
    KeyMap::solid(Size::new(SIDE, SIDE), Rgb::BLACK)
        .with_fill(Rect::from_xywh(0, 0, HALF, HALF), Rgb::RED)
        .with_fill(Rect::from_xywh(64, 0, HALF, HALF), Rgb::LIME)
        .with_fill(Rect::from_xywh(0, 64, HALF, HALF), Rgb::BLUE)
        .with_fill(Rect::from_xywh(64, 64, HALF, HALF), Rgb::YELLOW)
}

/// The fixture as a mock source that counts samples.
pub fn quadrant_source() -> MockPixelSource {
    MockPixelSource::new(Size::new(SIDE, SIDE), Rgb::BLACK)
        .with_fill(Rect::from_xywh(0, 0, HALF, HALF), Rgb::RED)
        .with_fill(Rect::from_xywh(64, 0, HALF, HALF), Rgb::LIME)
        .with_fill(Rect::from_xywh(0, 64, HALF, HALF), Rgb::BLUE)
        .with_fill(Rect::from_xywh(64, 64, HALF, HALF), Rgb::YELLOW)
}

/// A button over the quadrant fixture with setup events drained.
pub fn quadrant_button(options: ButtonOptions) -> (ImageMapButton, mpsc::UnboundedReceiver<ButtonEvent>) {
    let (mut button, mut rx) = ImageMapButton::new(options);
    button.set_key_map(quadrant_key_map());
    for area in quadrant_areas() {
        button.add_area(area).unwrap();
    }
    drain(&mut rx);
    (button, rx)
}

pub fn drain(rx: &mut mpsc::UnboundedReceiver<ButtonEvent>) -> Vec<ButtonEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Labels of the areas clicked, in order.
pub fn clicked_labels(events: &[ButtonEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(ButtonEvent::clicked_area)
        .map(|area| area.label().to_string())
        .collect()
}
