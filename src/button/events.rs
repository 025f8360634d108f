//! Pointer input and host-facing output events.
//!
//! The button never calls back into the host. Everything it wants the host
//! to do (change the cursor, show a tooltip, repaint, react to a click) is
//! sent as a [`ButtonEvent`] on an unbounded channel.

use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::geometry::Point;

/// Mouse button carried by a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    None,
    Left,
    Right,
    Middle,
}

/// A pointer sample in control coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    #[serde(default)]
    pub button: MouseButton,
    #[serde(default)]
    pub clicks: u32,
    pub x: i32,
    pub y: i32,
    /// Wheel delta, passed through untouched.
    #[serde(default)]
    pub delta: i32,
}

impl PointerEvent {
    /// A plain move to `(x, y)` with no button held.
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// A single left-button press or release at `(x, y)`.
    pub fn left(x: i32, y: i32) -> Self {
        Self {
            button: MouseButton::Left,
            clicks: 1,
            x,
            y,
            delta: 0,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Cursor shapes the button asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorShape {
    #[default]
    Default,
    /// Hand cursor shown over an enabled area.
    Pointer,
}

/// Payload of a click: the area (after any toggle flip) and the pointer
/// event that completed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub area: Area,
    pub pointer: PointerEvent,
}

/// Requests from the button to its host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ButtonEvent {
    SetCursor(CursorShape),
    SetTooltip(String),
    HideTooltip,
    /// The paint plan changed; repaint.
    Invalidate,
    Clicked(ClickEvent),
}

impl ButtonEvent {
    pub fn is_click(&self) -> bool {
        matches!(self, ButtonEvent::Clicked(_))
    }

    /// The clicked area, if this is a click.
    pub fn clicked_area(&self) -> Option<&Area> {
        match self {
            ButtonEvent::Clicked(click) => Some(&click.area),
            _ => None,
        }
    }
}
