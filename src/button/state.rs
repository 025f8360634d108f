//! Interaction state of the button.

use std::fmt;

use crate::color::Rgb;

use super::events::CursorShape;

/// Visual state of the area under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    /// Pointer over an enabled area.
    Hot,
    /// Button held over an enabled area.
    Pressed,
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ButtonState::Normal => "normal",
            ButtonState::Hot => "hot",
            ButtonState::Pressed => "pressed",
        };
        f.write_str(name)
    }
}

/// Everything the state machine remembers between pointer events.
///
/// `current_key` is the chroma key of the resolved area, not the raw
/// sampled pixel, so fuzzy matches of one area compare equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub state: ButtonState,
    pub current_key: Option<Rgb>,
    /// Last tooltip text sent to the host.
    pub tooltip: Option<String>,
    pub tooltip_visible: bool,
    /// Last cursor shape sent to the host.
    pub cursor: CursorShape,
}

impl InteractionState {
    /// Back to Normal with no current area. Tooltip and cursor bookkeeping
    /// is left to the caller, which emits the matching events.
    pub fn reset(&mut self) {
        self.state = ButtonState::Normal;
        self.current_key = None;
    }

    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }
}
