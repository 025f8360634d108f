//! Prelude module for convenient imports.
//!
//! ```ignore
//! use imagemap::prelude::*;
//! ```

// Core control
pub use crate::button::{
    ButtonEvent, ButtonOptions, ButtonState, ClickEvent, CursorShape, DrawCommand, DrawLayer,
    ImageMapButton, MouseButton, Overlays, PointerEvent, RepeatSchedule,
};

// Areas and lookup
pub use crate::area::Area;
pub use crate::registry::{registry_for, AreaRegistry, MatchMode};

// Colors and geometry
pub use crate::color::{DeltaAlgorithm, Lab, Rgb};
pub use crate::geometry::{Layout, Point, Rect, Size};

// Assets
pub use crate::config::MapConfig;
pub use crate::keymap::KeyMap;

// Codecs
pub use crate::auth::{HmacAlgorithm, Totp};

// Seams
pub use crate::traits::{Clock, PixelSource};

// Errors
pub use crate::error::{ImageMapError, ImageMapResult};
