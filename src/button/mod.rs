//! The image-map button state machine.
//!
//! [`ImageMapButton`] owns an area registry and a key map. The host feeds
//! it pointer events in control coordinates and drains [`ButtonEvent`]s
//! from the receiver returned by [`ImageMapButton::new`].
//!
//! # State transitions
//!
//! | Input | Condition | Result |
//! |-------|-----------|--------|
//! | move | no area under pointer | Normal, cursor Default, tooltip hidden |
//! | move | disabled area | tooltip; Normal if it was the current area |
//! | move | enabled area | Hot (stays Pressed on the same area), cursor Pointer |
//! | down | current area enabled | Pressed, repeat driver for multi-click |
//! | up | current area enabled | click (single-click mode or toggle), then Hot + move |
//! | leave | - | Normal, cursor Default |
//!
//! Every move, press and leave requests a repaint.

pub mod events;
pub mod paint;
pub mod repeat;
pub mod state;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::area::Area;
use crate::color::Rgb;
use crate::error::RegistryError;
use crate::geometry::{Layout, Size};
use crate::registry::{clamp_fuzziness, registry_for, AreaRegistry, MatchMode};
use crate::traits::PixelSource;

pub use events::{ButtonEvent, ClickEvent, CursorShape, MouseButton, PointerEvent};
pub use paint::{DrawCommand, DrawLayer, Overlays};
pub use repeat::{RepeatDriver, RepeatSchedule};
pub use state::{ButtonState, InteractionState};

/// Construction-time settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonOptions {
    pub match_mode: MatchMode,
    /// Nearest-match threshold in CIE94 units, clamped to `[0, 100]`.
    pub fuzziness: f64,
    /// Repeat clicks while a momentary area is held.
    pub multi_click: bool,
    pub repeat: RepeatSchedule,
    pub overlays: Overlays,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Exact,
            fuzziness: 0.0,
            multi_click: false,
            repeat: RepeatSchedule::default(),
            overlays: Overlays::default(),
        }
    }
}

/// A chroma-key image-map button.
#[derive(Debug)]
pub struct ImageMapButton {
    registry: Box<dyn AreaRegistry>,
    key_map: Option<Box<dyn PixelSource>>,
    layout: Layout,
    options: ButtonOptions,
    enabled: bool,
    interaction: InteractionState,
    events_tx: mpsc::UnboundedSender<ButtonEvent>,
    runtime: Option<Handle>,
    repeat: Option<RepeatDriver>,
}

impl ImageMapButton {
    /// Create a button and the receiver for its host events.
    pub fn new(options: ButtonOptions) -> (Self, mpsc::UnboundedReceiver<ButtonEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::with_sender(options, tx), rx)
    }

    /// Create a button that reports to an existing channel.
    pub fn with_sender(options: ButtonOptions, events_tx: mpsc::UnboundedSender<ButtonEvent>) -> Self {
        let options = ButtonOptions {
            fuzziness: clamp_fuzziness(options.fuzziness),
            ..options
        };
        Self {
            registry: registry_for(options.match_mode),
            key_map: None,
            layout: Layout::default(),
            options,
            enabled: true,
            interaction: InteractionState::default(),
            events_tx,
            runtime: None,
            repeat: None,
        }
    }

    /// Spawn repeat tasks on `runtime` instead of the ambient one.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Install the chroma-key bitmap. The layout's image size follows the
    /// bitmap; an unset control size defaults to it.
    pub fn set_key_map(&mut self, key_map: impl PixelSource + 'static) {
        let image = key_map.size();
        let control = if self.layout.control.is_empty() {
            image
        } else {
            self.layout.control
        };
        self.layout = Layout::new(image, control);
        self.key_map = Some(Box::new(key_map));
        debug!("Key map set ({}x{})", image.width, image.height);
        self.emit(ButtonEvent::Invalidate);
    }

    pub fn has_key_map(&self) -> bool {
        self.key_map.is_some()
    }

    /// Size the control is drawn at.
    pub fn set_control_size(&mut self, size: Size) {
        self.layout.control = size;
        self.emit(ButtonEvent::Invalidate);
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn options(&self) -> &ButtonOptions {
        &self.options
    }

    pub fn set_fuzziness(&mut self, fuzziness: f64) {
        self.options.fuzziness = clamp_fuzziness(fuzziness);
    }

    pub fn set_multi_click(&mut self, multi_click: bool) {
        self.options.multi_click = multi_click;
    }

    pub fn set_overlays(&mut self, overlays: Overlays) {
        self.options.overlays = overlays;
        self.emit(ButtonEvent::Invalidate);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the whole control. Disabling ends any press and
    /// drops the current area.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        info!("Control {}", if enabled { "enabled" } else { "disabled" });

        if !enabled {
            self.stop_repeat();
            self.interaction.reset();
            self.set_cursor(CursorShape::Default);
            self.hide_tooltip();
        }
        self.emit(ButtonEvent::Invalidate);
    }

    // ------------------------------------------------------------------
    // Areas
    // ------------------------------------------------------------------

    pub fn add_area(&mut self, area: Area) -> Result<(), RegistryError> {
        self.registry.add(area)?;
        self.emit(ButtonEvent::Invalidate);
        Ok(())
    }

    /// Remove the area registered under `key`. If it is the current area
    /// the press ends and the state returns to Normal.
    pub fn remove_area(&mut self, key: Rgb) -> Result<Area, RegistryError> {
        let area = self.registry.remove(key)?;
        if self.interaction.current_key == Some(key) {
            self.drop_current_area();
        }
        self.emit(ButtonEvent::Invalidate);
        Ok(area)
    }

    pub fn clear_areas(&mut self) {
        self.registry.clear();
        self.drop_current_area();
        info!("Cleared all areas");
        self.emit(ButtonEvent::Invalidate);
    }

    /// The area a pixel of this color resolves to under the current
    /// fuzziness.
    pub fn area(&self, pixel: Rgb) -> Option<&Area> {
        self.registry.resolve(pixel, self.options.fuzziness)
    }

    /// Exact-key access to an area's flags.
    ///
    /// Use [`set_area_enabled`](Self::set_area_enabled) to change `enabled`;
    /// writing the flag here leaves a hovered or pressed area interactive
    /// until the next pointer move.
    pub fn area_mut(&mut self, key: Rgb) -> Result<&mut Area, RegistryError> {
        self.registry.lookup_mut(key)
    }

    /// Enable or disable one area. Disabling the current area ends any
    /// press and returns the state to Normal.
    pub fn set_area_enabled(&mut self, key: Rgb, enabled: bool) -> Result<(), RegistryError> {
        let area = self.registry.lookup_mut(key)?;
        if area.enabled == enabled {
            return Ok(());
        }
        area.enabled = enabled;
        info!("Area {} {}", key, if enabled { "enabled" } else { "disabled" });

        if !enabled && self.interaction.current_key == Some(key) {
            self.drop_current_area();
        }
        self.emit(ButtonEvent::Invalidate);
        Ok(())
    }

    pub fn areas(&self) -> impl Iterator<Item = &Area> + '_ {
        self.registry.iter()
    }

    pub fn registry(&self) -> &dyn AreaRegistry {
        self.registry.as_ref()
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn state(&self) -> ButtonState {
        self.interaction.state
    }

    pub fn current_key(&self) -> Option<Rgb> {
        self.interaction.current_key
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Whether a repeat task is attached to the current press.
    pub fn is_repeating(&self) -> bool {
        self.repeat.is_some()
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    pub fn mouse_move(&mut self, ev: PointerEvent) {
        if !self.enabled {
            return;
        }
        let Some(key_map) = self.key_map.as_ref() else {
            return;
        };

        let point = self.layout.unscale(ev.position());
        let hit = key_map
            .sample(point)
            .and_then(|pixel| self.registry.resolve(pixel, self.options.fuzziness))
            .map(|area| (area.chroma_key(), area.enabled, area.label().to_string()));
        trace!("Pointer ({}, {}) -> image ({}, {}) hit {:?}", ev.x, ev.y, point.x, point.y, hit);

        match hit {
            Some((key, true, label)) => {
                let same_press = self.interaction.is_pressed() && self.interaction.current_key == Some(key);
                if !same_press {
                    if self.interaction.is_pressed() {
                        debug!("Pointer left pressed area, back to hot");
                        self.stop_repeat();
                    }
                    self.interaction.state = ButtonState::Hot;
                }
                self.interaction.current_key = Some(key);
                self.set_cursor(CursorShape::Pointer);
                self.show_tooltip(&label);
            }
            Some((key, false, label)) => {
                if self.interaction.current_key == Some(key) {
                    debug!("Current area {} is disabled, back to normal", key);
                    self.drop_current_area();
                }
                self.show_tooltip(&label);
            }
            None => {
                self.stop_repeat();
                self.interaction.reset();
                self.set_cursor(CursorShape::Default);
                self.hide_tooltip();
            }
        }

        self.emit(ButtonEvent::Invalidate);
    }

    pub fn mouse_down(&mut self, ev: PointerEvent) {
        if !self.enabled {
            return;
        }
        let Some(area) = self.current_enabled_area().cloned() else {
            return;
        };

        self.interaction.state = ButtonState::Pressed;
        self.set_cursor(CursorShape::Pointer);
        debug!("Pressed {}", area.chroma_key());
        self.emit(ButtonEvent::Invalidate);

        if self.options.multi_click && !area.toggle_mode() {
            self.start_repeat(ClickEvent { area, pointer: ev });
        }
    }

    /// Release. Single-click areas fire here, so moving off the area before
    /// releasing cancels the click.
    pub fn mouse_up(&mut self, ev: PointerEvent) {
        if !self.enabled {
            return;
        }
        self.stop_repeat();

        let multi_click = self.options.multi_click;
        let clicked = self.interaction.current_key.and_then(|key| {
            let area = self.registry.lookup_mut(key).ok()?;
            if !area.enabled || (multi_click && !area.toggle_mode()) {
                return None;
            }
            if area.toggle_mode() {
                area.pressed = !area.pressed;
            }
            Some(area.clone())
        });

        if let Some(area) = clicked {
            info!("Clicked '{}' ({})", area.label(), area.chroma_key());
            self.emit(ButtonEvent::Clicked(ClickEvent { area, pointer: ev }));
        }

        self.interaction.state = ButtonState::Hot;
        self.mouse_move(ev);
    }

    pub fn mouse_leave(&mut self) {
        self.stop_repeat();
        self.interaction.reset();
        self.set_cursor(CursorShape::Default);
        self.emit(ButtonEvent::Invalidate);
    }

    // ------------------------------------------------------------------
    // Painting
    // ------------------------------------------------------------------

    /// Overlay blits for the current state, in draw order.
    pub fn paint_plan(&self) -> Vec<DrawCommand> {
        paint::plan(
            self.registry.as_ref(),
            &self.interaction,
            self.enabled,
            self.options.overlays,
            &self.layout,
        )
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn current_enabled_area(&self) -> Option<&Area> {
        let key = self.interaction.current_key?;
        self.registry.lookup(key).ok().filter(|area| area.enabled)
    }

    fn drop_current_area(&mut self) {
        self.stop_repeat();
        if self.interaction.current_key.is_some() {
            self.interaction.reset();
            self.set_cursor(CursorShape::Default);
        }
    }

    fn start_repeat(&mut self, click: ClickEvent) {
        self.stop_repeat();
        let runtime = self.runtime.clone().or_else(|| Handle::try_current().ok());
        match runtime {
            Some(runtime) => {
                self.repeat = Some(RepeatDriver::start(
                    &runtime,
                    self.options.repeat,
                    self.events_tx.clone(),
                    click,
                ));
            }
            None => {
                warn!("No tokio runtime available; multi-click degrades to a single click");
                self.emit(ButtonEvent::Clicked(click));
            }
        }
    }

    fn stop_repeat(&mut self) {
        if let Some(driver) = self.repeat.take() {
            driver.stop();
        }
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        if self.interaction.cursor != cursor {
            self.interaction.cursor = cursor;
            self.emit(ButtonEvent::SetCursor(cursor));
        }
    }

    fn show_tooltip(&mut self, text: &str) {
        if text.is_empty() {
            self.hide_tooltip();
            return;
        }
        let changed = self.interaction.tooltip.as_deref() != Some(text);
        if changed || !self.interaction.tooltip_visible {
            self.interaction.tooltip = Some(text.to_string());
            self.interaction.tooltip_visible = true;
            self.emit(ButtonEvent::SetTooltip(text.to_string()));
        }
    }

    fn hide_tooltip(&mut self) {
        if self.interaction.tooltip_visible {
            self.interaction.tooltip_visible = false;
            self.emit(ButtonEvent::HideTooltip);
        }
    }

    fn emit(&self, event: ButtonEvent) {
        if self.events_tx.send(event).is_err() {
            trace!("Event receiver dropped");
        }
    }
}
