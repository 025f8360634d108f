//! Overlay draw ordering.
//!
//! The host paints the base image itself, then the commands returned here
//! in order. Each command copies `source` from the layer's overlay image to
//! `destination` on the control.

use serde::{Deserialize, Serialize};

use super::state::{ButtonState, InteractionState};
use crate::color::Rgb;
use crate::geometry::{Layout, Rect};
use crate::registry::AreaRegistry;

/// Which overlay image a command draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawLayer {
    Disabled,
    Pressed,
    Hot,
}

/// One overlay blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub layer: DrawLayer,
    pub key: Rgb,
    /// Rect in the overlay image, unscaled.
    pub source: Rect,
    /// Rect on the control, scaled by the layout.
    pub destination: Rect,
}

/// Which overlay images the host has. Layers without an image are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlays {
    pub hot: bool,
    pub pressed: bool,
    pub disabled: bool,
}

impl Overlays {
    pub const ALL: Overlays = Overlays {
        hot: true,
        pressed: true,
        disabled: true,
    };

    pub const NONE: Overlays = Overlays {
        hot: false,
        pressed: false,
        disabled: false,
    };

    fn has(&self, layer: DrawLayer) -> bool {
        match layer {
            DrawLayer::Disabled => self.disabled,
            DrawLayer::Pressed => self.pressed,
            DrawLayer::Hot => self.hot,
        }
    }
}

impl Default for Overlays {
    fn default() -> Self {
        Self::ALL
    }
}

/// Build the ordered draw list.
///
/// 1. Disabled overlay for every disabled area, or every area when the
///    control is disabled. Nothing else is drawn for a disabled control.
/// 2. Pressed overlay for latched toggle areas.
/// 3. Hot or Pressed overlay for the area under the pointer.
pub fn plan(
    registry: &dyn AreaRegistry,
    interaction: &InteractionState,
    control_enabled: bool,
    overlays: Overlays,
    layout: &Layout,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    let mut push = |layer: DrawLayer, area: &crate::area::Area| {
        if overlays.has(layer) {
            commands.push(DrawCommand {
                layer,
                key: area.chroma_key(),
                source: area.source_rect(),
                destination: layout.to_control(area.destination_rect()),
            });
        }
    };

    for area in registry.iter().filter(|a| !control_enabled || !a.enabled) {
        push(DrawLayer::Disabled, area);
    }

    if !control_enabled {
        return commands;
    }

    for area in registry.iter().filter(|a| a.toggle_mode() && a.pressed) {
        push(DrawLayer::Pressed, area);
    }

    // A disabled area never draws an interactive state
    let current = interaction
        .current_key
        .and_then(|key| registry.lookup(key).ok())
        .filter(|area| area.enabled);
    match (interaction.state, current) {
        (ButtonState::Hot, Some(area)) => push(DrawLayer::Hot, area),
        (ButtonState::Pressed, Some(area)) => push(DrawLayer::Pressed, area),
        _ => {}
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::Area;
    use crate::geometry::{Point, Size};
    use crate::registry::ExactRegistry;

    fn registry() -> ExactRegistry {
        let mut registry = ExactRegistry::new();
        registry
            .add(Area::new("a", Rgb::RED, Point::new(0, 0), Size::new(10, 10)).disabled())
            .unwrap();
        let mut toggle = Area::toggle("b", Rgb::LIME, Point::new(10, 0), Size::new(10, 10));
        toggle.pressed = true;
        registry.add(toggle).unwrap();
        registry
            .add(Area::with_source(
                "c",
                Rgb::BLUE,
                Point::new(0, 10),
                Point::new(50, 50),
                Size::new(10, 10),
            ))
            .unwrap();
        registry
    }

    fn hot_on(key: Rgb) -> InteractionState {
        InteractionState {
            state: ButtonState::Hot,
            current_key: Some(key),
            ..Default::default()
        }
    }

    #[test]
    fn test_layer_order() {
        let registry = registry();
        let layout = Layout::identity(Size::new(20, 20));
        let commands = plan(&registry, &hot_on(Rgb::BLUE), true, Overlays::ALL, &layout);

        let layers: Vec<(DrawLayer, Rgb)> = commands.iter().map(|c| (c.layer, c.key)).collect();
        assert_eq!(
            layers,
            vec![
                (DrawLayer::Disabled, Rgb::RED),
                (DrawLayer::Pressed, Rgb::LIME),
                (DrawLayer::Hot, Rgb::BLUE),
            ]
        );
        assert_eq!(commands[2].source, Rect::from_xywh(50, 50, 10, 10));
        assert_eq!(commands[2].destination, Rect::from_xywh(0, 10, 10, 10));
    }

    #[test]
    fn test_disabled_control_draws_only_disabled_layer() {
        let registry = registry();
        let layout = Layout::identity(Size::new(20, 20));
        let commands = plan(&registry, &hot_on(Rgb::BLUE), false, Overlays::ALL, &layout);
        assert_eq!(commands.len(), 3);
        assert!(commands.iter().all(|c| c.layer == DrawLayer::Disabled));
    }

    #[test]
    fn test_missing_overlays_are_skipped() {
        let registry = registry();
        let layout = Layout::identity(Size::new(20, 20));
        let overlays = Overlays {
            hot: false,
            ..Overlays::ALL
        };
        let commands = plan(&registry, &hot_on(Rgb::BLUE), true, overlays, &layout);
        assert!(commands.iter().all(|c| c.layer != DrawLayer::Hot));
        assert!(plan(&registry, &hot_on(Rgb::BLUE), true, Overlays::NONE, &layout).is_empty());
    }

    #[test]
    fn test_pressed_state_and_scaling() {
        let registry = registry();
        let layout = Layout::new(Size::new(20, 20), Size::new(40, 40));
        let interaction = InteractionState {
            state: ButtonState::Pressed,
            current_key: Some(Rgb::BLUE),
            ..Default::default()
        };
        let last = *plan(&registry, &interaction, true, Overlays::ALL, &layout)
            .last()
            .unwrap();
        assert_eq!(last.layer, DrawLayer::Pressed);
        assert_eq!(last.destination, Rect::from_xywh(0, 20, 20, 20));
        assert_eq!(last.source, Rect::from_xywh(50, 50, 10, 10), "source is never scaled");
    }

    #[test]
    fn test_disabled_current_area_has_no_pointer_layer() {
        let mut registry = registry();
        registry.lookup_mut(Rgb::BLUE).unwrap().enabled = false;
        let layout = Layout::identity(Size::new(20, 20));

        for state in [ButtonState::Hot, ButtonState::Pressed] {
            let interaction = InteractionState {
                state,
                current_key: Some(Rgb::BLUE),
                ..Default::default()
            };
            let layers: Vec<(DrawLayer, Rgb)> = plan(&registry, &interaction, true, Overlays::ALL, &layout)
                .iter()
                .map(|c| (c.layer, c.key))
                .collect();
            assert_eq!(
                layers,
                vec![
                    (DrawLayer::Disabled, Rgb::RED),
                    (DrawLayer::Disabled, Rgb::BLUE),
                    (DrawLayer::Pressed, Rgb::LIME),
                ],
                "{} over a disabled area",
                state
            );
        }
    }

    #[test]
    fn test_normal_state_has_no_pointer_layer() {
        let registry = registry();
        let layout = Layout::identity(Size::new(20, 20));
        let commands = plan(&registry, &InteractionState::default(), true, Overlays::ALL, &layout);
        assert_eq!(commands.len(), 2);
    }
}
