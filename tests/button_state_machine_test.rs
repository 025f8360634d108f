//! End-to-end state machine behavior over the quadrant fixture.

mod common;

use common::*;
use imagemap::button::{
    ButtonEvent, ButtonOptions, ButtonState, CursorShape, DrawLayer, ImageMapButton, Overlays,
    PointerEvent,
};
use imagemap::geometry::{Rect, Size};
use imagemap::registry::MatchMode;
use imagemap::Rgb;

// ============= Hover Tests =============

#[test]
fn test_hover_enabled_area() {
    let (mut button, mut rx) = quadrant_button(ButtonOptions::default());

    button.mouse_move(PointerEvent::at(100, 10));
    assert_eq!(button.state(), ButtonState::Hot);
    assert_eq!(button.current_key(), Some(Rgb::LIME));
    assert_eq!(
        drain(&mut rx),
        vec![
            ButtonEvent::SetCursor(CursorShape::Pointer),
            ButtonEvent::SetTooltip("Upper Right".into()),
            ButtonEvent::Invalidate,
        ]
    );
}

#[test]
fn test_empty_label_hides_tooltip() {
    let (mut button, mut rx) = quadrant_button(ButtonOptions::default());
    button.mouse_move(PointerEvent::at(100, 10));
    drain(&mut rx);

    button.mouse_move(PointerEvent::at(10, 100));
    assert_eq!(button.current_key(), Some(Rgb::BLUE));
    assert_eq!(button.state(), ButtonState::Hot);
    assert_eq!(drain(&mut rx), vec![ButtonEvent::HideTooltip, ButtonEvent::Invalidate]);
}

#[test]
fn test_disabled_area_shows_tooltip_but_stays_normal() {
    let (mut button, mut rx) = quadrant_button(ButtonOptions::default());

    button.mouse_move(PointerEvent::at(10, 10));
    assert_eq!(button.state(), ButtonState::Normal);
    assert_eq!(button.current_key(), None);
    assert_eq!(
        drain(&mut rx),
        vec![ButtonEvent::SetTooltip("Upper Left".into()), ButtonEvent::Invalidate]
    );
}

#[test]
fn test_leave_resets_but_keeps_tooltip() {
    let (mut button, mut rx) = quadrant_button(ButtonOptions::default());
    button.mouse_move(PointerEvent::at(100, 10));
    drain(&mut rx);

    button.mouse_leave();
    assert_eq!(button.state(), ButtonState::Normal);
    assert_eq!(button.current_key(), None);
    assert_eq!(
        drain(&mut rx),
        vec![ButtonEvent::SetCursor(CursorShape::Default), ButtonEvent::Invalidate]
    );
    assert!(button.interaction().tooltip_visible);
}

#[test]
fn test_scaled_control() {
    let (mut button, _rx) = quadrant_button(ButtonOptions::default());
    button.set_control_size(Size::new(256, 256));

    // (200, 20) on the control is (100, 10) in the key map
    button.mouse_move(PointerEvent::at(200, 20));
    assert_eq!(button.current_key(), Some(Rgb::LIME));

    let plan = button.paint_plan();
    let hot = plan.iter().find(|c| c.layer == DrawLayer::Hot).unwrap();
    assert_eq!(hot.source, Rect::from_xywh(64, 0, 64, 64));
    assert_eq!(hot.destination, Rect::from_xywh(128, 0, 128, 128));
}

#[test]
fn test_key_map_not_sampled_while_disabled() {
    let (mut button, _rx) = ImageMapButton::new(ButtonOptions::default());
    let source = quadrant_source();
    button.set_key_map(source.clone());
    for area in quadrant_areas() {
        button.add_area(area).unwrap();
    }

    button.mouse_move(PointerEvent::at(100, 10));
    assert_eq!(source.sample_count(), 1);

    button.set_enabled(false);
    button.mouse_move(PointerEvent::at(100, 20));
    button.mouse_down(PointerEvent::left(100, 20));
    assert_eq!(source.sample_count(), 1);
}

// ============= Click Tests =============

#[test]
fn test_click_sequence() {
    let (mut button, mut rx) = quadrant_button(ButtonOptions::default());

    button.mouse_move(PointerEvent::at(100, 10));
    button.mouse_down(PointerEvent::left(100, 10));
    assert_eq!(button.state(), ButtonState::Pressed);
    button.mouse_up(PointerEvent::left(100, 10));
    assert_eq!(button.state(), ButtonState::Hot);

    let events = drain(&mut rx);
    assert_eq!(clicked_labels(&events), vec!["Upper Right"]);
    let click = events.iter().find(|e| e.is_click()).unwrap();
    match click {
        ButtonEvent::Clicked(click) => assert_eq!(click.pointer, PointerEvent::left(100, 10)),
        other => panic!("expected click, got {:?}", other),
    }
}

#[test]
fn test_click_on_disabled_area_does_nothing() {
    let (mut button, mut rx) = quadrant_button(ButtonOptions::default());
    button.mouse_move(PointerEvent::at(10, 10));
    button.mouse_down(PointerEvent::left(10, 10));
    assert_eq!(button.state(), ButtonState::Normal);
    button.mouse_up(PointerEvent::left(10, 10));
    assert!(clicked_labels(&drain(&mut rx)).is_empty());
}

#[test]
fn test_release_outside_cancels() {
    let (mut button, mut rx) = quadrant_button(ButtonOptions::default());
    button.set_control_size(Size::new(200, 200));
    button.mouse_move(PointerEvent::at(10, 150));
    button.mouse_down(PointerEvent::left(10, 150));
    // Outside the key map after unscaling
    button.mouse_move(PointerEvent::at(199, 250));
    button.mouse_up(PointerEvent::left(199, 250));
    assert!(clicked_labels(&drain(&mut rx)).is_empty());
    assert_eq!(button.state(), ButtonState::Normal);
}

#[test]
fn test_toggle_latches_and_paints() {
    let (mut button, mut rx) = quadrant_button(ButtonOptions::default());

    button.mouse_move(PointerEvent::at(100, 100));
    button.mouse_down(PointerEvent::left(100, 100));
    button.mouse_up(PointerEvent::left(100, 100));
    assert!(button.registry().lookup(Rgb::YELLOW).unwrap().pressed);
    assert_eq!(clicked_labels(&drain(&mut rx)), vec!["Lower Right"]);

    button.mouse_leave();
    let layers: Vec<(DrawLayer, Rgb)> = button.paint_plan().iter().map(|c| (c.layer, c.key)).collect();
    assert_eq!(
        layers,
        vec![(DrawLayer::Disabled, Rgb::RED), (DrawLayer::Pressed, Rgb::YELLOW)]
    );

    button.mouse_move(PointerEvent::at(100, 100));
    button.mouse_down(PointerEvent::left(100, 100));
    button.mouse_up(PointerEvent::left(100, 100));
    assert!(!button.registry().lookup(Rgb::YELLOW).unwrap().pressed);
}

// ============= Paint Plan Tests =============

#[test]
fn test_paint_plan_order_while_pressed() {
    let (mut button, _rx) = quadrant_button(ButtonOptions::default());
    button.area_mut(Rgb::YELLOW).unwrap().pressed = true;

    button.mouse_move(PointerEvent::at(100, 10));
    button.mouse_down(PointerEvent::left(100, 10));
    let layers: Vec<(DrawLayer, Rgb)> = button.paint_plan().iter().map(|c| (c.layer, c.key)).collect();
    assert_eq!(
        layers,
        vec![
            (DrawLayer::Disabled, Rgb::RED),
            (DrawLayer::Pressed, Rgb::YELLOW),
            (DrawLayer::Pressed, Rgb::LIME),
        ]
    );
}

#[test]
fn test_missing_overlays_are_skipped() {
    let options = ButtonOptions {
        overlays: Overlays {
            hot: true,
            pressed: false,
            disabled: false,
        },
        ..Default::default()
    };
    let (mut button, _rx) = quadrant_button(options);
    button.mouse_move(PointerEvent::at(100, 10));
    let plan = button.paint_plan();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].layer, DrawLayer::Hot);

    button.mouse_down(PointerEvent::left(100, 10));
    assert!(button.paint_plan().is_empty());
}

#[test]
fn test_disabled_control_paints_every_area_disabled() {
    let (mut button, mut rx) = quadrant_button(ButtonOptions::default());
    button.mouse_move(PointerEvent::at(100, 10));
    drain(&mut rx);

    button.set_enabled(false);
    assert_eq!(
        drain(&mut rx),
        vec![
            ButtonEvent::SetCursor(CursorShape::Default),
            ButtonEvent::HideTooltip,
            ButtonEvent::Invalidate,
        ]
    );
    let plan = button.paint_plan();
    assert_eq!(plan.len(), 4);
    assert!(plan.iter().all(|c| c.layer == DrawLayer::Disabled));
}

// ============= Nearest Matching Tests =============

#[test]
fn test_nearest_mode_tolerates_antialiased_pixels() {
    use imagemap::keymap::KeyMap;

    let options = ButtonOptions {
        match_mode: MatchMode::Nearest,
        fuzziness: 10.0,
        ..Default::default()
    };
    let (mut button, _rx) = ImageMapButton::new(options);
    button.set_key_map(
        quadrant_key_map().with_fill(Rect::from_xywh(100, 0, 1, 1), Rgb::new(5, 250, 5)),
    );
    for area in quadrant_areas() {
        button.add_area(area).unwrap();
    }

    button.mouse_move(PointerEvent::at(100, 0));
    assert_eq!(button.current_key(), Some(Rgb::LIME));

    // Exact mode treats the same pixel as background
    let (mut exact, _rx) = ImageMapButton::new(ButtonOptions::default());
    exact.set_key_map(KeyMap::solid(Size::new(4, 4), Rgb::new(5, 250, 5)));
    exact.add_area(upper_right()).unwrap();
    exact.mouse_move(PointerEvent::at(1, 1));
    assert_eq!(exact.current_key(), None);
}
