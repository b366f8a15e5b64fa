mod common;

use approx::assert_relative_eq;

use common::{ctrl_press, motion, press, release, wheel, CANVAS};
use sysedit_core::config::InteractionConfig;
use sysedit_core::geometry::{Point, Rect, Size};
use sysedit_core::input::{Gesture, PointerButton};
use sysedit_core::viewport::{ViewportController, ViewportState};
use sysedit_core::world::Sprite;

// ---------------------------------------------------------------------------
// Pointer-down
// ---------------------------------------------------------------------------

#[test]
fn test_press_starts_drag() {
    let mut ctl = ViewportController::default();
    assert_eq!(ctl.handle(&press(100.0, 100.0, 42), CANVAS), None);

    let state = ctl.state();
    assert!(state.drag_active);
    assert_eq!(state.drag_started_at, 42);
    assert_eq!(state.moved_distance, 0.0);
}

#[test]
fn test_press_outside_bounds_is_ignored() {
    let mut ctl = ViewportController::default();
    let before = ctl.state().clone();

    for event in [
        press(-5.0, 100.0, 10),
        press(100.0, -1.0, 10),
        press(801.0, 100.0, 10),
        press(100.0, 600.5, 10),
        wheel(PointerButton::WheelUp, -5.0, 100.0),
    ] {
        assert_eq!(ctl.handle(&event, CANVAS), None);
        assert_eq!(ctl.state(), &before);
    }
}

#[test]
fn test_press_on_edges_is_accepted() {
    let mut ctl = ViewportController::default();
    ctl.handle(&press(800.0, 600.0, 0), CANVAS);
    assert!(ctl.state().drag_active);
}

#[test]
fn test_press_with_nan_position_is_ignored() {
    let mut ctl = ViewportController::default();
    ctl.handle(&press(f64::NAN, 10.0, 0), CANVAS);
    assert!(!ctl.state().drag_active);
}

#[test]
fn test_wheel_zooms() {
    let mut ctl = ViewportController::default();
    assert_eq!(
        ctl.handle(&wheel(PointerButton::WheelUp, 10.0, 10.0), CANVAS),
        Some(Gesture::ZoomedIn)
    );
    assert_relative_eq!(ctl.state().zoom, 1.5);
    assert!(!ctl.state().drag_active);

    assert_eq!(
        ctl.handle(&wheel(PointerButton::WheelDown, 10.0, 10.0), CANVAS),
        Some(Gesture::ZoomedOut)
    );
    assert_relative_eq!(ctl.state().zoom, 1.0);
}

#[test]
fn test_ctrl_press_does_not_pan() {
    let mut ctl = ViewportController::default();
    ctl.handle(&ctrl_press(100.0, 100.0, 0), CANVAS);
    ctl.handle(&motion(30.0, 30.0), CANVAS);

    assert!(!ctl.state().drag_active);
    assert_eq!(ctl.state().pan_x, 0.0);
    assert_eq!(ctl.state().pan_y, 0.0);
}

// ---------------------------------------------------------------------------
// Pointer-move
// ---------------------------------------------------------------------------

#[test]
fn test_motion_pans_with_inverted_vertical_axis() {
    let mut ctl = ViewportController::default();
    ctl.handle(&press(100.0, 100.0, 0), CANVAS);
    ctl.handle(&motion(12.0, 5.0), CANVAS);
    ctl.handle(&motion(-2.0, -8.0), CANVAS);

    let state = ctl.state();
    assert_relative_eq!(state.pan_x, -10.0);
    assert_relative_eq!(state.pan_y, -3.0);
    assert_relative_eq!(state.moved_distance, 27.0);
}

#[test]
fn test_motion_without_drag_is_ignored() {
    let mut ctl = ViewportController::default();
    ctl.handle(&motion(50.0, 50.0), CANVAS);
    assert_eq!(ctl.state(), &ViewportState::default());
}

// ---------------------------------------------------------------------------
// Pointer-up classification
// ---------------------------------------------------------------------------

#[test]
fn test_quick_still_release_is_click() {
    let mut ctl = ViewportController::default();
    ctl.handle(&press(100.0, 200.0, 1_000), CANVAS);
    ctl.handle(&motion(3.0, 4.0), CANVAS);
    let gesture = ctl.handle(&release(1_100), CANVAS);

    assert_eq!(
        gesture,
        Some(Gesture::Click {
            pos: Point::new(100.0, 200.0),
            additive: false,
            quick: true,
        })
    );
    assert!(!ctl.state().drag_active);
}

#[test]
fn test_quick_moving_release_is_pan() {
    let mut ctl = ViewportController::default();
    ctl.handle(&press(100.0, 200.0, 1_000), CANVAS);
    ctl.handle(&motion(30.0, 20.0), CANVAS);
    let gesture = ctl.handle(&release(1_100), CANVAS);

    assert_eq!(
        gesture,
        Some(Gesture::Pan {
            moved: 50.0,
            elapsed_ms: 100,
        })
    );
}

#[test]
fn test_long_stationary_hold_is_still_click() {
    let mut ctl = ViewportController::default();
    ctl.handle(&press(10.0, 10.0, 0), CANVAS);
    let gesture = ctl.handle(&release(5_000), CANVAS);

    match gesture {
        Some(Gesture::Click { quick, .. }) => assert!(!quick),
        other => panic!("expected click, got {other:?}"),
    }
}

#[test]
fn test_movement_exactly_at_threshold_is_pan() {
    let mut ctl = ViewportController::default();
    ctl.handle(&press(10.0, 10.0, 0), CANVAS);
    ctl.handle(&motion(6.0, 4.0), CANVAS);
    assert!(matches!(
        ctl.handle(&release(50), CANVAS),
        Some(Gesture::Pan { .. })
    ));
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut ctl = ViewportController::default();
    assert_eq!(ctl.handle(&release(10), CANVAS), None);
}

#[test]
fn test_ctrl_click_is_additive() {
    let mut ctl = ViewportController::default();
    ctl.handle(&ctrl_press(50.0, 60.0, 0), CANVAS);
    let gesture = ctl.handle(&release(80), CANVAS);
    assert_eq!(
        gesture,
        Some(Gesture::Click {
            pos: Point::new(50.0, 60.0),
            additive: true,
            quick: true,
        })
    );
    // Consumed.
    assert_eq!(ctl.handle(&release(90), CANVAS), None);
}

#[test]
fn test_ctrl_drag_is_not_a_click() {
    let mut ctl = ViewportController::default();
    ctl.handle(&ctrl_press(50.0, 60.0, 0), CANVAS);
    ctl.handle(&motion(40.0, 0.0), CANVAS);
    assert_eq!(ctl.handle(&release(80), CANVAS), None);
}

#[test]
fn test_ctrl_press_during_pan_tracks_pan_motion() {
    let mut ctl = ViewportController::default();
    ctl.handle(&press(100.0, 100.0, 0), CANVAS);
    ctl.handle(&ctrl_press(120.0, 100.0, 10), CANVAS);
    ctl.handle(&motion(200.0, 0.0), CANVAS);

    assert!(matches!(
        ctl.handle(&release(400), CANVAS),
        Some(Gesture::Pan { moved, .. }) if moved == 200.0
    ));
    // The ctrl press moved with the pan, so it must not resolve to a click.
    assert_eq!(ctl.handle(&release(450), CANVAS), None);
}

#[test]
fn test_thresholds_come_from_config() {
    let config = InteractionConfig {
        drag_time_threshold_ms: 50,
        move_threshold_px: 100.0,
        pick_radius_px: 15.0,
    };
    let mut ctl = ViewportController::new(config);
    ctl.handle(&press(10.0, 10.0, 0), CANVAS);
    ctl.handle(&motion(40.0, 20.0), CANVAS);

    match ctl.handle(&release(80), CANVAS) {
        Some(Gesture::Click { quick, .. }) => assert!(!quick),
        other => panic!("expected click, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Coordinate transform
// ---------------------------------------------------------------------------

#[test]
fn test_world_origin_rounds() {
    let vp = ViewportState {
        pan_x: 10.4,
        pan_y: -2.6,
        ..Default::default()
    };
    let origin = vp.world_origin(Rect::new(20.0, 30.0, 101.0, 50.0));
    assert_eq!(origin, Point::new(60.0, 58.0));
}

#[test]
fn test_centred_object_renders_at_viewport_centre() {
    let display = Size::new(800.0, 600.0);
    // Canvas covering the whole display; bounds are relative to its centre.
    let bounds = Rect::new(-400.0, -300.0, 800.0, 600.0);
    let vp = ViewportState::default();

    let origin = vp.world_origin(bounds);
    let rect = vp.sprite_rect(origin, Point::ORIGIN, Sprite::new(64.0, 32.0), display);

    assert_relative_eq!(rect.center().x, 400.0);
    assert_relative_eq!(rect.center().y, 300.0);
    assert_relative_eq!(rect.width, 64.0);
    assert_relative_eq!(rect.height, 32.0);
}

#[test]
fn test_sprite_rect_scales_with_zoom() {
    let display = Size::new(0.0, 0.0);
    let vp = ViewportState {
        zoom: 2.0,
        ..Default::default()
    };
    let rect = vp.sprite_rect(
        Point::new(100.0, 100.0),
        Point::new(10.0, -5.0),
        Sprite::new(20.0, 10.0),
        display,
    );
    assert_eq!(rect, Rect::new(100.0, 80.0, 40.0, 20.0));
}

#[test]
fn test_local_world_round_trip() {
    let vp = ViewportState {
        pan_x: 37.0,
        pan_y: -12.0,
        zoom: 1.5,
        ..Default::default()
    };
    let world = Point::new(-120.0, 45.5);
    let back = vp.local_to_world(vp.world_to_local(world, CANVAS), CANVAS);
    assert_relative_eq!(back.x, world.x, epsilon = 1e-9);
    assert_relative_eq!(back.y, world.y, epsilon = 1e-9);
}

#[test]
fn test_drag_moves_objects_with_the_pointer() {
    let mut ctl = ViewportController::default();
    let world = Point::new(50.0, 50.0);
    let before = ctl.state().world_to_local(world, CANVAS);

    ctl.handle(&press(400.0, 300.0, 0), CANVAS);
    // Device deltas: right 25, down 10. Local space has y up.
    ctl.handle(&motion(25.0, 10.0), CANVAS);
    let after = ctl.state().world_to_local(world, CANVAS);

    assert_relative_eq!(after.x - before.x, 25.0);
    assert_relative_eq!(after.y - before.y, -10.0);
}

#[test]
fn test_reset_restores_defaults() {
    let mut vp = ViewportState {
        pan_x: 5.0,
        zoom: 2.0,
        drag_active: true,
        ..Default::default()
    };
    vp.reset();
    assert_eq!(vp, ViewportState::default());
}
