#![allow(dead_code)]

use sysedit_core::geometry::{Point, Size};
use sysedit_core::input::{Modifiers, PointerButton, PointerEvent};
use sysedit_core::world::{Sprite, StarSystem};

/// Canvas size used by most tests.
pub const CANVAS: Size = Size {
    width: 800.0,
    height: 600.0,
};

pub fn press(x: f64, y: f64, time_ms: u64) -> PointerEvent {
    PointerEvent::Down {
        x,
        y,
        button: PointerButton::Primary,
        modifiers: Modifiers::NONE,
        time_ms,
    }
}

pub fn ctrl_press(x: f64, y: f64, time_ms: u64) -> PointerEvent {
    PointerEvent::Down {
        x,
        y,
        button: PointerButton::Primary,
        modifiers: Modifiers::CTRL,
        time_ms,
    }
}

pub fn wheel(button: PointerButton, x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down {
        x,
        y,
        button,
        modifiers: Modifiers::NONE,
        time_ms: 0,
    }
}

pub fn motion(dx: f64, dy: f64) -> PointerEvent {
    PointerEvent::Move { dx, dy }
}

pub fn release(time_ms: u64) -> PointerEvent {
    PointerEvent::Up { time_ms }
}

/// Two planets and a jump point spread along the x axis.
pub fn sample_system() -> StarSystem {
    StarSystem::new("Sol")
        .with_planet("Earth", Point::new(0.0, 0.0), Sprite::new(64.0, 64.0))
        .with_planet("Mars", Point::new(200.0, 0.0), Sprite::new(48.0, 48.0))
        .with_jump("Alpha Centauri", Point::new(-300.0, 100.0), Sprite::new(32.0, 32.0))
}
