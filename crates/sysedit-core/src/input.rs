use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::WHEEL_NOTCH_PX;
use crate::geometry::Point;

/// Millisecond timestamp supplied by the host with each press/release.
pub type Ticks = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    WheelUp,
    WheelDown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { ctrl: false };

    pub const CTRL: Self = Self { ctrl: true };

    /// Ctrl is the multi-select modifier: it suppresses panning.
    pub fn multi_select(&self) -> bool {
        self.ctrl
    }
}

/// Pointer input delivered to the editor canvas.
///
/// Press positions are widget-local with the vertical axis pointing up
/// (origin at the bottom-left corner). Motion deltas are raw device deltas,
/// vertical axis pointing down.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Down {
        x: f64,
        y: f64,
        button: PointerButton,
        #[serde(default)]
        modifiers: Modifiers,
        time_ms: Ticks,
    },
    Move {
        dx: f64,
        dy: f64,
    },
    Up {
        time_ms: Ticks,
    },
}

/// What the controller made of an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    ZoomedIn,
    ZoomedOut,
    /// A release that stayed below the movement threshold. `pos` is the
    /// widget-local press position.
    Click {
        pos: Point,
        additive: bool,
        quick: bool,
    },
    Pan {
        moved: f64,
        elapsed_ms: Ticks,
    },
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomedIn => write!(f, "zoom in"),
            Self::ZoomedOut => write!(f, "zoom out"),
            Self::Click {
                pos,
                additive,
                quick,
            } => {
                write!(f, "click at ({:.0}, {:.0})", pos.x, pos.y)?;
                if *additive {
                    write!(f, " [additive]")?;
                }
                if !*quick {
                    write!(f, " [held]")?;
                }
                Ok(())
            }
            Self::Pan { moved, elapsed_ms } => {
                write!(f, "pan ({moved:.0}px in {elapsed_ms}ms)")
            }
        }
    }
}

/// Folds continuous scroll input (trackpads, smooth wheels) into discrete
/// wheel notches, one zoom step each.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelAccumulator {
    pending: f64,
}

impl WheelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` scroll points (positive scrolls up) and return the
    /// whole notches completed, signed. A change of direction drops the
    /// remainder.
    pub fn feed(&mut self, delta: f64) -> i32 {
        if !delta.is_finite() || delta == 0.0 {
            return 0;
        }
        if self.pending * delta < 0.0 {
            self.pending = 0.0;
        }
        self.pending += delta;
        let notches = (self.pending / WHEEL_NOTCH_PX).trunc();
        self.pending -= notches * WHEEL_NOTCH_PX;
        notches as i32
    }

    /// Feed one whole notch per line scrolled.
    pub fn feed_lines(&mut self, lines: f64) -> i32 {
        self.feed(lines * WHEEL_NOTCH_PX)
    }
}
