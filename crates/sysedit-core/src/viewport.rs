//! Pan/zoom camera of the system editor and the pointer state machine that
//! drives it.
//!
//! Three coordinate spaces are involved:
//! - **world**: object positions in the star system;
//! - **widget-local**: pointer positions relative to the canvas widget,
//!   origin at its bottom-left corner, vertical axis up;
//! - **render**: host display coordinates, vertical axis up. The canvas
//!   bounds are given relative to the display centre and the host adds
//!   half the display size back when placing sprites.

use tracing::debug;

use crate::config::InteractionConfig;
use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP_COARSE, ZOOM_STEP_FINE};
use crate::geometry::{Point, Rect, Size};
use crate::input::{Gesture, Modifiers, PointerButton, PointerEvent, Ticks};
use crate::world::Sprite;

/// Camera and drag bookkeeping for one editor view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    pub pan_x: f64,
    pub pan_y: f64,
    /// Always within `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom: f64,
    pub drag_active: bool,
    pub drag_started_at: Ticks,
    /// Sum of `|dx| + |dy|` since the drag began.
    pub moved_distance: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
            drag_active: false,
            drag_started_at: 0,
            moved_distance: 0.0,
        }
    }
}

impl ViewportState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn zoom_in(&mut self) {
        self.rescale(|z| {
            let step = if z >= 1.0 {
                ZOOM_STEP_COARSE
            } else {
                ZOOM_STEP_FINE
            };
            z + step
        });
        debug!(zoom = self.zoom, "Zoomed in");
    }

    pub fn zoom_out(&mut self) {
        self.rescale(|z| {
            let step = if z > 1.0 {
                ZOOM_STEP_COARSE
            } else {
                ZOOM_STEP_FINE
            };
            z - step
        });
        debug!(zoom = self.zoom, "Zoomed out");
    }

    /// Un-scale the pan, step and clamp the zoom, then re-scale the pan, so
    /// the world point at the viewport centre stays put.
    fn rescale(&mut self, step: impl FnOnce(f64) -> f64) {
        self.pan_x /= self.zoom;
        self.pan_y /= self.zoom;

        self.zoom = step(self.zoom).clamp(MIN_ZOOM, MAX_ZOOM);

        self.pan_x *= self.zoom;
        self.pan_y *= self.zoom;
    }

    pub fn begin_drag(&mut self, now: Ticks) {
        self.drag_active = true;
        self.drag_started_at = now;
        self.moved_distance = 0.0;
    }

    /// Apply a device-space motion delta (vertical axis down) to the pan.
    pub fn drag_by(&mut self, dx: f64, dy: f64) {
        if !self.drag_active {
            return;
        }
        self.pan_x -= dx;
        self.pan_y += dy;
        self.moved_distance += dx.abs() + dy.abs();
    }

    /// Render-space position of the world origin for a canvas with the
    /// given bounds.
    pub fn world_origin(&self, bounds: Rect) -> Point {
        Point::new(
            (bounds.x - self.pan_x + bounds.width / 2.0).round(),
            (bounds.y - self.pan_y + bounds.height / 2.0).round(),
        )
    }

    /// Render-space rectangle of a sprite placed at `pos`, scaled by zoom.
    pub fn sprite_rect(&self, origin: Point, pos: Point, sprite: Sprite, display: Size) -> Rect {
        let z = self.zoom;
        let half = display.half();
        Rect::new(
            origin.x + (pos.x - sprite.half_width()) * z + half.width,
            origin.y + (pos.y - sprite.half_height()) * z + half.height,
            sprite.width * z,
            sprite.height * z,
        )
    }

    /// Map a widget-local point back to world coordinates.
    pub fn local_to_world(&self, local: Point, size: Size) -> Point {
        Point::new(
            (local.x - size.width / 2.0 + self.pan_x) / self.zoom,
            (local.y - size.height / 2.0 + self.pan_y) / self.zoom,
        )
    }

    pub fn world_to_local(&self, world: Point, size: Size) -> Point {
        Point::new(
            world.x * self.zoom + size.width / 2.0 - self.pan_x,
            world.y * self.zoom + size.height / 2.0 - self.pan_y,
        )
    }
}

/// A press made with the multi-select modifier held. It never pans, but
/// can still resolve to an additive click.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingPick {
    pos: Point,
    pressed_at: Ticks,
    moved: f64,
}

/// Interprets pointer events for one editor canvas.
#[derive(Clone, Debug)]
pub struct ViewportController {
    state: ViewportState,
    config: InteractionConfig,
    press_pos: Point,
    pending_pick: Option<PendingPick>,
}

impl ViewportController {
    pub fn new(config: InteractionConfig) -> Self {
        Self::with_state(ViewportState::default(), config)
    }

    pub fn with_state(state: ViewportState, config: InteractionConfig) -> Self {
        Self {
            state,
            config,
            press_pos: Point::ORIGIN,
            pending_pick: None,
        }
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: InteractionConfig) {
        self.config = config;
    }

    pub fn zoom_in(&mut self) {
        self.state.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.state.zoom_out();
    }

    /// Feed one event; `size` is the canvas size in pixels.
    pub fn handle(&mut self, event: &PointerEvent, size: Size) -> Option<Gesture> {
        match *event {
            PointerEvent::Down {
                x,
                y,
                button,
                modifiers,
                time_ms,
            } => self.pointer_down(Point::new(x, y), button, modifiers, time_ms, size),
            PointerEvent::Move { dx, dy } => {
                self.pointer_move(dx, dy);
                None
            }
            PointerEvent::Up { time_ms } => self.pointer_up(time_ms),
        }
    }

    pub fn pointer_down(
        &mut self,
        pos: Point,
        button: PointerButton,
        modifiers: Modifiers,
        now: Ticks,
        size: Size,
    ) -> Option<Gesture> {
        let inside = pos.x >= 0.0 && pos.x <= size.width && pos.y >= 0.0 && pos.y <= size.height;
        if !inside {
            return None;
        }

        match button {
            PointerButton::WheelUp => {
                self.state.zoom_in();
                Some(Gesture::ZoomedIn)
            }
            PointerButton::WheelDown => {
                self.state.zoom_out();
                Some(Gesture::ZoomedOut)
            }
            _ if modifiers.multi_select() => {
                self.pending_pick = Some(PendingPick {
                    pos,
                    pressed_at: now,
                    moved: 0.0,
                });
                None
            }
            _ => {
                self.press_pos = pos;
                self.pending_pick = None;
                self.state.begin_drag(now);
                debug!(x = pos.x, y = pos.y, "Drag started");
                None
            }
        }
    }

    pub fn pointer_move(&mut self, dx: f64, dy: f64) {
        if self.state.drag_active {
            self.state.drag_by(dx, dy);
        }
        if let Some(pick) = self.pending_pick.as_mut() {
            pick.moved += dx.abs() + dy.abs();
        }
    }

    pub fn pointer_up(&mut self, now: Ticks) -> Option<Gesture> {
        if self.state.drag_active {
            self.state.drag_active = false;
            let elapsed_ms = now.saturating_sub(self.state.drag_started_at);
            let moved = self.state.moved_distance;
            debug!(moved, elapsed_ms, "Drag ended");

            return Some(if self.is_still(moved) {
                Gesture::Click {
                    pos: self.press_pos,
                    additive: false,
                    quick: self.is_quick(elapsed_ms),
                }
            } else {
                Gesture::Pan { moved, elapsed_ms }
            });
        }

        let pick = self.pending_pick.take()?;
        if !self.is_still(pick.moved) {
            return None;
        }
        Some(Gesture::Click {
            pos: pick.pos,
            additive: true,
            quick: self.is_quick(now.saturating_sub(pick.pressed_at)),
        })
    }

    fn is_quick(&self, elapsed_ms: Ticks) -> bool {
        elapsed_ms < self.config.drag_time_threshold_ms
    }

    fn is_still(&self, moved: f64) -> bool {
        moved < self.config.move_threshold_px
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}
