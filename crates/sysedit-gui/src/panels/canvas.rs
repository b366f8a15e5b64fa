use sysedit_core::config::EditorConfig;
use sysedit_core::geometry::{Point, Rect, Size};
use sysedit_core::input::{Gesture, Modifiers, PointerButton, Ticks};
use sysedit_core::selection::pick_object;
use sysedit_core::world::ObjectId;
use tracing::debug;

use crate::states::{EditorView, UIState};

const PLANET_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 140, 220);
const JUMP_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 170, 60);
const SELECTED_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 255, 0);

/// Canvas-relevant pointer input, in the order the host delivered it.
#[derive(Clone, Copy, Debug, PartialEq)]
enum CanvasInput {
    Press {
        pos: egui::Pos2,
        button: PointerButton,
        modifiers: Modifiers,
    },
    Move(egui::Vec2),
    Release,
    /// Vertical scroll, positive up; `lines` when the host reports whole
    /// wheel lines rather than points.
    Scroll { delta: f64, lines: bool },
}

pub fn show(
    ui: &mut egui::Ui,
    view: &mut EditorView,
    config: &EditorConfig,
    ui_state: &mut UIState,
) {
    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    paint_background(ui, rect);

    let hovered = response.contains_pointer();
    if hovered {
        ui_state.active_editor = Some(view.id);
    }

    let (inputs, now) = ui.input(|i| {
        let start = i.pointer.latest_pos().map(|p| p - i.pointer.delta());
        (translate_events(&i.events, start), (i.time * 1000.0) as Ticks)
    });
    apply_inputs(view, &inputs, rect, hovered, now, config.interaction.pick_radius_px);

    draw_objects(ui, rect, view, config);
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().rect_filled(rect, 0.0, egui::Color32::BLACK);
}

fn canvas_size(rect: egui::Rect) -> Size {
    Size::new(rect.width() as f64, rect.height() as f64)
}

/// Widget-local coordinates: origin at the bottom-left, vertical axis up.
fn to_local(rect: egui::Rect, pos: egui::Pos2) -> Point {
    Point::new((pos.x - rect.left()) as f64, (rect.bottom() - pos.y) as f64)
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Turn one frame of raw events into canvas input, keeping their order so
/// that motion before a press never counts toward the drag it starts.
/// `start` is the pointer position at the beginning of the frame.
fn translate_events(events: &[egui::Event], start: Option<egui::Pos2>) -> Vec<CanvasInput> {
    let mut last = start;
    let mut inputs = Vec::new();

    for event in events {
        match event {
            egui::Event::PointerMoved(pos) => {
                if let Some(prev) = last {
                    let delta = *pos - prev;
                    if delta != egui::Vec2::ZERO {
                        inputs.push(CanvasInput::Move(delta));
                    }
                }
                last = Some(*pos);
            }
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                modifiers,
            } => {
                last = Some(*pos);
                let Some(button) = map_button(*button) else {
                    continue;
                };
                inputs.push(if *pressed {
                    CanvasInput::Press {
                        pos: *pos,
                        button,
                        modifiers: Modifiers {
                            ctrl: modifiers.ctrl || modifiers.command,
                        },
                    }
                } else {
                    CanvasInput::Release
                });
            }
            egui::Event::MouseWheel { unit, delta, .. } => {
                if delta.y != 0.0 {
                    inputs.push(CanvasInput::Scroll {
                        delta: delta.y as f64,
                        lines: !matches!(unit, egui::MouseWheelUnit::Point),
                    });
                }
            }
            egui::Event::PointerGone => last = None,
            _ => {}
        }
    }
    inputs
}

/// Feed canvas input through the view's controller and selection. Presses
/// and scrolling only count while the pointer is over this canvas; moves and
/// releases are tracked wherever the pointer goes so a drag always ends.
fn apply_inputs(
    view: &mut EditorView,
    inputs: &[CanvasInput],
    rect: egui::Rect,
    hovered: bool,
    now: Ticks,
    pick_radius: f64,
) -> Vec<Gesture> {
    let size = canvas_size(rect);
    let mut gestures = Vec::new();

    for input in inputs {
        match *input {
            CanvasInput::Press {
                pos,
                button,
                modifiers,
            } => {
                if hovered && rect.contains(pos) {
                    view.controller
                        .pointer_down(to_local(rect, pos), button, modifiers, now, size);
                }
            }
            CanvasInput::Move(delta) => {
                view.controller.pointer_move(delta.x as f64, delta.y as f64);
            }
            CanvasInput::Release => {
                let Some(gesture) = view.controller.pointer_up(now) else {
                    continue;
                };
                debug!(editor = view.id, %gesture, "Canvas gesture");
                if let Gesture::Click { pos, additive, .. } = gesture {
                    let hit = pick_object(
                        &view.system,
                        view.controller.state(),
                        pos,
                        size,
                        pick_radius,
                    );
                    view.selection.handle_click(hit, additive);
                }
                gestures.push(gesture);
            }
            CanvasInput::Scroll { delta, lines } => {
                if !hovered {
                    continue;
                }
                let notches = if lines {
                    view.wheel.feed_lines(delta)
                } else {
                    view.wheel.feed(delta)
                };
                let wheel = if notches > 0 {
                    PointerButton::WheelUp
                } else {
                    PointerButton::WheelDown
                };
                let centre = to_local(rect, rect.center());
                for _ in 0..notches.unsigned_abs() {
                    if let Some(gesture) = view.controller.pointer_down(
                        centre,
                        wheel,
                        Modifiers::NONE,
                        now,
                        size,
                    ) {
                        gestures.push(gesture);
                    }
                }
            }
        }
    }
    gestures
}

fn draw_objects(ui: &egui::Ui, rect: egui::Rect, view: &EditorView, config: &EditorConfig) {
    let painter = ui.painter_at(rect);
    let display = config.display.size();
    let state = view.controller.state();

    // Canvas bounds in render space: y-up, relative to the display centre.
    let bounds = Rect::new(
        rect.left() as f64 - display.width / 2.0,
        (display.height - rect.bottom() as f64) - display.height / 2.0,
        rect.width() as f64,
        rect.height() as f64,
    );
    let origin = state.world_origin(bounds);

    for object in view.system.placeables() {
        let r = state.sprite_rect(origin, object.pos, object.sprite, display);
        let screen = egui::Rect::from_min_size(
            egui::pos2(r.x as f32, (display.height - (r.y + r.height)) as f32),
            egui::vec2(r.width as f32, r.height as f32),
        );
        if !screen.intersects(rect) {
            continue;
        }

        let selected = view.selection.contains(object.id);
        match object.id {
            ObjectId::Planet(_) => {
                let radius = screen.width().min(screen.height()) / 2.0;
                painter.circle_filled(screen.center(), radius, PLANET_COLOR);
                if selected {
                    painter.circle_stroke(
                        screen.center(),
                        radius + 3.0,
                        egui::Stroke::new(2.0, SELECTED_COLOR),
                    );
                }
            }
            ObjectId::Jump(_) => {
                let color = if selected { SELECTED_COLOR } else { JUMP_COLOR };
                painter.rect_stroke(
                    screen,
                    2.0,
                    egui::Stroke::new(if selected { 2.5 } else { 1.5 }, color),
                    egui::epaint::StrokeKind::Outside,
                );
            }
        }

        let label = view.system.label(object.id).unwrap_or_default();
        painter.text(
            egui::pos2(screen.center().x, screen.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            label,
            egui::FontId::proportional(12.0),
            if selected {
                SELECTED_COLOR
            } else {
                egui::Color32::from_white_alpha(200)
            },
        );
    }
}
