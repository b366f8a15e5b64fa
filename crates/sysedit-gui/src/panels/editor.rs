use sysedit_core::config::EditorConfig;

use crate::panels::canvas;
use crate::states::{EditorView, UIState};

/// Contents of one editor window. Returns `true` when Close was pressed.
pub fn show(
    ui: &mut egui::Ui,
    view: &mut EditorView,
    config: &EditorConfig,
    ui_state: &mut UIState,
) -> bool {
    let mut close = false;

    ui.horizontal(|ui| {
        if ui.button("Close").clicked() {
            close = true;
        }
        ui.add_enabled(false, egui::Button::new("Save"))
            .on_disabled_hover_text("Saving systems is not supported yet");
        ui.add_enabled(false, egui::Button::new("New Sys"))
            .on_disabled_hover_text("Creating systems is not supported yet");

        ui.separator();

        if ui.button("+").on_hover_text("Zoom in").clicked() {
            view.controller.zoom_in();
        }
        if ui.button("-").on_hover_text("Zoom out").clicked() {
            view.controller.zoom_out();
        }
        ui.label(format!("{:.0}%", view.controller.state().zoom * 100.0));

        ui.separator();
        ui.label(view.selection.summary(&view.system));
    });

    ui.separator();
    canvas::show(ui, view, config, ui_state);

    close
}
