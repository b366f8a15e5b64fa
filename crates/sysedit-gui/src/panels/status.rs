use crate::app::SyseditApp;

pub fn show(ctx: &egui::Context, app: &mut SyseditApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(format!("Editors: {}", app.editors.len()));
            ui.separator();

            let active = app
                .ui_state
                .active_editor
                .and_then(|id| app.editors.iter().find(|v| v.id == id));
            if let Some(view) = active {
                let state = view.controller.state();
                ui.label(&view.system.name);
                ui.separator();
                ui.label(format!("Zoom: {:.0}%", state.zoom * 100.0));
                ui.separator();
                ui.label(format!("Pan: ({:.0}, {:.0})", state.pan_x, state.pan_y));
                if state.drag_active {
                    ui.separator();
                    ui.label("Dragging");
                }
            }
        });

        ui.add_space(2.0);
    });
}
