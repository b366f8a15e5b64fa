use crate::app::SyseditApp;
use crate::panels::menu_bar::pick_mission_script;

pub fn show(ctx: &egui::Context, app: &mut SyseditApp) {
    if !app.ui_state.show_ship_log {
        return;
    }

    let mut open = true;
    let mut clear = false;
    let mut run_script = false;
    egui::Window::new("Ship Log")
        .open(&mut open)
        .default_size([420.0, 360.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Run Script...").clicked() {
                    run_script = true;
                }
                if ui.button("Clear").clicked() {
                    clear = true;
                }
            });
            ui.separator();

            let store = app.ui_state.ship_log.borrow();
            if store.logs().is_empty() {
                ui.label(
                    egui::RichText::new("No logs yet")
                        .color(egui::Color32::from_gray(120)),
                );
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for log in store.logs() {
                    let id = log.id.as_deref().unwrap_or("unnamed");
                    egui::CollapsingHeader::new(format!("{} ({})", log.name, log.kind))
                        .id_salt(("ship_log", log.log_id))
                        .default_open(true)
                        .show(ui, |ui| {
                            ui.small(if log.max_len > 0 {
                                format!("{id}, keeps last {}", log.max_len)
                            } else {
                                id.to_string()
                            });
                            for entry in log.entries() {
                                ui.label(&entry.message);
                            }
                        });
                }
            });
        });

    if clear {
        let ids: Vec<_> = app
            .ui_state
            .ship_log
            .borrow()
            .logs()
            .iter()
            .map(|l| l.log_id)
            .collect();
        let mut store = app.ui_state.ship_log.borrow_mut();
        for id in ids {
            store.remove_log(id);
        }
    }
    if run_script {
        pick_mission_script(app);
    }
    app.ui_state.show_ship_log = open;
}
