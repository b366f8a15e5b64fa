use sysedit_core::config::EditorConfig;

use crate::app::SyseditApp;
use crate::messages::AppMessage;

pub fn show(ctx: &egui::Context, app: &mut SyseditApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let run_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
                if ui
                    .add(
                        egui::Button::new("Run Mission Script...")
                            .shortcut_text(ctx.format_shortcut(&run_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    pick_mission_script(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Config").clicked() {
                    ui.close();
                    app.config = EditorConfig::default();
                    for editor in &mut app.editors {
                        editor.controller.set_config(app.config.interaction.clone());
                    }
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("View", |ui| {
                if ui.checkbox(&mut app.ui_state.show_ship_log, "Ship Log").clicked() {
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        let run_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
        if ctx.input_mut(|i| i.consume_shortcut(&run_shortcut)) {
            pick_mission_script(app);
        }
        let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub fn pick_mission_script(app: &mut SyseditApp) {
    let msg_tx = app.msg_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Lua scripts", &["lua"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = msg_tx.send(AppMessage::MissionScriptPicked { path });
        }
    });
}

fn import_config(app: &mut SyseditApp) {
    let msg_tx = app.msg_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let parsed = std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|content| {
                toml::from_str::<EditorConfig>(&content).map_err(anyhow::Error::from)
            });
        let msg = match parsed {
            Ok(config) => AppMessage::ConfigImported { config },
            Err(e) => AppMessage::Log {
                message: format!("ERROR: failed to import {}: {e}", path.display()),
            },
        };
        let _ = msg_tx.send(msg);
    });
}

fn export_config(app: &mut SyseditApp) {
    let config = app.config.clone();
    let msg_tx = app.msg_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("sysedit_config.toml")
            .save_file()
        {
            let written = toml::to_string_pretty(&config)
                .map_err(anyhow::Error::from)
                .and_then(|content| std::fs::write(&path, content).map_err(anyhow::Error::from));
            let message = match written {
                Ok(()) => format!("Config exported to {}", path.display()),
                Err(e) => format!("ERROR: failed to export config: {e}"),
            };
            let _ = msg_tx.send(AppMessage::Log { message });
        }
    });
}
