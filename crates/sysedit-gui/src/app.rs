use std::path::Path;
use std::rc::Rc;
use std::sync::mpsc;

use sysedit_core::config::EditorConfig;
use sysedit_core::shiplog::script::run_script_file;
use sysedit_core::world::StarSystem;
use tracing::info;

use crate::messages::AppMessage;
use crate::panels;
use crate::states::{demo_universe, EditorView, UIState};

pub struct SyseditApp {
    pub msg_tx: mpsc::Sender<AppMessage>,
    pub msg_rx: mpsc::Receiver<AppMessage>,
    pub universe: Vec<StarSystem>,
    pub editors: Vec<EditorView>,
    next_editor_id: u64,
    pub ui_state: UIState,
    pub config: EditorConfig,
    pub show_about: bool,
}

impl SyseditApp {
    pub fn new() -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();

        Self {
            msg_tx,
            msg_rx,
            universe: demo_universe(),
            editors: Vec::new(),
            next_editor_id: 0,
            ui_state: UIState::default(),
            config: EditorConfig::default(),
            show_about: false,
        }
    }

    /// Open a fresh editor on a copy of the given system.
    pub fn open_editor(&mut self, system_index: usize) {
        let Some(system) = self.universe.get(system_index).cloned() else {
            return;
        };
        let id = self.next_editor_id;
        self.next_editor_id += 1;

        info!(system = %system.name, id, "Opening system editor");
        self.ui_state.add_log(format!("Editing {}", system.name));
        self.editors
            .push(EditorView::new(id, system, self.config.interaction.clone()));
    }

    /// Drain all pending messages from dialog threads.
    fn poll_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                AppMessage::ConfigImported { config } => self.apply_config(config),
                AppMessage::MissionScriptPicked { path } => self.run_mission_script(&path),
                AppMessage::Log { message } => self.ui_state.add_log(message),
            }
        }
    }

    fn apply_config(&mut self, config: EditorConfig) {
        if let Err(e) = config.validate() {
            self.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
        for editor in &mut self.editors {
            editor.controller.set_config(config.interaction.clone());
        }
        self.config = config;
        self.ui_state.add_log("Config imported".into());
    }

    fn run_mission_script(&mut self, path: &Path) {
        match run_script_file(Rc::clone(&self.ui_state.ship_log), path) {
            Ok(()) => {
                let total = self.ui_state.ship_log.borrow().total_entries();
                self.ui_state.add_log(format!(
                    "Ran {} ({total} log entries)",
                    path.display()
                ));
                self.ui_state.show_ship_log = true;
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    fn show_editors(&mut self, ctx: &egui::Context) {
        let config = &self.config;
        let ui_state = &mut self.ui_state;

        for view in &mut self.editors {
            let mut window_open = true;
            let close_requested = egui::Window::new(view.title())
                .id(egui::Id::new(("system_editor", view.id)))
                .open(&mut window_open)
                .default_size([900.0, 640.0])
                .show(ctx, |ui| panels::editor::show(ui, view, config, ui_state))
                .and_then(|r| r.inner)
                .unwrap_or(false);

            if !window_open || close_requested {
                view.open = false;
            }
        }

        let before = self.editors.len();
        self.editors.retain(|v| {
            if !v.open {
                info!(system = %v.system.name, id = v.id, "Closed system editor");
            }
            v.open
        });
        if self.editors.len() != before {
            if let Some(active) = self.ui_state.active_editor {
                if !self.editors.iter().any(|v| v.id == active) {
                    self.ui_state.active_editor = None;
                }
            }
        }
    }
}

impl eframe::App for SyseditApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::systems::show(ctx, self);
        panels::shiplog::show(ctx, self);

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.editors.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("Pick a system to edit")
                            .size(18.0)
                            .color(egui::Color32::from_gray(100)),
                    );
                });
            }
        });

        self.show_editors(ctx);

        if self.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Star System Editor");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
