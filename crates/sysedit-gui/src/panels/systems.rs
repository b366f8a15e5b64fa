use crate::app::SyseditApp;

pub fn show(ctx: &egui::Context, app: &mut SyseditApp) {
    let mut open_index = None;

    egui::SidePanel::left("systems")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.strong("Star Systems");
            ui.separator();

            for (index, system) in app.universe.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(&system.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Edit").clicked() {
                            open_index = Some(index);
                        }
                    });
                });
                ui.small(format!(
                    "{} planets, {} jumps",
                    system.planets.len(),
                    system.jumps.len()
                ));
                ui.add_space(4.0);
            }
        });

    if let Some(index) = open_index {
        app.open_editor(index);
    }
}
