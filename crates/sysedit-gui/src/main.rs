mod app;
mod messages;
mod panels;
mod states;

use sysedit_core::consts::{DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DEFAULT_DISPLAY_WIDTH as f32, DEFAULT_DISPLAY_HEIGHT as f32])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Star System Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "SyseditGui",
        options,
        Box::new(|_cc| Ok(Box::new(app::SyseditApp::new()))),
    )
}
