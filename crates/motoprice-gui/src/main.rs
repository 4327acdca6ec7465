//! GUI entry point for Motoprice

mod app;
mod form_panel;
mod settings_panel;

use app::MotopriceApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Prediksi Harga Motor Bekas",
        options,
        Box::new(|cc| Ok(Box::new(MotopriceApp::new(cc)))),
    )
}
