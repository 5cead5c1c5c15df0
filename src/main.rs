// KOLIXX Tour Application
// Main entry point

use kolixx_tour::services::settings::Settings;
use kolixx_tour::ui_egui::TourApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting KOLIXX Tour Application");

    let settings = Settings::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("KOLIXX — ВНЕ СИГНАЛА")
            .with_inner_size([460.0, 820.0])
            .with_min_inner_size([360.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "kolixx-tour",
        options,
        Box::new(move |cc| Ok(Box::new(TourApp::new(cc, settings)))),
    )
}
