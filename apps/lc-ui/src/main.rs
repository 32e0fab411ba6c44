#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod chart_panel;
mod views;

use app::LearnCurveApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Learncurve"),
        ..Default::default()
    };

    eframe::run_native(
        "Learncurve",
        options,
        Box::new(|cc| Ok(Box::new(LearnCurveApp::new(cc)))),
    )
}
