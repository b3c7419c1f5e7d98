#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe_canvas::{CanvasConfig, PaintApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = CanvasConfig::from_env();
    let [width, height] = config.canvas_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Advanced Drawing App")
            .with_inner_size([width as f32 + 16.0, height as f32 + 56.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Advanced Drawing App",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )
}
