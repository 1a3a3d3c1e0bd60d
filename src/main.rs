//! Quadline GUI
//!
//! A graphical interface for playing 6x6 four-in-a-row against the
//! built-in automated opponent.

use quadline::ui::QuadlineApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([480.0, 560.0])
            .with_title("Quadline"),
        ..Default::default()
    };

    eframe::run_native(
        "Quadline",
        options,
        Box::new(|cc| Ok(Box::new(QuadlineApp::new(cc)))),
    )
}
