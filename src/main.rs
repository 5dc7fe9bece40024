mod app;
mod ui;

use eframe::egui;

use app::ExplorerApp;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Solar System Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Solar System Explorer",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(ExplorerApp::new(&cc.egui_ctx)))
        }),
    )
    .expect("Failed to start Solar System Explorer");
}
