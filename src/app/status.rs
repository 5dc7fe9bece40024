//! Bottom status strip for `ExplorerApp`: data tier, simulated time and
//! the controls hint.

use eframe::egui;

use super::{ExplorerApp, Phase};

impl ExplorerApp {
    pub fn draw_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            match &self.phase {
                Phase::Loading(_) => {
                    ui.spinner();
                    ui.weak("Resolving dataset…");
                }
                Phase::Failed => {
                    ui.colored_label(egui::Color32::LIGHT_RED, "Startup failed");
                }
                Phase::Running(session) => {
                    ui.weak(format!("Data: {}", session.tier().label()));
                    if !self.dataset_updated.is_empty() {
                        ui.weak(format!("(updated {})", self.dataset_updated));
                    }
                    ui.separator();
                    ui.weak(format!("Day {:.0}", session.elapsed_days()));
                    ui.separator();
                    ui.weak(format!("Camera distance {:.0}", session.camera.distance));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak("Drag to orbit · Scroll to zoom");
            });
        });
    }
}
