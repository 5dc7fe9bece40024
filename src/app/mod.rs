//! `ExplorerApp`: the top-level egui application state.
//!
//! This module declares the `ExplorerApp` struct and the frame entry point.
//! The remaining methods are split across the sibling sub-modules:
//!
//! - `loading`  : background dataset load and session startup
//! - `viewport` : camera input and the painted 3-D view
//! - `status`   : bottom status strip

pub mod loading;
pub mod status;
pub mod viewport;

use std::sync::mpsc;

use eframe::egui;

use solar_explorer::config::ExplorerConfig;
use solar_explorer::info::InfoPanel;
use solar_explorer::loader::LoadedDataset;
use solar_explorer::session::Session;

// ─── Application state ───────────────────────────────────────────────────────

/// Startup phases. The frame loop only runs in `Running`.
pub enum Phase {
    Loading(mpsc::Receiver<LoadedDataset>),
    Running(Box<Session>),
    Failed,
}

pub struct ExplorerApp {
    pub config: ExplorerConfig,
    pub phase: Phase,
    /// Overlay text for the phases without a session
    pub idle_panel: InfoPanel,
    /// `updated` field of the resolved dataset
    pub dataset_updated: String,
    pub dragging: bool,
}

impl ExplorerApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let config = ExplorerConfig::from_env();
        let phase = Phase::Loading(loading::spawn_load(&config, ctx));
        Self {
            config,
            phase,
            idle_panel: InfoPanel::loading(),
            dataset_updated: String::new(),
            dragging: false,
        }
    }

    /// Panel text for the current phase.
    pub fn panel(&self) -> &InfoPanel {
        match &self.phase {
            Phase::Running(session) => session.panel(),
            Phase::Loading(_) | Phase::Failed => &self.idle_panel,
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load();

        egui::TopBottomPanel::bottom("status")
            .frame(egui::Frame::none().fill(crate::ui::BACKGROUND).inner_margin(4.0))
            .show(ctx, |ui| {
                self.draw_status(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(crate::ui::BACKGROUND))
            .show(ctx, |ui| {
                self.draw_viewport(ui, ctx);
            });

        egui::Window::new("info")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
            .default_width(300.0)
            .show(ctx, |ui| {
                crate::ui::draw_info_panel(ui, self.panel());
            });
    }
}
