//! Startup for `ExplorerApp`.
//!
//! The dataset is resolved on a background thread (`spawn_load`); `check_load`
//! polls the channel each frame and builds the session once a result lands.

use std::sync::mpsc;

use eframe::egui;

use solar_explorer::config::ExplorerConfig;
use solar_explorer::info::InfoPanel;
use solar_explorer::loader::{DatasetLoader, LoadedDataset};
use solar_explorer::session::Session;

use super::{ExplorerApp, Phase};

/// Walk the dataset tiers off the UI thread.
pub fn spawn_load(config: &ExplorerConfig, ctx: &egui::Context) -> mpsc::Receiver<LoadedDataset> {
    let (tx, rx) = mpsc::channel();
    let loader = DatasetLoader::from_config(config);
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        let loaded = loader.load();
        let _ = tx.send(loaded);
        ctx.request_repaint();
    });

    rx
}

impl ExplorerApp {
    /// Poll the load channel and start the session when the dataset arrives.
    pub fn check_load(&mut self) {
        let Phase::Loading(rx) = &self.phase else {
            return;
        };

        let loaded = match rx.try_recv() {
            Ok(loaded) => loaded,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                log::error!("Dataset loader thread exited without a result");
                self.fail();
                return;
            }
        };

        match Session::start(&loaded, &self.config) {
            Ok(session) => {
                self.dataset_updated = loaded.dataset.updated.clone();
                self.phase = Phase::Running(Box::new(session));
            }
            Err(e) => {
                log::error!("Failed to initialise solar system: {}", e);
                self.fail();
            }
        }
    }

    fn fail(&mut self) {
        self.idle_panel = InfoPanel::startup_error();
        self.phase = Phase::Failed;
    }
}
