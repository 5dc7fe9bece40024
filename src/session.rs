//! Running explorer session: scene, camera, clock and pointer.
//!
//! One `frame` call does the per-frame work in a fixed order:
//!   1. advance kinematics to the clock's simulated time
//!   2. hit-test the pointer against the freshly placed bodies
//!   3. rebuild the info panel from the hit
//!   4. step camera damping

use std::time::Instant;

use crate::clock::SimulationClock;
use crate::config::ExplorerConfig;
use crate::data::Dataset;
use crate::error::BuildError;
use crate::hierarchy::{BodyId, BodyTree};
use crate::info::InfoPanel;
use crate::loader::{LoadedDataset, Tier};
use crate::picking::{self, Pointer};
use crate::render::{OrbitCamera, Scene};

pub struct Session {
    pub scene: Scene,
    pub camera: OrbitCamera,
    clock: SimulationClock,
    pointer: Pointer,
    hovered: Option<BodyId>,
    panel: InfoPanel,
    tier: Tier,
    elapsed_days: f64,
}

impl Session {
    /// Build the scene for a resolved dataset. The clock starts now.
    pub fn start(loaded: &LoadedDataset, config: &ExplorerConfig) -> Result<Self, BuildError> {
        Self::start_at(&loaded.dataset, loaded.tier, config, Instant::now())
    }

    pub fn start_at(
        dataset: &Dataset,
        tier: Tier,
        config: &ExplorerConfig,
        now: Instant,
    ) -> Result<Self, BuildError> {
        let tree = BodyTree::build(dataset, &config.scales)?;
        let scene = Scene::new(tree, &config.scales, &mut rand::thread_rng());

        // Until the pointer first moves, the panel introduces the star.
        let panel = InfoPanel::for_body(&scene.tree.root().body);

        log::info!(
            "Scene ready: {} bodies from {} data ({})",
            scene.tree.len(),
            tier.label(),
            dataset.source
        );

        Ok(Self {
            scene,
            camera: OrbitCamera::default(),
            clock: SimulationClock::starting_at(now, config.day_scale),
            pointer: Pointer::Outside,
            hovered: None,
            panel,
            tier,
            elapsed_days: 0.0,
        })
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn panel(&self) -> &InfoPanel {
        &self.panel
    }

    pub fn hovered(&self) -> Option<BodyId> {
        self.hovered
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_days
    }

    pub fn pointer_moved(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    /// Pointer left the viewport: drop it and show the welcome text at once.
    pub fn pointer_left(&mut self) {
        self.pointer = Pointer::Outside;
        self.hovered = None;
        self.panel = InfoPanel::welcome();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    pub fn frame(&mut self) {
        self.advance_to(self.clock.elapsed_days());
    }

    pub fn frame_at(&mut self, now: Instant) {
        self.advance_to(self.clock.elapsed_days_at(now));
    }

    /// Run one frame at an explicit simulated time.
    pub fn advance_to(&mut self, elapsed_days: f64) {
        self.elapsed_days = elapsed_days;
        self.scene.animate(elapsed_days);

        let hit = picking::hit_test(&self.scene, &self.camera, self.pointer);
        if hit != self.hovered {
            if let Some(inst) = hit.and_then(|id| self.scene.tree.get(id)) {
                log::trace!("Hovering {}", inst.name());
            }
        }
        self.hovered = hit;
        self.panel = match hit.and_then(|id| self.scene.tree.get(id)) {
            Some(inst) => InfoPanel::for_body(&inst.body),
            None => InfoPanel::welcome(),
        };

        self.camera.update();
    }
}
