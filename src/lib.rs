pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod net;

// Simulation core
pub mod clock;
pub mod hierarchy;
pub mod kinematics;
pub mod math;

// Presentation
pub mod info;
pub mod picking;
pub mod render;
pub mod session;
