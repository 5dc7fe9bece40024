//! Scene composition and viewing.
//!
//! - `scene`  : visual nodes, nested transforms, lights, fog, starfield
//! - `camera` : damped orbit camera and perspective projection

pub mod camera;
pub mod scene;

pub use camera::{OrbitCamera, Projected, Ray};
pub use scene::{Scene, SceneNode};
