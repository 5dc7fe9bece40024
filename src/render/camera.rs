//! Orbit camera with damped rotation and clamped zoom.
//!
//! The camera sits on a sphere around `target`, parameterised by
//! azimuth/elevation/distance. Drag input accumulates a rotation delta that
//! is eased in over subsequent frames (`damping` of it per `update`); wheel
//! input scales the distance, clamped to `[min_distance, max_distance]`.
//! There is no panning: the target stays on the star.

use crate::math::{self, Vec3, ORIGIN};

const WORLD_UP: Vec3 = [0.0, 1.0, 0.0];
const ELEVATION_LIMIT: f64 = std::f64::consts::FRAC_PI_2 - 1e-3;
/// Distance factor per wheel notch
const ZOOM_STEP: f64 = 0.95;

/// A world point projected onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Normalized device coordinates, x right and y up, in [-1, 1] when visible
    pub ndc: [f64; 2],
    /// Distance along the view axis
    pub depth: f64,
}

impl Projected {
    /// Pixel position inside a viewport of `size` starting at `origin`.
    pub fn to_screen(&self, origin: [f32; 2], size: [f32; 2]) -> [f32; 2] {
        [
            origin[0] + ((self.ndc[0] + 1.0) * 0.5) as f32 * size[0],
            origin[1] + ((1.0 - self.ndc[1]) * 0.5) as f32 * size[1],
        ]
    }
}

/// Half-line from the eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length
    pub direction: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Horizontal orbit angle in radians (0 = looking down -z)
    pub azimuth: f64,
    /// Vertical orbit angle in radians (positive = above the plane)
    pub elevation: f64,
    pub distance: f64,
    pub target: Vec3,

    /// Vertical field of view, degrees
    pub fov_y_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,

    pub damping: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub rotate_speed: f64,

    pending_azimuth: f64,
    pending_elevation: f64,
    pending_zoom: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from([0.0, 100.0, 320.0], 16.0 / 9.0)
    }
}

impl OrbitCamera {
    /// Camera at `eye` looking at the origin.
    pub fn looking_from(eye: Vec3, aspect: f64) -> Self {
        let horizontal = (eye[0] * eye[0] + eye[2] * eye[2]).sqrt();
        Self {
            azimuth: eye[0].atan2(eye[2]),
            elevation: eye[1].atan2(horizontal),
            distance: math::length(eye),
            target: ORIGIN,
            fov_y_deg: 45.0,
            aspect,
            near: 1.0,
            far: 1e9,
            damping: 0.05,
            min_distance: 20.0,
            max_distance: 1500.0,
            rotate_speed: 1.0,
            pending_azimuth: 0.0,
            pending_elevation: 0.0,
            pending_zoom: 1.0,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f64;
        }
    }

    /// Queue a drag of `dx`/`dy` pixels in a viewport `viewport_height` tall.
    /// A full-height drag turns the camera once around.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let h = viewport_height as f64;
        self.pending_azimuth -= std::f64::consts::TAU * dx as f64 / h * self.rotate_speed;
        self.pending_elevation += std::f64::consts::TAU * dy as f64 / h * self.rotate_speed;
    }

    /// Queue a zoom of `notches` wheel steps; positive moves closer.
    pub fn zoom(&mut self, notches: f32) {
        self.pending_zoom *= ZOOM_STEP.powf(notches as f64);
    }

    /// Advance damping by one frame.
    pub fn update(&mut self) {
        self.azimuth += self.pending_azimuth * self.damping;
        self.elevation = (self.elevation + self.pending_elevation * self.damping)
            .clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
        self.pending_azimuth *= 1.0 - self.damping;
        self.pending_elevation *= 1.0 - self.damping;

        self.distance = (self.distance * self.pending_zoom).clamp(self.min_distance, self.max_distance);
        self.pending_zoom = 1.0;
    }

    pub fn eye(&self) -> Vec3 {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        math::add(
            self.target,
            [
                self.distance * sa * ce,
                self.distance * se,
                self.distance * ca * ce,
            ],
        )
    }

    /// (forward, right, up) unit vectors.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = math::normalize(math::sub(self.target, self.eye()));
        let right = math::normalize(math::cross(forward, WORLD_UP));
        let up = math::cross(right, forward);
        (forward, right, up)
    }

    fn tan_half_fov(&self) -> f64 {
        (self.fov_y_deg.to_radians() * 0.5).tan()
    }

    /// Perspective-project a world point. `None` outside the near/far range.
    pub fn project(&self, world: Vec3) -> Option<Projected> {
        let (forward, right, up) = self.basis();
        let rel = math::sub(world, self.eye());
        let depth = math::dot(rel, forward);
        if depth < self.near || depth > self.far {
            return None;
        }
        let t = self.tan_half_fov();
        let x = math::dot(rel, right) / (depth * t * self.aspect);
        let y = math::dot(rel, up) / (depth * t);
        Some(Projected { ndc: [x, y], depth })
    }

    /// On-screen radius in pixels of a sphere of `radius` at `depth`.
    pub fn projected_radius(&self, radius: f64, depth: f64, viewport_height: f32) -> f32 {
        if depth <= 0.0 {
            return 0.0;
        }
        (radius / (depth * self.tan_half_fov()) * viewport_height as f64 * 0.5) as f32
    }

    /// Ray through a normalized device coordinate.
    pub fn ray(&self, ndc: [f64; 2]) -> Ray {
        let (forward, right, up) = self.basis();
        let t = self.tan_half_fov();
        let dir = math::add(
            forward,
            math::add(
                math::scale(right, ndc[0] * t * self.aspect),
                math::scale(up, ndc[1] * t),
            ),
        );
        Ray {
            origin: self.eye(),
            direction: math::normalize(dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_eye_position() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        assert!(eye[0].abs() < 1e-9);
        assert!((eye[1] - 100.0).abs() < 1e-9);
        assert!((eye[2] - 320.0).abs() < 1e-9);
    }

    #[test]
    fn target_projects_to_center() {
        let cam = OrbitCamera::default();
        let p = cam.project(ORIGIN).unwrap();
        assert!(p.ndc[0].abs() < 1e-9 && p.ndc[1].abs() < 1e-9);
        assert!((p.depth - cam.distance).abs() < 1e-9);
    }

    #[test]
    fn points_behind_are_culled() {
        let cam = OrbitCamera::default();
        assert!(cam.project(math::scale(cam.eye(), 2.0)).is_none());
    }

    #[test]
    fn ray_and_projection_agree() {
        let cam = OrbitCamera::default();
        let ray = cam.ray([0.3, -0.2]);
        let point = math::add(ray.origin, math::scale(ray.direction, 200.0));
        let p = cam.project(point).unwrap();
        assert!((p.ndc[0] - 0.3).abs() < 1e-9);
        assert!((p.ndc[1] + 0.2).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.zoom(500.0);
        cam.update();
        assert_eq!(cam.distance, cam.min_distance);
        cam.zoom(-500.0);
        cam.update();
        assert_eq!(cam.distance, cam.max_distance);
    }

    #[test]
    fn rotation_is_damped() {
        let mut cam = OrbitCamera::default();
        let start = cam.azimuth;
        cam.rotate(-100.0, 0.0, 800.0);
        cam.update();
        let first = cam.azimuth - start;
        cam.update();
        let second = cam.azimuth - start - first;
        assert!(first > 0.0);
        assert!(second > 0.0 && second < first);
        // Many frames converge on the full drag angle
        for _ in 0..2000 {
            cam.update();
        }
        let total = std::f64::consts::TAU * 100.0 / 800.0;
        assert!((cam.azimuth - start - total).abs() < 1e-6);
    }

    #[test]
    fn elevation_stays_below_the_pole() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, 100_000.0, 800.0);
        for _ in 0..500 {
            cam.update();
        }
        assert!(cam.elevation <= ELEVATION_LIMIT);
        let (_, right, _) = cam.basis();
        assert!(math::length(right) > 0.99);
    }
}
