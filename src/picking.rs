//! Pointer tracking and ray/sphere hit testing.
//!
//! Pointer positions are kept in normalized device coordinates. When the
//! pointer leaves the viewport it becomes `Pointer::Outside`, and any
//! coordinate outside [-1, 1] is treated the same way, so a stale position
//! can never select a body.

use crate::hierarchy::BodyId;
use crate::math::{self, Vec3};
use crate::render::{OrbitCamera, Ray, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Pointer {
    /// Not over the viewport
    #[default]
    Outside,
    /// Normalized device coordinates, x right and y up
    At([f64; 2]),
}

impl Pointer {
    /// Convert a pixel position inside a viewport rectangle.
    pub fn from_screen(pos: [f32; 2], origin: [f32; 2], size: [f32; 2]) -> Self {
        if size[0] <= 0.0 || size[1] <= 0.0 {
            return Pointer::Outside;
        }
        let x = (pos[0] - origin[0]) / size[0] * 2.0 - 1.0;
        let y = -((pos[1] - origin[1]) / size[1]) * 2.0 + 1.0;
        Pointer::At([x as f64, y as f64])
    }

    /// Coordinates, if the pointer is over the viewport.
    pub fn ndc(&self) -> Option<[f64; 2]> {
        match *self {
            Pointer::At(ndc) if ndc.iter().all(|c| (-1.0..=1.0).contains(c)) => Some(ndc),
            _ => None,
        }
    }
}

/// Distance along `ray` to where it enters a sphere.
///
/// Only the outside surface counts: a ray starting inside the sphere never
/// hits it, matching how inside-out spheres are not drawn either.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f64) -> Option<f64> {
    let oc = math::sub(ray.origin, center);
    let c = math::dot(oc, oc) - radius * radius;
    if c < 0.0 {
        return None;
    }
    let b = math::dot(oc, ray.direction);
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let near = -b - disc.sqrt();
    (near >= 0.0).then_some(near)
}

/// Nearest body under the pointer.
pub fn hit_test(scene: &Scene, camera: &OrbitCamera, pointer: Pointer) -> Option<BodyId> {
    let ndc = pointer.ndc()?;
    let ray = camera.ray(ndc);

    scene
        .tree
        .instances()
        .iter()
        .filter_map(|inst| {
            ray_sphere(&ray, inst.node.world_position, inst.node.sphere.radius)
                .map(|t| (t, inst.id))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneScales;
    use crate::data::embedded::embedded_dataset;
    use crate::hierarchy::build;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture() -> (Scene, OrbitCamera) {
        let tree = build(&embedded_dataset()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut scene = Scene::new(tree, &SceneScales::default(), &mut rng);
        scene.animate(0.0);
        (scene, OrbitCamera::default())
    }

    #[test]
    fn screen_to_ndc() {
        let p = Pointer::from_screen([50.0, 25.0], [0.0, 0.0], [100.0, 100.0]);
        assert_eq!(p, Pointer::At([0.0, 0.5]));
        let corner = Pointer::from_screen([10.0, 10.0], [10.0, 10.0], [100.0, 50.0]);
        assert_eq!(corner, Pointer::At([-1.0, 1.0]));
    }

    #[test]
    fn out_of_range_is_ignored() {
        assert_eq!(Pointer::Outside.ndc(), None);
        assert_eq!(Pointer::At([-2.0, -2.0]).ndc(), None);
        assert_eq!(Pointer::At([0.5, 1.5]).ndc(), None);
        assert_eq!(Pointer::At([0.5, -0.5]).ndc(), Some([0.5, -0.5]));
    }

    #[test]
    fn sphere_intersection() {
        let ray = Ray {
            origin: [0.0, 0.0, 10.0],
            direction: [0.0, 0.0, -1.0],
        };
        assert_eq!(ray_sphere(&ray, [0.0, 0.0, 0.0], 1.0), Some(9.0));
        assert_eq!(ray_sphere(&ray, [5.0, 0.0, 0.0], 1.0), None);
        // Origin inside the sphere
        assert_eq!(ray_sphere(&ray, [0.0, 0.0, 10.0], 2.0), None);
        // Sphere behind the origin
        assert_eq!(ray_sphere(&ray, [0.0, 0.0, 20.0], 1.0), None);
    }

    #[test]
    fn center_of_view_hits_the_star() {
        let (scene, mut camera) = fixture();
        camera.distance = 1200.0;
        let hit = hit_test(&scene, &camera, Pointer::At([0.0, 0.0]));
        assert_eq!(hit, Some(scene.tree.root_id()));
    }

    #[test]
    fn projected_body_is_hit() {
        let (scene, camera) = fixture();
        let earth = scene.tree.find("Earth").unwrap();
        let projected = camera.project(earth.node.world_position).unwrap();
        let hit = hit_test(&scene, &camera, Pointer::At(projected.ndc)).unwrap();
        // Earth or its moon, whichever is nearer along the ray
        let name = scene.tree.get(hit).unwrap().name();
        assert!(name == "Earth" || name == "Moon", "{}", name);
    }

    #[test]
    fn star_is_not_hit_from_inside() {
        // Default eye is closer to the origin than the star's radius
        let (scene, camera) = fixture();
        assert!(math::length(camera.eye()) < scene.tree.root().node.sphere.radius);
        assert_ne!(
            hit_test(&scene, &camera, Pointer::At([0.0, 0.0])),
            Some(scene.tree.root_id())
        );
    }

    #[test]
    fn no_selection_when_outside() {
        let (scene, camera) = fixture();
        assert_eq!(hit_test(&scene, &camera, Pointer::Outside), None);
        assert_eq!(hit_test(&scene, &camera, Pointer::At([-2.0, -2.0])), None);
    }

    #[test]
    fn empty_space_misses() {
        let (scene, camera) = fixture();
        assert_eq!(hit_test(&scene, &camera, Pointer::At([0.99, 0.99])), None);
    }
}
