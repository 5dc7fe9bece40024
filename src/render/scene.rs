//! Scene composer.
//!
//! Every body instance owns a `SceneNode`: a sphere, an optional orbit line
//! and two transforms. `local_position` is the kinematics output relative to
//! the parent; `world_position` is the parent's world position plus the local
//! offset, so moons follow their planets the way nested scene groups would.
//! Orbit lines are stored in the parent's frame for the same reason.
//!
//! Lighting:
//!   - ambient light, uniform
//!   - point light that tracks the star
//!   - exponential-squared fog towards the background colour
//!
//! Actual rasterization is the window layer's job; this module only keeps
//! transforms, materials and the starfield current.

use rand::Rng;

use crate::config::SceneScales;
use crate::data::{BodyKind, CelestialBody, Rgb};
use crate::hierarchy::{BodyId, BodyInstance, BodyTree};
use crate::kinematics::OrbitSolver;
use crate::math::{self, Vec3, ORIGIN};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const BACKGROUND: Rgb = Rgb::from_u32(0x02040a);
pub const FOG_DENSITY: f64 = 0.0008;

pub const PLANET_ORBIT_COLOR: Rgb = Rgb::from_u32(0x3366ff);
pub const MOON_ORBIT_COLOR: Rgb = Rgb::from_u32(0x888888);
pub const ORBIT_OPACITY: f32 = 0.35;

pub const STARFIELD_COUNT: usize = 1600;
pub const STARFIELD_RADIUS: f64 = 5000.0;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Visual primitives
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Surface parameters of a body sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    pub fn for_body(body: &CelestialBody) -> Self {
        match body.kind {
            BodyKind::Star => Self {
                color: body.color,
                emissive: body.color,
                emissive_intensity: 0.6,
                metalness: 0.1,
                roughness: 0.8,
            },
            BodyKind::Planet => Self {
                color: body.color,
                emissive: Rgb::new(0, 0, 0),
                emissive_intensity: 0.0,
                metalness: 0.3,
                roughness: 0.6,
            },
            BodyKind::Moon => Self {
                color: body.color,
                emissive: Rgb::new(0, 0, 0),
                emissive_intensity: 0.0,
                metalness: 0.1,
                roughness: 0.8,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereVisual {
    /// Scene units
    pub radius: f64,
    pub material: Material,
}

impl SphereVisual {
    pub fn for_body(body: &CelestialBody, scales: &SceneScales) -> Self {
        Self {
            radius: (body.radius_km * scales.radius).max(scales.min_body_radius),
            material: Material::for_body(body),
        }
    }
}

/// Static closed orbit loop, in the parent's frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitLine {
    pub points: Vec<Vec3>,
    pub color: Rgb,
    pub opacity: f32,
}

/// Visual node owned by a body instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub local_position: Vec3,
    pub world_position: Vec3,
    pub sphere: SphereVisual,
    pub orbit_line: Option<OrbitLine>,
}

impl SceneNode {
    /// Sphere plus, for orbiting bodies, the sampled orbit loop.
    pub fn for_body(body: &CelestialBody, scales: &SceneScales, solver: &OrbitSolver) -> Self {
        let orbit_line = body.orbit.as_ref().map(|orbit| OrbitLine {
            points: solver.orbit_path(orbit),
            color: if body.kind == BodyKind::Moon {
                MOON_ORBIT_COLOR
            } else {
                PLANET_ORBIT_COLOR
            },
            opacity: ORBIT_OPACITY,
        });
        Self {
            local_position: ORIGIN,
            world_position: ORIGIN,
            sphere: SphereVisual::for_body(body, scales),
            orbit_line,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Lights, fog, starfield
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Rgb::from_u32(0x404040),
            intensity: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            color: Rgb::from_u32(0xfff4d6),
            intensity: 3.0,
            position: ORIGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Rgb,
    pub density: f64,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            color: BACKGROUND,
            density: FOG_DENSITY,
        }
    }
}

impl Fog {
    /// Blend weight towards the fog colour at `distance`, in [0, 1].
    pub fn factor(&self, distance: f64) -> f32 {
        let d = self.density * distance;
        (1.0 - (-(d * d)).exp()).clamp(0.0, 1.0) as f32
    }

    /// Apply fog to a linear [0, 1] colour.
    pub fn apply(&self, color: [f32; 3], distance: f64) -> [f32; 3] {
        let f = self.factor(distance);
        let fog = self.color.to_unit();
        [
            color[0] + (fog[0] - color[0]) * f,
            color[1] + (fog[1] - color[1]) * f,
            color[2] + (fog[2] - color[2]) * f,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPoint {
    pub position: Vec3,
    pub color: [f32; 3],
}

/// Background point cloud on a spherical shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    pub points: Vec<StarPoint>,
    pub size: f32,
    pub opacity: f32,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f64) -> Self {
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let theta = rng.gen::<f64>() * std::f64::consts::TAU;
            let phi = (2.0 * rng.gen::<f64>() - 1.0).acos();
            let r = radius * (0.4 + 0.6 * rng.gen::<f64>());

            let position = [
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            ];

            let hue = 0.55 + rng.gen::<f32>() * 0.1;
            let saturation = 0.1 + rng.gen::<f32>() * 0.2;
            let lightness = 0.7 + rng.gen::<f32>() * 0.3;

            points.push(StarPoint {
                position,
                color: hsl_to_rgb(hue, saturation, lightness),
            });
        }
        Self {
            points,
            size: 2.0,
            opacity: 0.85,
        }
    }
}

/// HSL (all components in [0, 1]) to RGB in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };
    [channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0)]
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Scene
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct Scene {
    pub tree: BodyTree,
    pub ambient: AmbientLight,
    pub light: PointLight,
    pub fog: Fog,
    pub starfield: Starfield,
    solver: OrbitSolver,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(tree: BodyTree, scales: &SceneScales, rng: &mut R) -> Self {
        let mut scene = Self {
            tree,
            ambient: AmbientLight::default(),
            light: PointLight::default(),
            fog: Fog::default(),
            starfield: Starfield::generate(rng, STARFIELD_COUNT, STARFIELD_RADIUS),
            solver: OrbitSolver::new(scales.distance),
        };
        scene.animate(0.0);
        scene
    }

    /// Reposition every node for `elapsed_days` of simulated time.
    ///
    /// Bodies without an orbit (the star) stay at their parent's origin.
    pub fn animate(&mut self, elapsed_days: f64) {
        let solver = self.solver;
        let instances = self.tree.instances_mut();
        for i in 0..instances.len() {
            let local = match instances[i].body.orbit {
                Some(ref orbit) => solver.position(orbit, elapsed_days),
                None => ORIGIN,
            };
            // Pre-order storage: the parent's world position is already current.
            let parent_world = instances[i]
                .parent
                .map(|p| instances[p.0].node.world_position)
                .unwrap_or(ORIGIN);
            let node = &mut instances[i].node;
            node.local_position = local;
            node.world_position = math::add(parent_world, local);
        }
        self.light.position = self.tree.root().node.world_position;
    }

    /// World-space points of a body's orbit loop.
    pub fn orbit_world_points(&self, id: BodyId) -> Option<Vec<Vec3>> {
        let inst = self.tree.get(id)?;
        let line = inst.node.orbit_line.as_ref()?;
        let origin = self
            .tree
            .parent(id)
            .map(|p| p.node.world_position)
            .unwrap_or(ORIGIN);
        Some(line.points.iter().map(|p| math::add(origin, *p)).collect())
    }

    /// Flat colour of a body as seen from `eye`, before fog.
    ///
    /// Diffuse term uses the lit fraction of the visible disc,
    /// `(1 + cos α) / 2`, where α is the angle between the light and the eye
    /// seen from the body.
    pub fn shade(&self, inst: &BodyInstance, eye: Vec3) -> [f32; 3] {
        let center = inst.node.world_position;
        let to_eye = math::normalize(math::sub(eye, center));
        let to_light = math::normalize(math::sub(self.light.position, center));
        let phase = ((1.0 + math::dot(to_eye, to_light)) * 0.5) as f32;

        let material = &inst.node.sphere.material;
        let base = material.color.to_unit();
        let ambient = self.ambient.color.to_unit();
        let light = self.light.color.to_unit();
        let emissive = material.emissive.to_unit();

        let diffuse_weight = (1.0 - 0.5 * material.metalness) * (0.5 + 0.5 * material.roughness);
        let light_scale = self.light.intensity / 3.0;

        let mut out = [0.0f32; 3];
        for c in 0..3 {
            let lit = ambient[c] * self.ambient.intensity
                + light[c] * light_scale * phase * diffuse_weight;
            out[c] = (base[c] * lit + emissive[c] * material.emissive_intensity).clamp(0.0, 1.0);
        }
        out
    }
}
