//! Body hierarchy: star → planets → moons.
//!
//! Instances live in one flat arena (`BodyTree::instances`), which doubles
//! as the lookup table for pointer hits. Parents own their children through
//! `children` id lists; `parent` is a plain back-reference id. Instances are
//! pushed in pre-order, so a parent's index is always below its children's.

use crate::config::SceneScales;
use crate::data::{BodyKind, CelestialBody, Dataset};
use crate::error::BuildError;
use crate::kinematics::OrbitSolver;
use crate::render::scene::SceneNode;

/// Index into `BodyTree::instances`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// Runtime node: a body record, its visual node and its hierarchy links.
#[derive(Debug, Clone)]
pub struct BodyInstance {
    pub id: BodyId,
    /// The record, with `moons` moved out into `children`
    pub body: CelestialBody,
    pub parent: Option<BodyId>,
    pub children: Vec<BodyId>,
    pub node: SceneNode,
}

impl BodyInstance {
    pub fn kind(&self) -> BodyKind {
        self.body.kind
    }

    pub fn name(&self) -> &str {
        &self.body.name
    }
}

#[derive(Debug, Clone)]
pub struct BodyTree {
    instances: Vec<BodyInstance>,
    root: BodyId,
}

impl BodyTree {
    /// Build the hierarchy from a dataset.
    ///
    /// The first `star` record becomes the root; every top-level `planet`
    /// becomes its child; `moons` lists attach recursively. Other top-level
    /// records are ignored. Fails only if there is no star.
    pub fn build(dataset: &Dataset, scales: &SceneScales) -> Result<Self, BuildError> {
        let mut stars = dataset.bodies.iter().filter(|b| b.kind == BodyKind::Star);
        let star = stars
            .next()
            .ok_or(BuildError::MissingStar(dataset.bodies.len()))?;
        for extra in stars {
            log::warn!("Ignoring additional star {}", extra.name);
        }

        let solver = OrbitSolver::new(scales.distance);
        let mut builder = Builder {
            instances: Vec::with_capacity(dataset.body_count()),
            scales,
            solver,
        };

        let root = builder.instantiate(star, None);
        for planet in dataset.bodies.iter().filter(|b| b.kind == BodyKind::Planet) {
            let id = builder.instantiate(planet, Some(root));
            builder.instances[root.0].children.push(id);
        }

        for skipped in dataset
            .bodies
            .iter()
            .filter(|b| b.kind == BodyKind::Moon)
        {
            log::warn!("Ignoring top-level moon {} without a parent", skipped.name);
        }

        log::debug!("Built body hierarchy with {} instances", builder.instances.len());
        Ok(Self {
            instances: builder.instances,
            root,
        })
    }

    pub fn root(&self) -> &BodyInstance {
        &self.instances[self.root.0]
    }

    pub fn root_id(&self) -> BodyId {
        self.root
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyInstance> {
        self.instances.get(id.0)
    }

    /// All instances in pre-order (parents before children).
    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    pub fn instances_mut(&mut self) -> &mut [BodyInstance] {
        &mut self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn children(&self, id: BodyId) -> impl Iterator<Item = &BodyInstance> {
        self.get(id)
            .map(|inst| inst.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |child| self.get(*child))
    }

    pub fn parent(&self, id: BodyId) -> Option<&BodyInstance> {
        self.get(id).and_then(|inst| inst.parent).and_then(|p| self.get(p))
    }

    /// First instance with this name, in pre-order.
    pub fn find(&self, name: &str) -> Option<&BodyInstance> {
        self.instances.iter().find(|inst| inst.body.name == name)
    }

    /// Number of ancestors: 0 for the star.
    pub fn depth(&self, id: BodyId) -> usize {
        let mut depth = 0;
        let mut cursor = self.get(id).and_then(|inst| inst.parent);
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.get(parent).and_then(|inst| inst.parent);
        }
        depth
    }
}

/// `BodyTree::build` with default scene scales.
pub fn build(dataset: &Dataset) -> Result<BodyTree, BuildError> {
    BodyTree::build(dataset, &SceneScales::default())
}

struct Builder<'a> {
    instances: Vec<BodyInstance>,
    scales: &'a SceneScales,
    solver: OrbitSolver,
}

impl Builder<'_> {
    fn instantiate(&mut self, record: &CelestialBody, parent: Option<BodyId>) -> BodyId {
        let id = BodyId(self.instances.len());
        let mut body = record.clone();
        let moons = std::mem::take(&mut body.moons);
        let node = SceneNode::for_body(&body, self.scales, &self.solver);

        self.instances.push(BodyInstance {
            id,
            body,
            parent,
            children: Vec::with_capacity(moons.len()),
            node,
        });

        for moon in &moons {
            let child = self.instantiate(moon, Some(id));
            self.instances[id.0].children.push(child);
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::embedded::embedded_dataset;

    #[test]
    fn embedded_hierarchy_shape() {
        let tree = build(&embedded_dataset()).unwrap();
        let root = tree.root();
        assert_eq!(root.kind(), BodyKind::Star);
        assert_eq!(root.name(), "Sun");
        assert!(root.parent.is_none());
        assert_eq!(tree.len(), 27);

        let planets: Vec<&str> = tree.children(root.id).map(|p| p.name()).collect();
        assert_eq!(
            planets,
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );

        let expected = [
            ("Mercury", 0),
            ("Venus", 0),
            ("Earth", 1),
            ("Mars", 2),
            ("Jupiter", 4),
            ("Saturn", 4),
            ("Uranus", 5),
            ("Neptune", 2),
        ];
        for (name, moons) in expected {
            let planet = tree.find(name).unwrap();
            assert_eq!(planet.children.len(), moons, "{}", name);
            assert_eq!(planet.parent, Some(root.id));
            for moon in tree.children(planet.id) {
                assert_eq!(moon.kind(), BodyKind::Moon);
                assert_eq!(tree.parent(moon.id).map(|p| p.id), Some(planet.id));
                assert_eq!(tree.depth(moon.id), 2);
            }
        }
    }

    #[test]
    fn exactly_one_star() {
        let tree = build(&embedded_dataset()).unwrap();
        let stars = tree
            .instances()
            .iter()
            .filter(|i| i.kind() == BodyKind::Star)
            .count();
        assert_eq!(stars, 1);
    }

    #[test]
    fn parents_precede_children() {
        let tree = build(&embedded_dataset()).unwrap();
        for inst in tree.instances() {
            if let Some(parent) = inst.parent {
                assert!(parent < inst.id);
            }
            assert_eq!(tree.get(inst.id).unwrap().id, inst.id);
        }
    }

    #[test]
    fn orbit_visual_only_for_orbiting_bodies() {
        let tree = build(&embedded_dataset()).unwrap();
        for inst in tree.instances() {
            assert_eq!(inst.node.orbit_line.is_some(), inst.body.orbit.is_some());
            assert!(inst.body.moons.is_empty());
        }
    }

    #[test]
    fn missing_star_is_fatal() {
        let mut dataset = embedded_dataset();
        dataset.bodies.retain(|b| b.kind != BodyKind::Star);
        let err = build(&dataset).unwrap_err();
        assert_eq!(err, BuildError::MissingStar(8));
    }

    #[test]
    fn non_planet_top_level_records_are_skipped() {
        let mut dataset = embedded_dataset();
        let stray = dataset.bodies[3].moons[0].clone();
        dataset.bodies.push(stray);
        let tree = build(&dataset).unwrap();
        assert_eq!(tree.len(), 27);
    }
}
