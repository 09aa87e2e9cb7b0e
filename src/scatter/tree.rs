use bevy::prelude::*;
use rand::{
    Rng,
    distributions::{
        Distribution,
        Standard,
    },
};

use crate::scatter::{
    PropAssets,
    spawn_prop,
};


/// Radius of the keep-clear disk around the world origin; no tree trunk
/// lands inside it.
pub const SITE_EXCLUSION_RADIUS: f32 = 15.0;

pub const LEAF_TEXTURE_PATH: &str = "textures/leaves.jpg";

const TRUNK_SCALE: Vec3 = Vec3::new(0.3, 2.0, 0.3);
const CANOPY_SCALE: Vec3 = Vec3::new(1.0, 2.0, 1.0);


/// Siting for one tree; trunk and canopy placement both derive from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeSpec {
    /// Trunk footprint on the ground plane (x, z).
    pub site: Vec2,
}

impl Distribution<TreeSpec> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TreeSpec {
        let mut x = rng.gen_range(-70..=70);
        let mut z = rng.gen_range(-70..=70);

        // retries draw from a narrower band than the first attempt
        while ((x * x + z * z) as f32).sqrt() < SITE_EXCLUSION_RADIUS {
            x = rng.gen_range(-50..=50);
            z = rng.gen_range(-50..=50);
        }

        TreeSpec {
            site: Vec2::new(x as f32, z as f32),
        }
    }
}

impl TreeSpec {
    pub fn trunk_translation(&self) -> Vec3 {
        Vec3::new(self.site.x, 2.0, self.site.y)
    }

    /// The canopy cone sits two units above the trunk center.
    pub fn canopy_translation(&self) -> Vec3 {
        self.trunk_translation() + Vec3::Y * 2.0
    }
}

/// Samples `n` independent sitings from the thread rng.
pub fn random_trees(n: usize) -> Vec<TreeSpec> {
    let mut rng = rand::thread_rng();

    (0..n).map(|_| rng.gen()).collect()
}


#[derive(Component)]
pub struct Trunk;

#[derive(Component)]
pub struct Canopy;

pub fn spawn_tree(commands: &mut Commands, props: &PropAssets, spec: &TreeSpec) {
    spawn_prop(
        commands,
        props.trunk_mesh.clone(),
        props.trunk_material.clone(),
        Transform::from_translation(spec.trunk_translation()).with_scale(TRUNK_SCALE),
        Trunk,
    );

    spawn_prop(
        commands,
        props.canopy_mesh.clone(),
        props.canopy_material.clone(),
        Transform::from_translation(spec.canopy_translation()).with_scale(CANOPY_SCALE),
        Canopy,
    );
}
