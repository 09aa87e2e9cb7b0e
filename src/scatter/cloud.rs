use bevy::prelude::*;
use rand::{
    Rng,
    distributions::{
        Distribution,
        Standard,
    },
};

use crate::{
    scatter::{
        PropAssets,
        spawn_prop,
    },
    settings::MeadowSettings,
};


/// Eastern edge of the drift corridor; a lobe past it restarts in the west.
pub const DRIFT_EAST_EDGE: f32 = 60.0;
pub const DRIFT_WEST_EDGE: f32 = -60.0;

/// Vertical squash applied to the lower lobe of each bump/base pair.
pub const BASE_SQUASH: f32 = -0.1;

/// Gap between neighboring bumps along x within one cluster.
const BUMP_SPACING: f32 = 2.0;


/// Scale of one upper cloud lobe. Every axis is quantized to tenths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LobeSpec {
    pub scale: Vec3,
}

impl Distribution<LobeSpec> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> LobeSpec {
        let x = rng.gen_range(7..=13) as f32 / 10.0;
        let z = rng.gen_range(8..=12) as f32 / 10.0;
        let y = rng.gen_range(5..=15) as f32 / 10.0;

        LobeSpec {
            scale: Vec3::new(x, y, z),
        }
    }
}

/// One sampled cloud cluster: a west-to-east row of bump/base pairs sharing
/// a height and a z lane.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudSpec {
    /// Cluster anchor on the ground plane (x, z).
    pub origin: Vec2,
    pub height: f32,
    pub lobes: Vec<LobeSpec>,
}

impl Distribution<CloudSpec> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CloudSpec {
        let height = rng.gen_range(15..=20) as f32;
        let bump_count = rng.gen_range(2..=5);
        let origin = Vec2::new(
            rng.gen_range(-60..=60) as f32,
            rng.gen_range(-60..=60) as f32,
        );

        CloudSpec {
            origin,
            height,
            lobes: (0..bump_count).map(|_| rng.gen()).collect(),
        }
    }
}

impl CloudSpec {
    pub fn bump_count(&self) -> usize {
        self.lobes.len()
    }

    /// World transforms for every lobe, upper bump then squashed base per
    /// segment. The base shares its bump's position and x/z scale.
    pub fn lobe_transforms(&self) -> Vec<Transform> {
        let mut transforms = Vec::with_capacity(2 * self.lobes.len());

        for (index, lobe) in self.lobes.iter().enumerate() {
            let at = Vec3::new(
                self.origin.x + BUMP_SPACING * index as f32,
                self.height,
                self.origin.y,
            );

            transforms.push(Transform::from_translation(at).with_scale(lobe.scale));
            transforms.push(Transform::from_translation(at).with_scale(Vec3::new(
                lobe.scale.x,
                BASE_SQUASH,
                lobe.scale.z,
            )));
        }

        transforms
    }
}

/// Samples `n` independent clusters from the thread rng.
pub fn random_clouds(n: usize) -> Vec<CloudSpec> {
    let mut rng = rand::thread_rng();

    (0..n).map(|_| rng.gen()).collect()
}


#[derive(Component)]
pub struct CloudLobe;

/// Per-frame drift, fixed at spawn from creation order: later clouds move
/// faster regardless of where they sit.
#[derive(Clone, Component, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct CloudDrift {
    pub speed: f32,
}

impl CloudDrift {
    pub fn for_cloud(index: usize, settings: &MeadowSettings) -> Self {
        CloudDrift {
            speed: settings.drift_base + settings.drift_step * index as f32,
        }
    }
}

pub fn spawn_cloud(
    commands: &mut Commands,
    props: &PropAssets,
    spec: &CloudSpec,
    drift: CloudDrift,
) {
    for transform in spec.lobe_transforms() {
        spawn_prop(
            commands,
            props.lobe_mesh.clone(),
            props.cloud_material.clone(),
            transform,
            (CloudLobe, drift),
        );
    }
}

/// Slides every lobe eastward. A lobe past the east edge snaps back to the
/// west edge instead of advancing that frame, so the wrap always lands
/// exactly on the edge.
pub fn drift_clouds(mut lobes: Query<(&CloudDrift, &mut Transform), With<CloudLobe>>) {
    for (drift, mut transform) in &mut lobes {
        let x = &mut transform.translation.x;

        if *x > DRIFT_EAST_EDGE {
            *x = DRIFT_WEST_EDGE;
        } else {
            *x += drift.speed;
        }
    }
}
