use std::f32::consts::PI;

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


/// Vertical span of the decorated cone above its anchor.
pub const CONE_SPAN: f32 = 5.0;

pub const ORNAMENT_SCALE: f32 = 0.05;

/// Outward step used when walking an ornament onto the cone surface.
const RING_STEP: f32 = 0.01;


/// Ornament colors: red, blue, cyan, white.
pub fn ornament_palette() -> [Color; 4] {
    [
        Color::srgb_u8(0xff, 0x00, 0x00),
        Color::srgb_u8(0x00, 0x00, 0xff),
        Color::srgb_u8(0x00, 0xff, 0xff),
        Color::srgb_u8(0xff, 0xff, 0xff),
    ]
}

/// Horizontal extent of the cone at height `y`: widest at the base,
/// shrinking linearly toward the tip.
pub fn cross_section_diameter(y: f32) -> f32 {
    0.2 * (3.0 - y / 2.0)
}

/// Minimal z >= 0, stepped in hundredths, putting (x, z) at or beyond
/// `reach` from the cone axis. Walking outward from the axis keeps
/// ornaments on the surface instead of buried inside the silhouette.
pub fn ring_reach(x: f32, reach: f32) -> f32 {
    let mut z = 0.0;

    while (x * x + z * z).sqrt() < reach {
        z += RING_STEP;
    }

    z
}

/// One ornament: an offset from the decorated tree's anchor plus a palette
/// pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrnamentSpec {
    pub offset: Vec3,
    pub palette_index: usize,
}

impl Distribution<OrnamentSpec> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> OrnamentSpec {
        let y = rng.gen::<f32>() * CONE_SPAN;
        let diameter = cross_section_diameter(y);
        let x = 3.2 * diameter * (rng.gen::<f32>() * 2.0 - 1.0);

        // the sign draw includes zero, which drops that ornament onto the
        // x axis
        let z = ring_reach(x, PI * diameter) * rng.gen_range(-1..=1) as f32;

        OrnamentSpec {
            offset: Vec3::new(x, y, z),
            palette_index: rng.gen_range(0..=3),
        }
    }
}


#[derive(Component)]
pub struct Ornament;

/// Places one ornament relative to the decorated tree's canopy: x/z follow
/// the canopy, and the cone rises from one unit above the ground.
pub fn spawn_ornament(
    commands: &mut Commands,
    props: &PropAssets,
    spec: &OrnamentSpec,
    canopy: Vec3,
) {
    let at = Vec3::new(
        canopy.x + spec.offset.x,
        spec.offset.y + 1.0,
        canopy.z + spec.offset.z,
    );

    spawn_prop(
        commands,
        props.lobe_mesh.clone(),
        props.ornament_materials[spec.palette_index].clone(),
        Transform::from_translation(at).with_scale(Vec3::splat(ORNAMENT_SCALE)),
        Ornament,
    );
}
