use bevy::prelude::*;

use crate::texture::TextureRepeat;


/// Population counts and animation tuning for one meadow.
///
/// Insert before [`crate::MeadowPlugin`] to override the stock scene;
/// otherwise the defaults reproduce it exactly.
#[derive(Clone, Debug, Reflect, Resource)]
#[reflect(Resource)]
pub struct MeadowSettings {
    pub cloud_count: usize,
    pub tree_count: usize,
    pub ornament_count: usize,

    /// Per-frame drift of the first cloud.
    pub drift_base: f32,

    /// Extra per-frame drift for each later cloud, by creation order.
    pub drift_step: f32,

    pub ground_repeat: TextureRepeat,
    pub canopy_repeat: TextureRepeat,
}

impl Default for MeadowSettings {
    fn default() -> Self {
        Self {
            cloud_count: 15,
            tree_count: 200,
            ornament_count: 200,
            drift_base: 0.002,
            drift_step: 0.0005,
            ground_repeat: TextureRepeat::splat(10.0),
            canopy_repeat: TextureRepeat::splat(2.0),
        }
    }
}
