use bevy::prelude::*;
use bevy_obj::ObjPlugin;

pub use scatter::{
    PropAssets,
    cloud::{
        CloudDrift,
        CloudLobe,
        CloudSpec,
        LobeSpec,
        random_clouds,
    },
    ornament::{
        OrnamentSpec,
        cross_section_diameter,
        ornament_palette,
        ring_reach,
    },
    tree::{
        TreeSpec,
        random_trees,
    },
};
pub use settings::MeadowSettings;
pub use texture::TextureRepeat;

pub mod ground;
pub mod lighting;
pub mod mesh;
pub mod scatter;
pub mod scene;
pub mod settings;
pub mod sky;
pub mod texture;
pub mod utils;
pub mod windmill;


pub struct MeadowPlugin;

impl Plugin for MeadowPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MeadowSettings>();
        app.register_type::<CloudDrift>();
        app.init_resource::<MeadowSettings>();

        if !app.is_plugin_added::<ObjPlugin>() {
            app.add_plugins(ObjPlugin);
        }

        app.add_systems(Startup, (
            ground::spawn_ground,
            scene::populate,
            sky::spawn_sky_dome,
            lighting::spawn_light_rig,
            windmill::spawn_windmill,
        ));
        app.add_systems(Update, scatter::cloud::drift_clouds);
    }
}
