use bevy::prelude::*;
use rand::Rng;

use crate::{
    scatter::{
        PropAssets,
        cloud::{
            self,
            CloudDrift,
            CloudSpec,
        },
        ornament::{
            self,
            OrnamentSpec,
        },
        tree::{
            self,
            TreeSpec,
        },
    },
    settings::MeadowSettings,
};


/// Fills the world in one pass: the cloud layer, the forest, and the
/// decorated centerpiece tree. Runs once at startup; nothing spawned here
/// is ever despawned.
pub fn populate(
    mut commands: Commands,
    settings: Res<MeadowSettings>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    let props = PropAssets::load(&asset_server, &mut meshes, &mut materials, &settings);

    for index in 0..settings.cloud_count {
        let spec: CloudSpec = rng.gen();
        cloud::spawn_cloud(
            &mut commands,
            &props,
            &spec,
            CloudDrift::for_cloud(index, &settings),
        );
    }

    for _ in 0..settings.tree_count {
        let spec: TreeSpec = rng.gen();
        tree::spawn_tree(&mut commands, &props, &spec);
    }

    // the centerpiece is an ordinary tree plus its ornament cone
    let centerpiece: TreeSpec = rng.gen();
    tree::spawn_tree(&mut commands, &props, &centerpiece);

    for _ in 0..settings.ornament_count {
        let spec: OrnamentSpec = rng.gen();
        ornament::spawn_ornament(&mut commands, &props, &spec, centerpiece.canopy_translation());
    }

    info!(
        "meadow populated: {} clouds, {} trees, {} ornaments",
        settings.cloud_count,
        settings.tree_count + 1,
        settings.ornament_count,
    );
}
