use bevy::prelude::*;

use crate::{
    settings::MeadowSettings,
    texture::load_wrapped,
};


pub const GROUND_TEXTURE_PATH: &str = "textures/grass.jpg";

/// A two-unit cube stretched into a 200 x 0.2 x 200 slab.
const GROUND_SCALE: Vec3 = Vec3::new(100.0, 0.1, 100.0);


#[derive(Component)]
pub struct Ground;

pub fn spawn_ground(
    mut commands: Commands,
    settings: Res<MeadowSettings>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let texture = load_wrapped(&asset_server, GROUND_TEXTURE_PATH);

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(2.0, 2.0, 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(texture),
            uv_transform: settings.ground_repeat.uv_transform(),
            ..default()
        })),
        Transform::from_scale(GROUND_SCALE),
        Ground,
        Name::new("ground"),
    ));
}
