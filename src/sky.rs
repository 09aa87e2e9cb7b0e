use bevy::prelude::*;


pub const SKY_TEXTURE_PATH: &str = "textures/sky.jpg";

/// Dome radius; inside the camera far plane with room to orbit.
const DOME_RADIUS: f32 = 150.0;


#[derive(Component)]
pub struct SkyDome;

/// Equirectangular sky image on an inward-facing sphere enclosing the whole
/// meadow. The texture streams in asynchronously; if it never arrives the
/// dome stays a flat backdrop.
pub fn spawn_sky_dome(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(DOME_RADIUS).mesh().uv(64, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(SKY_TEXTURE_PATH)),
            unlit: true,
            cull_mode: None,
            ..default()
        })),
        SkyDome,
        Name::new("sky"),
    ));
}
