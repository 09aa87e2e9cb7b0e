use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;


pub const WINDMILL_MODEL_PATH: &str = "models/windmill.obj";


#[derive(Component)]
pub struct Windmill;

/// The model and its companion material file stream in asynchronously; if
/// either never arrives the windmill is simply absent from the meadow.
pub fn spawn_windmill(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        SceneRoot(asset_server.load(WINDMILL_MODEL_PATH)),
        Transform::from_rotation(Quat::from_rotation_y(-FRAC_PI_2)),
        Windmill,
        Name::new("windmill"),
    ));
}
