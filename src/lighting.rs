use bevy::prelude::*;


/// Ambient plus a warm key/fill pair. The sky-and-grass bounce a hemisphere
/// light would contribute is folded into the ambient tint.
pub fn spawn_light_rig(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb_u8(0x87, 0xce, 0xeb),
        brightness: 400.0,
        ..default()
    });

    let sunlight = Color::srgb_u8(0xfe, 0xfc, 0xe4);

    commands.spawn((
        DirectionalLight {
            color: sunlight,
            illuminance: 10_000.0,
            ..default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("sun"),
    ));

    commands.spawn((
        DirectionalLight {
            color: sunlight,
            illuminance: 2_000.0,
            ..default()
        },
        Transform::from_xyz(-5.0, 1.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("fill"),
    ));
}
