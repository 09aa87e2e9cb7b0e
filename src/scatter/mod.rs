use bevy::prelude::*;

use crate::{
    mesh::hemisphere,
    settings::MeadowSettings,
    texture::load_wrapped,
};

pub mod cloud;
pub mod ornament;
pub mod tree;


const LOBE_RADIUS: f32 = 3.0;
const LOBE_SECTORS: u32 = 32;
const LOBE_STACKS: u32 = 16;


/// Geometry and material handles shared across every generated prop.
///
/// Four geometries cover the whole population: one dome for cloud lobes and
/// ornaments, one cylinder for trunks, one cone for canopies, plus the
/// ground slab owned by [`crate::ground`]. Materials are shared per role.
pub struct PropAssets {
    pub lobe_mesh: Handle<Mesh>,
    pub trunk_mesh: Handle<Mesh>,
    pub canopy_mesh: Handle<Mesh>,
    pub cloud_material: Handle<StandardMaterial>,
    pub trunk_material: Handle<StandardMaterial>,
    pub canopy_material: Handle<StandardMaterial>,
    pub ornament_materials: [Handle<StandardMaterial>; 4],
}

impl PropAssets {
    pub fn load(
        asset_server: &AssetServer,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        settings: &MeadowSettings,
    ) -> Self {
        let leaf_texture = load_wrapped(asset_server, tree::LEAF_TEXTURE_PATH);

        let ornament_materials = ornament::ornament_palette().map(|color| {
            materials.add(StandardMaterial {
                base_color: color,
                ..default()
            })
        });

        PropAssets {
            lobe_mesh: meshes.add(hemisphere(LOBE_RADIUS, LOBE_SECTORS, LOBE_STACKS)),
            trunk_mesh: meshes.add(Cylinder::new(2.0, 2.0)),
            canopy_mesh: meshes.add(Cone {
                radius: 2.0,
                height: 3.0,
            }),
            cloud_material: materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0xf6, 0xf6, 0xf6),
                // base lobes render under a negative y scale
                double_sided: true,
                cull_mode: None,
                ..default()
            }),
            trunk_material: materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0x25, 0x15, 0x0b),
                ..default()
            }),
            canopy_material: materials.add(StandardMaterial {
                base_color_texture: Some(leaf_texture),
                uv_transform: settings.canopy_repeat.uv_transform(),
                ..default()
            }),
            ornament_materials,
        }
    }
}

/// Inserts one renderable prop into the world: shared geometry, a material,
/// a transform, and whatever marker components the caller tacks on. The
/// world owns the entity from here; the returned id is the only way back.
pub fn spawn_prop(
    commands: &mut Commands,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
    transform: Transform,
    extras: impl Bundle,
) -> Entity {
    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            transform,
            extras,
        ))
        .id()
}
