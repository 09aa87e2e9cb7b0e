use bevy::{
    prelude::*,
    render::{
        mesh::Indices,
        render_asset::RenderAssetUsages,
        render_resource::PrimitiveTopology,
    },
};


/// Upper half of a UV sphere, open at the equator.
///
/// Cloud lobes and ornaments want a flat-bottomed dome rather than a full
/// ball: an upright dome is one puffy bump, and the same dome under a thin
/// negative y scale becomes the flattened base beneath it. The stock sphere
/// primitive cannot produce the open-equator shape.
pub fn hemisphere(radius: f32, sectors: u32, stacks: u32) -> Mesh {
    let vertex_count = ((stacks + 1) * (sectors + 1)) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for stack in 0..=stacks {
        // polar angle, pole (0) down to the equator (PI/2)
        let theta = std::f32::consts::FRAC_PI_2 * stack as f32 / stacks as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for sector in 0..=sectors {
            let phi = std::f32::consts::TAU * sector as f32 / sectors as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let normal = Vec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);
            positions.push((normal * radius).to_array());
            normals.push(normal.to_array());
            uvs.push([
                sector as f32 / sectors as f32,
                stack as f32 / stacks as f32,
            ]);
        }
    }

    let mut indices = Vec::with_capacity((stacks * sectors * 6) as usize);
    for stack in 0..stacks {
        for sector in 0..sectors {
            let row = stack * (sectors + 1) + sector;
            let next_row = row + sectors + 1;

            // counter-clockwise from outside
            indices.extend_from_slice(&[row, row + 1, next_row]);
            indices.extend_from_slice(&[next_row, row + 1, next_row + 1]);
        }
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}
