use bevy::{
    asset::RenderAssetUsages,
    image::{ImageAddressMode, ImageFilterMode, ImageSamplerDescriptor},
    prelude::*,
    render::render_resource::PrimitiveTopology,
};

// Build a cuboid mesh whose UVs repeat once per `tile_size` meters on every face, so a
// texture keeps the same world scale on a 100 m wall and a 0.8 m stair step.
#[must_use]
pub fn tiled_cuboid(size: Vec3, tile_size: f32) -> Mesh {
    let h = size / 2.0;
    let r = size / tile_size;

    let mut positions = Vec::with_capacity(36);
    let mut normals = Vec::with_capacity(36);
    let mut uvs = Vec::with_capacity(36);

    // Corners in CCW order seen from outside; UVs run (0,0) → (u,0) → (u,v) → (0,v)
    let mut push_face = |corners: [[f32; 3]; 4], normal: [f32; 3], u: f32, v: f32| {
        let face_uvs = [[0.0, v], [u, v], [u, 0.0], [0.0, 0.0]];
        for i in [0, 1, 2, 0, 2, 3] {
            positions.push(corners[i]);
            normals.push(normal);
            uvs.push(face_uvs[i]);
        }
    };

    // +X / -X: U along Z
    push_face(
        [[h.x, -h.y, h.z], [h.x, -h.y, -h.z], [h.x, h.y, -h.z], [h.x, h.y, h.z]],
        [1.0, 0.0, 0.0],
        r.z,
        r.y,
    );
    push_face(
        [[-h.x, -h.y, -h.z], [-h.x, -h.y, h.z], [-h.x, h.y, h.z], [-h.x, h.y, -h.z]],
        [-1.0, 0.0, 0.0],
        r.z,
        r.y,
    );

    // +Y / -Y: U along X, V along Z
    push_face(
        [[-h.x, h.y, h.z], [h.x, h.y, h.z], [h.x, h.y, -h.z], [-h.x, h.y, -h.z]],
        [0.0, 1.0, 0.0],
        r.x,
        r.z,
    );
    push_face(
        [[-h.x, -h.y, -h.z], [h.x, -h.y, -h.z], [h.x, -h.y, h.z], [-h.x, -h.y, h.z]],
        [0.0, -1.0, 0.0],
        r.x,
        r.z,
    );

    // +Z / -Z: U along X
    push_face(
        [[-h.x, -h.y, h.z], [h.x, -h.y, h.z], [h.x, h.y, h.z], [-h.x, h.y, h.z]],
        [0.0, 0.0, 1.0],
        r.x,
        r.y,
    );
    push_face(
        [[h.x, -h.y, -h.z], [-h.x, -h.y, -h.z], [-h.x, h.y, -h.z], [h.x, h.y, -h.z]],
        [0.0, 0.0, -1.0],
        r.x,
        r.y,
    );

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh
}

// Repeat addressing so UVs beyond 0..1 tile instead of clamping
#[must_use]
pub fn repeat_sampler() -> ImageSamplerDescriptor {
    ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        address_mode_w: ImageAddressMode::Repeat,
        mag_filter: ImageFilterMode::Linear,
        min_filter: ImageFilterMode::Linear,
        mipmap_filter: ImageFilterMode::Linear,
        anisotropy_clamp: 16,
        ..default()
    }
}

// Hex colour as used by the campus palette
#[must_use]
pub fn srgb(rgb: [f32; 3]) -> Color {
    Color::srgb(rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::mesh::VertexAttributeValues;

    #[test]
    fn cuboid_has_six_quads_with_outward_normals() {
        let mesh = tiled_cuboid(Vec3::new(2.0, 4.0, 6.0), 2.0);
        let Some(VertexAttributeValues::Float32x3(positions)) = mesh.attribute(Mesh::ATTRIBUTE_POSITION) else {
            panic!("missing positions");
        };
        let Some(VertexAttributeValues::Float32x3(normals)) = mesh.attribute(Mesh::ATTRIBUTE_NORMAL) else {
            panic!("missing normals");
        };
        assert_eq!(positions.len(), 36);
        for (p, n) in positions.iter().zip(normals) {
            // Every vertex lies on the face its normal points out of
            let p = Vec3::from_array(*p);
            let n = Vec3::from_array(*n);
            assert!((p.dot(n) - (Vec3::new(1.0, 2.0, 3.0) * n.abs()).element_sum()).abs() < 1e-6);
        }
    }

    #[test]
    fn uvs_repeat_per_tile() {
        let mesh = tiled_cuboid(Vec3::new(100.0, 5.0, 1.0), 5.0);
        let Some(VertexAttributeValues::Float32x2(uvs)) = mesh.attribute(Mesh::ATTRIBUTE_UV_0) else {
            panic!("missing uvs");
        };
        let max_u = uvs.iter().map(|uv| uv[0]).fold(0.0, f32::max);
        let max_v = uvs.iter().map(|uv| uv[1]).fold(0.0, f32::max);
        assert!((max_u - 20.0).abs() < 1e-6);
        assert!((max_v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let mesh = tiled_cuboid(Vec3::ONE, 1.0);
        let Some(VertexAttributeValues::Float32x3(positions)) = mesh.attribute(Mesh::ATTRIBUTE_POSITION) else {
            panic!("missing positions");
        };
        let Some(VertexAttributeValues::Float32x3(normals)) = mesh.attribute(Mesh::ATTRIBUTE_NORMAL) else {
            panic!("missing normals");
        };
        for (tri, n) in positions.chunks(3).zip(normals.chunks(3)) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(Vec3::from_array);
            let face_normal = (b - a).cross(c - a).normalize();
            assert!(face_normal.dot(Vec3::from_array(n[0])) > 0.99);
        }
    }
}
