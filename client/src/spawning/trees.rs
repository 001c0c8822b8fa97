use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::{constants::*, resources::CampusMaterials};
use common::{
    components::{Position, Tree},
    constants::TREE_TRUNK_HEIGHT,
    markers::TreeMarker,
    resources::CampusRng,
};

// Transform for a tree: yaw is fixed at spawn, roll accumulates while it falls
#[must_use]
pub fn tree_transform(pos: &Position, tree: &Tree) -> Transform {
    Transform::from_translation(Vec3::from(*pos))
        .with_rotation(Quat::from_rotation_y(tree.yaw) * Quat::from_rotation_z(tree.roll))
}

// Give freshly spawned trees a bark trunk and a clump of foliage spheres
pub fn attach_tree_visuals_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut rng: ResMut<CampusRng>,
    campus: Option<Res<CampusMaterials>>,
    trees: Query<(Entity, &Position, &Tree), Added<TreeMarker>>,
) {
    let Some(campus) = campus else {
        return;
    };
    if trees.is_empty() {
        return;
    }

    let trunk_mesh = meshes.add(ConicalFrustum {
        radius_top: TRUNK_TOP_RADIUS,
        radius_bottom: TRUNK_BOTTOM_RADIUS,
        height: TREE_TRUNK_HEIGHT,
    });
    let main_foliage = meshes.add(Sphere::new(2.0).mesh().uv(8, 8));
    let top_foliage = meshes.add(Sphere::new(1.5).mesh().uv(8, 8));

    for (entity, pos, tree) in &trees {
        commands
            .entity(entity)
            .insert((tree_transform(pos, tree), Visibility::default()))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(trunk_mesh.clone()),
                    MeshMaterial3d(campus.bark.clone()),
                    Transform::from_xyz(0.0, TREE_TRUNK_HEIGHT / 2.0, 0.0),
                ));
                parent.spawn((
                    Mesh3d(main_foliage.clone()),
                    MeshMaterial3d(campus.foliage.clone()),
                    Transform::from_xyz(0.0, 6.0, 0.0),
                ));

                // Three smaller lobes around the crown for an irregular outline
                for j in 0..3 {
                    let angle = j as f32 / 3.0 * TAU;
                    let radius = rng.0.random_range(1.2..1.7);
                    parent.spawn((
                        Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(8, 8))),
                        MeshMaterial3d(campus.foliage.clone()),
                        Transform::from_xyz(
                            angle.cos() * 1.2,
                            rng.0.random_range(5.5..6.3),
                            angle.sin() * 1.2,
                        ),
                    ));
                }

                parent.spawn((
                    Mesh3d(top_foliage.clone()),
                    MeshMaterial3d(campus.foliage.clone()),
                    Transform::from_xyz(0.0, 7.5, 0.0),
                ));
            });
    }
}
