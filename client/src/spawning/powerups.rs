use bevy::prelude::*;

use crate::resources::{CampusMaterials, EffectMeshes};
use common::{
    components::{Position, PowerUp},
    markers::PowerUpMarker,
};

#[derive(Bundle)]
struct PowerUpVisualBundle {
    mesh: Mesh3d,
    material: MeshMaterial3d<StandardMaterial>,
    transform: Transform,
    visibility: Visibility,
}

// Glowing orb for each newly spawned power-up
pub fn attach_powerup_visuals_system(
    mut commands: Commands,
    campus: Option<Res<CampusMaterials>>,
    effects: Option<Res<EffectMeshes>>,
    orbs: Query<(Entity, &Position, &PowerUp), Added<PowerUpMarker>>,
) {
    let (Some(campus), Some(effects)) = (campus, effects) else {
        return;
    };

    for (entity, pos, orb) in &orbs {
        commands.entity(entity).insert(PowerUpVisualBundle {
            mesh: Mesh3d(effects.powerup_orb.clone()),
            material: MeshMaterial3d(campus.powerup.clone()),
            transform: Transform::from_translation(Vec3::from(*pos)).with_rotation(Quat::from_rotation_y(orb.spin)),
            visibility: Visibility::default(),
        });
    }
}
