use bevy::{camera::primitives::Aabb, prelude::*, scene::SceneRoot};
use std::f32::consts::FRAC_PI_2;

use crate::{
    components::{FireParticle, ZombieVisual},
    constants::*,
    markers::{ZombieFallbackMarker, ZombieModelMarker},
    resources::{CampusMaterials, EffectMeshes, ZombieModel},
};
use common::{
    components::{Position, Zombie},
    markers::ZombieMarker,
};

// Present on a model root until it has been scaled to the target height
#[derive(Component)]
pub struct NeedsHeightFit;

#[must_use]
pub fn zombie_transform(pos: &Position, zombie: &Zombie) -> Transform {
    Transform::from_translation(Vec3::from(*pos)).with_rotation(Quat::from_rotation_y(zombie.yaw))
}

fn spawn_model(commands: &mut Commands, parent: Entity, model: &ZombieModel) {
    // The source model is Z-up; stand it upright
    commands.spawn((
        SceneRoot(model.scene.clone()),
        Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        Visibility::default(),
        ZombieModelMarker,
        NeedsHeightFit,
        ChildOf(parent),
    ));
}

fn spawn_fallback(commands: &mut Commands, parent: Entity, effects: &EffectMeshes, visual: &ZombieVisual) {
    commands.spawn((
        Mesh3d(effects.zombie_fallback.clone()),
        MeshMaterial3d(visual.material.clone()),
        Transform::from_xyz(0.0, ZOMBIE_MODEL_SCALE / 2.0, 0.0),
        ZombieModelMarker,
        ZombieFallbackMarker,
        ChildOf(parent),
    ));
}

// Give each new zombie its own skin material and a model, or a capsule if the model
// could not be loaded
pub fn attach_zombie_visuals_system(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    campus: Option<Res<CampusMaterials>>,
    effects: Option<Res<EffectMeshes>>,
    model: Option<Res<ZombieModel>>,
    zombies: Query<(Entity, &Position, &Zombie), Added<ZombieMarker>>,
) {
    let (Some(campus), Some(effects), Some(model)) = (campus, effects, model) else {
        return;
    };

    for (entity, pos, zombie) in &zombies {
        let visual = ZombieVisual {
            material: materials.add(campus.zombie_skin.clone()),
        };
        if model.failed {
            spawn_fallback(&mut commands, entity, &effects, &visual);
        } else {
            spawn_model(&mut commands, entity, &model);
        }
        commands
            .entity(entity)
            .insert((zombie_transform(pos, zombie), Visibility::default(), visual));
    }
}

// Meshes instantiated from the zombie scene take the owning zombie's skin material
pub fn apply_zombie_skin_system(
    mut commands: Commands,
    added: Query<Entity, (Added<MeshMaterial3d<StandardMaterial>>, Without<FireParticle>)>,
    parents: Query<&ChildOf>,
    zombies: Query<&ZombieVisual>,
) {
    for entity in &added {
        for ancestor in parents.iter_ancestors(entity) {
            if let Ok(visual) = zombies.get(ancestor) {
                commands
                    .entity(entity)
                    .insert(MeshMaterial3d(visual.material.clone()));
                break;
            }
        }
    }
}

// Scale each instantiated model so its bounds are exactly the zombie height, feet on the ground
pub fn fit_zombie_model_system(
    mut commands: Commands,
    mut roots: Query<(Entity, &mut Transform, &GlobalTransform), With<NeedsHeightFit>>,
    children: Query<&Children>,
    bounds: Query<(&Aabb, &GlobalTransform)>,
) {
    for (root, mut transform, root_global) in &mut roots {
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for descendant in children.iter_descendants(root) {
            let Ok((aabb, global)) = bounds.get(descendant) else {
                continue;
            };
            let (center, half) = (Vec3::from(aabb.center), Vec3::from(aabb.half_extents));
            for corner in [-1.0, 1.0].into_iter().flat_map(|x| {
                [-1.0, 1.0]
                    .into_iter()
                    .flat_map(move |y| [-1.0, 1.0].map(|z| Vec3::new(x, y, z)))
            }) {
                let y = global.transform_point(center + half * corner).y;
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }

        // Scene not instantiated yet
        let height = max_y - min_y;
        if !height.is_finite() || height <= f32::EPSILON {
            continue;
        }

        // Scale about the model origin, then lift so the lowest point rests on the zombie's feet
        let ratio = ZOMBIE_MODEL_SCALE / height;
        let offset = min_y - root_global.translation().y;
        transform.scale *= ratio;
        transform.translation.y = -offset * ratio;
        debug!("zombie model fitted: height {height:.2} scaled by {ratio:.3}");
        commands.entity(root).remove::<NeedsHeightFit>();
    }
}

// A failed model load swaps every model instance for the capsule fallback
pub fn zombie_model_fallback_system(
    mut commands: Commands,
    model: Option<Res<ZombieModel>>,
    effects: Option<Res<EffectMeshes>>,
    instances: Query<(Entity, &ChildOf), (With<ZombieModelMarker>, Without<ZombieFallbackMarker>)>,
    visuals: Query<&ZombieVisual>,
) {
    let (Some(model), Some(effects)) = (model, effects) else {
        return;
    };
    if !model.failed {
        return;
    }

    for (instance, child_of) in &instances {
        let parent = child_of.parent();
        commands.entity(instance).despawn();
        if let Ok(visual) = visuals.get(parent) {
            spawn_fallback(&mut commands, parent, &effects, visual);
        }
    }
}
