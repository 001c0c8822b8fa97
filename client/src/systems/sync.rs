use bevy::prelude::*;

use crate::{
    markers::MainCameraMarker,
    spawning::{tree_transform, zombie_transform},
};
use common::{
    components::{Player, Position, PowerUp, Tree, Zombie},
    config::GameConfig,
    markers::{PlayerMarker, PowerUpMarker, TreeMarker, ZombieMarker},
};

// ============================================================================
// Transform Sync Systems
// ============================================================================
//
// The simulation only writes `Position` and its own state; these copy it onto the
// render transforms once gameplay has run for the frame.

// Camera transform for the player's eye: body centre plus half the body height
#[must_use]
pub fn camera_transform(pos: &Position, player: &Player, height: f32) -> Transform {
    Transform::from_translation(Vec3::from(*pos) + Vec3::Y * (height / 2.0))
        .with_rotation(Quat::from_euler(EulerRot::YXZ, player.yaw, player.pitch, 0.0))
}

pub fn sync_camera_system(
    config: Res<GameConfig>,
    player: Single<(&Position, &Player), With<PlayerMarker>>,
    mut camera: Single<&mut Transform, With<MainCameraMarker>>,
) {
    let (pos, state) = *player;
    **camera = camera_transform(pos, state, config.player.height);
}

pub fn sync_zombies_system(mut zombies: Query<(&Position, &Zombie, &mut Transform), With<ZombieMarker>>) {
    for (pos, zombie, mut transform) in &mut zombies {
        let target = zombie_transform(pos, zombie);
        transform.translation = target.translation;
        transform.rotation = target.rotation;
    }
}

pub fn sync_powerups_system(mut orbs: Query<(&Position, &PowerUp, &mut Transform), With<PowerUpMarker>>) {
    for (pos, orb, mut transform) in &mut orbs {
        transform.translation = Vec3::from(*pos);
        transform.rotation = Quat::from_rotation_y(orb.spin);
    }
}

// Standing trees never move
pub fn sync_trees_system(mut trees: Query<(&Position, &Tree, &mut Transform), With<TreeMarker>>) {
    for (pos, tree, mut transform) in &mut trees {
        if tree.destroyed {
            *transform = tree_transform(pos, tree);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::systems::player::view_direction;

    #[test]
    fn camera_sits_at_eye_height_and_looks_along_the_view_direction() {
        let pos = Position::new(1.0, 0.9, -4.0);
        let player = Player {
            yaw: 0.7,
            pitch: -0.3,
            ..Default::default()
        };
        let transform = camera_transform(&pos, &player, 1.8);

        assert!(transform.translation.distance(Vec3::new(1.0, 1.8, -4.0)) < 1e-6);
        let forward = transform.rotation * Vec3::NEG_Z;
        assert!(forward.distance(view_direction(player.yaw, player.pitch)) < 1e-5);
    }

    #[test]
    fn falling_tree_transform_follows_its_state() {
        let mut world = World::new();
        let mut tree = Tree::standing(3, 0.5);
        let pos = Position::new(10.0, 0.0, 5.0);
        let tree_entity = world
            .spawn((TreeMarker, pos, tree, tree_transform(&pos, &tree)))
            .id();

        tree.destroyed = true;
        tree.roll = 0.4;
        let fallen = Position::new(10.0, -1.0, 5.5);
        world.entity_mut(tree_entity).insert((tree, fallen));

        let mut schedule = Schedule::default();
        schedule.add_systems(sync_trees_system);
        schedule.run(&mut world);

        let Some(transform) = world.get::<Transform>(tree_entity) else {
            panic!("tree lost its transform");
        };
        assert_eq!(transform.translation, Vec3::new(10.0, -1.0, 5.5));
        assert!(transform.rotation.angle_between(tree_transform(&fallen, &tree).rotation) < 1e-6);
    }
}
