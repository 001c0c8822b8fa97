#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_time::Time;
use rand::Rng;
use std::f32::consts::TAU;

use crate::{
    components::{Position, Tree},
    config::GameConfig,
    constants::{
        TREE_FALL_GRAVITY, TREE_FALL_HORIZONTAL_SPEED, TREE_FALL_INITIAL_DROP, TREE_FALL_MAX_ANGULAR_SPEED,
        TREE_REST_HEIGHT,
    },
    map::CampusLayout,
    markers::TreeMarker,
};

pub fn spawn_trees(commands: &mut Commands, layout: &CampusLayout, config: &GameConfig, rng: &mut impl Rng) {
    for pos in &layout.tree_positions {
        commands.spawn((
            TreeMarker,
            Tree::standing(config.tree.hit_points, rng.random_range(0.0..TAU)),
            *pos,
        ));
    }
}

// Topple a tree in a random horizontal direction with a random spin
pub fn fell_tree(tree: &mut Tree, rng: &mut impl Rng) {
    let direction = rng.random_range(0.0..TAU);
    tree.destroyed = true;
    tree.velocity = Vec3::new(
        direction.cos() * TREE_FALL_HORIZONTAL_SPEED,
        -TREE_FALL_INITIAL_DROP,
        direction.sin() * TREE_FALL_HORIZONTAL_SPEED,
    );
    tree.angular_velocity = rng.random_range(-TREE_FALL_MAX_ANGULAR_SPEED..TREE_FALL_MAX_ANGULAR_SPEED);
}

pub fn tree_fall_system(time: Res<Time>, mut trees: Query<(&mut Position, &mut Tree), With<TreeMarker>>) {
    let delta = time.delta_secs();

    for (mut pos, mut tree) in &mut trees {
        if !tree.destroyed {
            continue;
        }

        tree.velocity.y -= TREE_FALL_GRAVITY * delta;
        *pos = Position::from(Vec3::from(*pos) + tree.velocity * delta);
        tree.roll += tree.angular_velocity * delta;

        if pos.y < TREE_REST_HEIGHT {
            pos.y = TREE_REST_HEIGHT;
            tree.velocity = Vec3::ZERO;
            tree.angular_velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::test_support::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn felled_tree_falls_and_comes_to_rest() {
        let mut world = test_world();
        let mut tree = Tree::standing(0, 0.0);
        fell_tree(&mut tree, &mut StdRng::seed_from_u64(11));
        let horizontal = Vec3::new(tree.velocity.x, 0.0, tree.velocity.z).length();
        assert!((horizontal - 1.2).abs() < 1e-4);
        assert!(tree.angular_velocity.abs() <= 1.5);

        let entity = world.spawn((TreeMarker, tree, Position::new(35.0, 0.0, 0.0))).id();
        for _ in 0..120 {
            advance(&mut world, 1.0 / 60.0);
            run_system(&mut world, tree_fall_system);
        }

        let pos = *world.get::<Position>(entity).unwrap();
        let tree = world.get::<Tree>(entity).unwrap();
        assert_eq!(pos.y, TREE_REST_HEIGHT);
        assert_eq!(tree.velocity, Vec3::ZERO);
        assert_eq!(tree.angular_velocity, 0.0);
    }

    #[test]
    fn standing_trees_do_not_move() {
        let mut world = test_world();
        let entity = world
            .spawn((TreeMarker, Tree::standing(3, 1.0), Position::new(35.0, 0.0, 0.0)))
            .id();
        advance(&mut world, 1.0);
        run_system(&mut world, tree_fall_system);
        assert_eq!(*world.get::<Position>(entity).unwrap(), Position::new(35.0, 0.0, 0.0));
    }
}
