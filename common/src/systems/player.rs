#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::{Quat, Vec3};
use bevy_time::Time;
use std::f32::consts::FRAC_PI_2;

use crate::{
    collision::move_player_with_collision,
    components::{Player, Position},
    config::GameConfig,
    constants::MOUSE_SENSITIVITY,
    map::CampusLayout,
    markers::PlayerMarker,
    resources::PlayerInput,
};

// ============================================================================
// Look
// ============================================================================

pub fn player_look_system(input: Res<PlayerInput>, mut players: Query<&mut Player, With<PlayerMarker>>) {
    if !input.pointer_locked {
        return;
    }
    let Ok(mut player) = players.single_mut() else {
        return;
    };

    player.yaw -= input.look_delta.x * MOUSE_SENSITIVITY;
    player.pitch = (player.pitch - input.look_delta.y * MOUSE_SENSITIVITY).clamp(-FRAC_PI_2, FRAC_PI_2);
}

// Unit vector the player is looking along
#[must_use]
pub fn view_direction(yaw: f32, pitch: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch) * Vec3::NEG_Z
}

// ============================================================================
// Movement
// ============================================================================

// Horizontal displacement for the held arrow keys, rotated by yaw; forward is -Z.
#[must_use]
pub fn movement_vector(input: &PlayerInput, yaw: f32, distance: f32) -> Vec3 {
    let mut local = Vec3::ZERO;
    if input.forward {
        local.z -= 1.0;
    }
    if input.back {
        local.z += 1.0;
    }
    if input.left {
        local.x -= 1.0;
    }
    if input.right {
        local.x += 1.0;
    }
    if local == Vec3::ZERO {
        return Vec3::ZERO;
    }
    Quat::from_rotation_y(yaw) * local.normalize() * distance
}

pub fn player_movement_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    layout: Res<CampusLayout>,
    input: Res<PlayerInput>,
    mut players: Query<(&mut Position, &mut Player), With<PlayerMarker>>,
) {
    let Ok((mut pos, mut player)) = players.single_mut() else {
        return;
    };
    let delta = time.delta_secs();
    let height = config.player.height;

    let step = movement_vector(&input, player.yaw, config.player.speed * delta);
    if step != Vec3::ZERO {
        *pos = move_player_with_collision(&pos, step.x, step.z, &layout.collision_boxes, height);
    }

    if player.on_ground {
        player.velocity_y = 0.0;
        if input.jump {
            player.velocity_y = config.player.jump_speed;
            player.on_ground = false;
        }
    } else {
        player.velocity_y -= config.player.gravity * delta;
    }

    pos.y += player.velocity_y * delta;

    let contact = layout.ground_height_at(&pos, height);
    pos.y = contact.y;
    player.on_ground = contact.on_ground;

    *pos = CampusLayout::clamp_to_bounds(*pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::test_support::*;
    use bevy_math::Vec2;

    fn player(world: &mut World) -> (Position, Player) {
        let (pos, player) = world
            .query_filtered::<(&Position, &Player), With<PlayerMarker>>()
            .single(world)
            .unwrap();
        (*pos, *player)
    }

    #[test]
    fn look_ignored_without_pointer_lock() {
        let mut world = test_world();
        spawn_player(&mut world, Position::new(0.0, 0.9, 20.0));
        world.resource_mut::<PlayerInput>().look_delta = Vec2::new(100.0, 100.0);
        run_system(&mut world, player_look_system);
        let (_, p) = player(&mut world);
        assert_eq!((p.yaw, p.pitch), (0.0, 0.0));
    }

    #[test]
    fn look_turns_and_clamps_pitch() {
        let mut world = test_world();
        spawn_player(&mut world, Position::new(0.0, 0.9, 20.0));
        {
            let mut input = world.resource_mut::<PlayerInput>();
            input.pointer_locked = true;
            input.look_delta = Vec2::new(100.0, -5000.0);
        }
        run_system(&mut world, player_look_system);
        let (_, p) = player(&mut world);
        assert!((p.yaw - -0.2).abs() < 1e-6);
        assert_eq!(p.pitch, FRAC_PI_2);
    }

    #[test]
    fn view_direction_defaults_to_negative_z() {
        let dir = view_direction(0.0, 0.0);
        assert!(dir.distance(Vec3::NEG_Z) < 1e-6);
        // Turning right by a quarter turn looks down +X
        let dir = view_direction(-FRAC_PI_2, 0.0);
        assert!(dir.distance(Vec3::X) < 1e-6);
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let input = PlayerInput {
            forward: true,
            right: true,
            ..Default::default()
        };
        let step = movement_vector(&input, 0.0, 1.0);
        assert!((step.length() - 1.0).abs() < 1e-6);
        assert!(step.x > 0.0 && step.z < 0.0);
    }

    #[test]
    fn forward_moves_at_configured_speed() {
        let mut world = test_world();
        spawn_player(&mut world, Position::new(0.0, 0.9, 20.0));
        world.resource_mut::<PlayerInput>().forward = true;
        advance(&mut world, 0.5);
        run_system(&mut world, player_movement_system);
        let (pos, p) = player(&mut world);
        assert!((pos.z - 17.0).abs() < 1e-4);
        assert_eq!(pos.y, 0.9);
        assert!(p.on_ground);
    }

    #[test]
    fn jump_rises_then_lands() {
        let mut world = test_world();
        spawn_player(&mut world, Position::new(0.0, 0.9, 20.0));
        world.resource_mut::<PlayerInput>().jump = true;
        advance(&mut world, 1.0 / 60.0);
        run_system(&mut world, player_movement_system);
        let (pos, p) = player(&mut world);
        assert!(!p.on_ground);
        assert!((pos.y - (0.9 + 18.0 / 60.0)).abs() < 1e-4);

        world.resource_mut::<PlayerInput>().jump = false;
        for _ in 0..120 {
            advance(&mut world, 1.0 / 60.0);
            run_system(&mut world, player_movement_system);
        }
        let (pos, p) = player(&mut world);
        assert!(p.on_ground);
        assert_eq!(pos.y, 0.9);
    }

    #[test]
    fn building_blocks_walking() {
        let mut world = test_world();
        // Main building front face is at z = -20
        spawn_player(&mut world, Position::new(5.0, 0.9, -19.4));
        world.resource_mut::<PlayerInput>().forward = true;
        advance(&mut world, 0.1);
        run_system(&mut world, player_movement_system);
        let (pos, _) = player(&mut world);
        assert!((pos.z - -19.4).abs() < 1e-5);
    }

    #[test]
    fn player_clamped_inside_perimeter() {
        let mut world = test_world();
        let entity = spawn_player(&mut world, Position::new(0.0, 0.9, 20.0));
        world.get_mut::<Position>(entity).unwrap().x = 49.5;
        advance(&mut world, 0.1);
        run_system(&mut world, player_movement_system);
        let (pos, _) = player(&mut world);
        assert_eq!(pos.x, 48.0);
    }
}
