use bevy::{
    input::mouse::MouseMotion,
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};

use common::resources::{GameState, PlayerInput};

// ============================================================================
// Input Systems
// ============================================================================

// Arrows move, Space jumps, A fires (held for automatic fire), Z cycles weapons
pub fn keyboard_input_system(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    input.forward = keyboard.pressed(KeyCode::ArrowUp);
    input.back = keyboard.pressed(KeyCode::ArrowDown);
    input.left = keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::ArrowRight);
    input.jump = keyboard.pressed(KeyCode::Space);
    input.shoot |= keyboard.pressed(KeyCode::KeyA);
    input.switch_weapon |= keyboard.just_pressed(KeyCode::KeyZ);
}

// Escape releases the pointer, a left click captures it again unless the game is over
pub fn cursor_lock_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    state: Res<GameState>,
    mut cursor_options: Single<&mut CursorOptions>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        release_cursor(&mut cursor_options);
        return;
    }

    if mouse.just_pressed(MouseButton::Left) && cursor_options.grab_mode == CursorGrabMode::None && !state.is_game_over {
        cursor_options.visible = false;
        cursor_options.grab_mode = CursorGrabMode::Locked;
    }
}

pub fn release_cursor(cursor_options: &mut CursorOptions) {
    cursor_options.visible = true;
    cursor_options.grab_mode = CursorGrabMode::None;
}

// Mouse motion only turns the view while the pointer is captured
pub fn mouse_look_system(
    mut mouse_motion: MessageReader<MouseMotion>,
    cursor_options: Single<&CursorOptions>,
    mut input: ResMut<PlayerInput>,
) {
    input.pointer_locked = cursor_options.grab_mode != CursorGrabMode::None;

    let delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if input.pointer_locked {
        input.look_delta += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    fn input_world(grab_mode: CursorGrabMode) -> World {
        let mut world = World::new();
        world.init_resource::<ButtonInput<KeyCode>>();
        world.init_resource::<ButtonInput<MouseButton>>();
        world.init_resource::<PlayerInput>();
        world.init_resource::<Messages<MouseMotion>>();
        world.insert_resource(GameState::new(&common::config::GameConfig::default()));
        world.spawn(CursorOptions {
            grab_mode,
            visible: grab_mode == CursorGrabMode::None,
            ..default()
        });
        world
    }

    fn run<M>(world: &mut World, system: impl IntoScheduleConfigs<bevy::ecs::system::ScheduleSystem, M>) {
        let mut schedule = Schedule::default();
        schedule.add_systems(system);
        schedule.run(world);
    }

    fn grab_mode(world: &mut World) -> CursorGrabMode {
        world.query::<&CursorOptions>().single(world).map_or(CursorGrabMode::None, |c| c.grab_mode)
    }

    #[test]
    fn held_keys_map_to_movement_and_fire() {
        let mut world = input_world(CursorGrabMode::Locked);
        {
            let mut keyboard = world.resource_mut::<ButtonInput<KeyCode>>();
            keyboard.press(KeyCode::ArrowUp);
            keyboard.press(KeyCode::ArrowLeft);
            keyboard.press(KeyCode::KeyA);
            keyboard.press(KeyCode::KeyZ);
        }
        run(&mut world, keyboard_input_system);

        let input = world.resource::<PlayerInput>();
        assert!(input.forward && input.left);
        assert!(!input.back && !input.right && !input.jump);
        assert!(input.shoot);
        assert!(input.switch_weapon);
    }

    #[test]
    fn click_locks_and_escape_releases() {
        let mut world = input_world(CursorGrabMode::None);
        world.resource_mut::<ButtonInput<MouseButton>>().press(MouseButton::Left);
        run(&mut world, cursor_lock_system);
        assert_eq!(grab_mode(&mut world), CursorGrabMode::Locked);

        world.resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::Escape);
        run(&mut world, cursor_lock_system);
        assert_eq!(grab_mode(&mut world), CursorGrabMode::None);
    }

    #[test]
    fn click_does_not_lock_after_game_over() {
        let mut world = input_world(CursorGrabMode::None);
        world.resource_mut::<GameState>().is_game_over = true;
        world.resource_mut::<ButtonInput<MouseButton>>().press(MouseButton::Left);
        run(&mut world, cursor_lock_system);
        assert_eq!(grab_mode(&mut world), CursorGrabMode::None);
    }

    #[test]
    fn mouse_motion_accumulates_only_while_locked() {
        let mut world = input_world(CursorGrabMode::Locked);
        {
            let mut motion = world.resource_mut::<Messages<MouseMotion>>();
            motion.write(MouseMotion {
                delta: Vec2::new(3.0, -1.0),
            });
            motion.write(MouseMotion {
                delta: Vec2::new(2.0, 4.0),
            });
        }
        run(&mut world, mouse_look_system);
        let input = world.resource::<PlayerInput>();
        assert!(input.pointer_locked);
        assert_eq!(input.look_delta, Vec2::new(5.0, 3.0));

        let mut world = input_world(CursorGrabMode::None);
        world.resource_mut::<Messages<MouseMotion>>().write(MouseMotion {
            delta: Vec2::new(10.0, 10.0),
        });
        run(&mut world, mouse_look_system);
        let input = world.resource::<PlayerInput>();
        assert!(!input.pointer_locked);
        assert_eq!(input.look_delta, Vec2::ZERO);
    }
}
