use bevy::prelude::*;

use super::{map::srgb, weapons::spawn_weapon_models};
use crate::{constants::*, markers::MainCameraMarker, systems::sync::camera_transform};
use common::{components::Player, config::GameConfig, map::CampusLayout, resources::GameState};

// First-person camera at standing eye height, fogged towards the sky colour
pub fn spawn_camera_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
    layout: Res<CampusLayout>,
    state: Res<GameState>,
) {
    let camera = commands
        .spawn((
            Camera3d::default(),
            Projection::from(PerspectiveProjection {
                fov: CAMERA_FOV_DEGREES.to_radians(),
                near: CAMERA_NEAR,
                ..default()
            }),
            DistanceFog {
                color: srgb(SKY_COLOR),
                falloff: FogFalloff::Linear {
                    start: FOG_START,
                    end: FOG_END,
                },
                ..default()
            },
            camera_transform(&layout.player_spawn, &Player::default(), config.player.height),
            MainCameraMarker,
            IsDefaultUiCamera,
        ))
        .id();

    spawn_weapon_models(&mut commands, &mut meshes, &mut materials, camera, state.weapon);
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::map::campus_layout;

    #[test]
    fn camera_starts_at_the_spawn_eye() {
        let config = GameConfig::default();
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world.insert_resource(campus_layout(&config));
        world.insert_resource(GameState::new(&config));
        world.insert_resource(config.clone());

        let mut schedule = Schedule::default();
        schedule.add_systems(spawn_camera_system);
        schedule.run(&mut world);

        let transform = *world
            .query_filtered::<&Transform, With<MainCameraMarker>>()
            .single(&world)
            .unwrap();
        let spawn = world.resource::<CampusLayout>().player_spawn;
        assert_eq!(
            transform,
            camera_transform(&spawn, &Player::default(), config.player.height)
        );
        assert!((transform.translation.y - (spawn.y + config.player.height / 2.0)).abs() < 1e-6);
    }
}
