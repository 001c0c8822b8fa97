pub mod player;
pub mod powerups;
pub mod shooting;
pub mod trees;
pub mod zombies;

use bevy_app::{App, Plugin, Startup, Update};
#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use tracing::info;

use crate::{
    components::{Health, Player, Position},
    config::GameConfig,
    events::*,
    map::{CampusLayout, campus_layout},
    markers::PlayerMarker,
    resources::{CampusRng, GameState, PlayerInput, ZombieSpawner},
};
use player::{player_look_system, player_movement_system};
use powerups::{powerup_collect_system, powerup_float_system, spawn_powerups};
use shooting::{shooting_system, weapon_switch_system};
use trees::{spawn_trees, tree_fall_system};
use zombies::{zombie_ai_system, zombie_burning_system, zombie_spawn_system};

// ============================================================================
// Gameplay Plugin
// ============================================================================

// Ordering anchor for client systems that feed input to, or present the results of, the simulation
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameplaySet;

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        // The app may have inserted a loaded config and a seeded RNG already
        let config = app.world().get_resource::<GameConfig>().cloned().unwrap_or_default();
        if !app.world().contains_resource::<CampusRng>() {
            app.insert_resource(CampusRng::from_seed(None));
        }

        app.insert_resource(campus_layout(&config))
            .insert_resource(GameState::new(&config))
            .insert_resource(ZombieSpawner::new(&config))
            .insert_resource(config)
            .init_resource::<PlayerInput>()
            .add_message::<ShotFired>()
            .add_message::<WeaponSwitched>()
            .add_message::<ZombieHit>()
            .add_message::<ZombieIgnited>()
            .add_message::<ZombieKilled>()
            .add_message::<ZombieAttacked>()
            .add_message::<TreeHit>()
            .add_message::<TreeFelled>()
            .add_message::<PlayerDamaged>()
            .add_message::<GameOver>()
            .add_message::<PowerUpCollected>()
            .add_systems(Startup, spawn_campus_system)
            .add_systems(
                Update,
                (
                    (
                        player_look_system,
                        weapon_switch_system,
                        shooting_system,
                        player_movement_system,
                    )
                        .chain()
                        .run_if(game_is_running),
                    zombie_spawn_system,
                    (
                        zombie_burning_system,
                        zombie_ai_system,
                        tree_fall_system,
                        powerup_float_system,
                        powerup_collect_system,
                    )
                        .chain()
                        .run_if(game_is_running),
                    clear_input_system,
                )
                    .chain()
                    .in_set(GameplaySet),
            );
    }
}

#[must_use]
pub fn game_is_running(state: Res<GameState>) -> bool {
    !state.is_game_over
}

// Spawn the player and the campus decoration (trees, power-ups)
pub fn spawn_campus_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    layout: Res<CampusLayout>,
    mut rng: ResMut<CampusRng>,
) {
    commands.spawn((
        PlayerMarker,
        Player {
            on_ground: true,
            ..Default::default()
        },
        Health::full(config.player.health),
        layout.player_spawn,
    ));

    spawn_trees(&mut commands, &layout, &config, &mut rng.0);
    spawn_powerups(&mut commands, &config, &mut rng.0);

    info!(
        "campus ready: {} collision boxes, {} trees, {} power-ups",
        layout.collision_boxes.len(),
        layout.tree_positions.len(),
        config.powerup.count
    );
}

// Edge-triggered inputs last a single frame
pub fn clear_input_system(mut input: ResMut<PlayerInput>) {
    input.shoot = false;
    input.switch_weapon = false;
    input.look_delta = bevy_math::Vec2::ZERO;
}

// ============================================================================
// Test Helpers
// ============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use bevy_ecs::{
        message::Messages,
        prelude::*,
        schedule::IntoScheduleConfigs,
        system::ScheduleSystem,
    };
    use bevy_time::Time;
    use rand::{SeedableRng, rngs::StdRng};
    use std::time::Duration;

    use crate::{
        components::{Health, Player, Position},
        config::GameConfig,
        events::*,
        map::campus_layout,
        markers::PlayerMarker,
        resources::{CampusRng, GameState, PlayerInput, ZombieSpawner},
    };

    // World with every gameplay resource and message buffer registered
    pub fn test_world() -> World {
        let config = GameConfig::default();
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(campus_layout(&config));
        world.insert_resource(GameState::new(&config));
        world.insert_resource(ZombieSpawner::new(&config));
        world.insert_resource(CampusRng(StdRng::seed_from_u64(7)));
        world.insert_resource(PlayerInput::default());
        world.insert_resource(config);
        world.init_resource::<Messages<ShotFired>>();
        world.init_resource::<Messages<WeaponSwitched>>();
        world.init_resource::<Messages<ZombieHit>>();
        world.init_resource::<Messages<ZombieIgnited>>();
        world.init_resource::<Messages<ZombieKilled>>();
        world.init_resource::<Messages<ZombieAttacked>>();
        world.init_resource::<Messages<TreeHit>>();
        world.init_resource::<Messages<TreeFelled>>();
        world.init_resource::<Messages<PlayerDamaged>>();
        world.init_resource::<Messages<GameOver>>();
        world.init_resource::<Messages<PowerUpCollected>>();
        world
    }

    pub fn spawn_player(world: &mut World, pos: Position) -> Entity {
        let health = world.resource::<GameConfig>().player.health;
        world
            .spawn((
                PlayerMarker,
                Player {
                    on_ground: true,
                    ..Default::default()
                },
                Health::full(health),
                pos,
            ))
            .id()
    }

    pub fn advance(world: &mut World, seconds: f32) {
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(seconds));
    }

    pub fn drain<M: Message>(world: &mut World) -> Vec<M> {
        world.resource_mut::<Messages<M>>().drain().collect()
    }

    pub fn run_system<M>(world: &mut World, system: impl IntoScheduleConfigs<ScheduleSystem, M>) {
        let mut schedule = Schedule::default();
        schedule.add_systems(system);
        schedule.run(world);
    }
}
