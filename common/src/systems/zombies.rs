#[allow(clippy::wildcard_imports)]
use bevy_ecs::{prelude::*, system::SystemParam};
use bevy_time::Time;
use rand::Rng;
use std::f32::consts::TAU;
use tracing::{debug, info};

use crate::{
    collision::slide_zombie_along_obstacles,
    components::{Burning, Health, Position, Zombie},
    config::GameConfig,
    constants::{ZOMBIE_INITIAL_DISTANCE_SPREAD, ZOMBIE_INITIAL_MIN_DISTANCE, ZOMBIE_RESPAWN_DISTANCE},
    events::{GameOver, PlayerDamaged, ZombieAttacked, ZombieHit, ZombieKilled},
    map::CampusLayout,
    markers::{PlayerMarker, ZombieMarker},
    resources::{CampusRng, GameState, ZombieSpawner},
};

// ============================================================================
// Damage Helpers
// ============================================================================

#[derive(SystemParam)]
pub struct ZombieOutcomes<'w> {
    hits: MessageWriter<'w, ZombieHit>,
    kills: MessageWriter<'w, ZombieKilled>,
}

impl ZombieOutcomes<'_> {
    // Apply damage and kill the zombie if its health runs out. Returns true on death.
    pub fn damage(
        &mut self,
        commands: &mut Commands,
        state: &mut GameState,
        entity: Entity,
        pos: &Position,
        health: &mut Health,
        amount: i32,
    ) -> bool {
        // Already killed earlier this frame, waiting for the despawn to apply
        if health.is_dead() {
            return false;
        }
        health.current -= amount;
        self.hits.write(ZombieHit { entity, damage: amount });
        if health.is_dead() {
            self.kill(commands, state, entity, pos, health);
            return true;
        }
        false
    }

    // Remove the zombie outright (also drops any Burning state) and score it.
    pub fn kill(&mut self, commands: &mut Commands, state: &mut GameState, entity: Entity, pos: &Position, health: &mut Health) {
        health.current = health.current.min(0);
        commands.entity(entity).despawn();
        state.score += 1;
        self.kills.write(ZombieKilled { entity, position: *pos });
    }
}

#[derive(SystemParam)]
pub struct PlayerOutcomes<'w> {
    damaged: MessageWriter<'w, PlayerDamaged>,
    game_over: MessageWriter<'w, GameOver>,
}

impl PlayerOutcomes<'_> {
    pub fn damage(&mut self, state: &mut GameState, health: &mut Health, amount: i32) {
        if state.is_game_over {
            return;
        }
        health.current -= amount;
        self.damaged.write(PlayerDamaged {
            amount,
            remaining: health.current,
        });
        if health.is_dead() {
            state.is_game_over = true;
            self.game_over.write(GameOver { score: state.score });
            info!("game over: {} zombies killed", state.score);
        }
    }
}

// ============================================================================
// Spawning
// ============================================================================

#[must_use]
pub fn zombie_bundle(config: &GameConfig, x: f32, z: f32) -> impl Bundle {
    (
        ZombieMarker,
        Zombie::default(),
        Health::full(config.zombie.health),
        Position::new(x, 0.0, z),
    )
}

// Initial wave evenly spread by angle at random distances
pub fn initial_wave_positions(count: usize, rng: &mut impl Rng) -> Vec<(f32, f32)> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let distance = rng.random::<f32>().mul_add(ZOMBIE_INITIAL_DISTANCE_SPREAD, ZOMBIE_INITIAL_MIN_DISTANCE);
            (angle.cos() * distance, angle.sin() * distance)
        })
        .collect()
}

pub fn respawn_position(rng: &mut impl Rng) -> (f32, f32) {
    let angle = rng.random_range(0.0..TAU);
    (angle.cos() * ZOMBIE_RESPAWN_DISTANCE, angle.sin() * ZOMBIE_RESPAWN_DISTANCE)
}

pub fn zombie_spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    state: Res<GameState>,
    mut spawner: ResMut<ZombieSpawner>,
    mut rng: ResMut<CampusRng>,
    zombies: Query<(), With<ZombieMarker>>,
) {
    if !spawner.initial_wave_spawned {
        spawner.initial_wave_spawned = true;
        for (x, z) in initial_wave_positions(config.zombie.initial_count, &mut rng.0) {
            commands.spawn(zombie_bundle(&config, x, z));
        }
        info!("spawned initial wave of {} zombies", config.zombie.initial_count);
        return;
    }

    spawner.timer.tick(time.delta());
    if !spawner.timer.just_finished() || state.is_game_over {
        return;
    }
    if zombies.iter().count() >= config.zombie.max_count {
        return;
    }

    let (x, z) = respawn_position(&mut rng.0);
    commands.spawn(zombie_bundle(&config, x, z));
    debug!("zombie spawned at ({x:.1}, {z:.1})");
}

// ============================================================================
// Burning
// ============================================================================

pub fn zombie_burning_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut state: ResMut<GameState>,
    mut outcomes: ZombieOutcomes,
    mut zombies: Query<(Entity, &Position, &mut Health, &mut Burning), With<ZombieMarker>>,
) {
    for (entity, pos, mut health, mut burning) in &mut zombies {
        let ticks = burning.advance(time.delta());
        let mut died = false;
        for _ in 0..ticks {
            if outcomes.damage(&mut commands, &mut state, entity, pos, &mut health, config.burn.tick_damage) {
                died = true;
                break;
            }
        }

        if !died && burning.is_finished() {
            commands.entity(entity).remove::<Burning>();
            debug!("zombie {entity} stopped burning");
        }
    }
}

// ============================================================================
// AI
// ============================================================================

pub fn zombie_ai_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    layout: Res<CampusLayout>,
    mut state: ResMut<GameState>,
    mut attacks: MessageWriter<ZombieAttacked>,
    mut player_outcomes: PlayerOutcomes,
    mut players: Query<(&Position, &mut Health), (With<PlayerMarker>, Without<ZombieMarker>)>,
    mut zombies: Query<(Entity, &mut Position, &mut Zombie), (With<ZombieMarker>, Without<PlayerMarker>)>,
) {
    let Ok((player_pos, mut player_health)) = players.single_mut() else {
        return;
    };
    let player_pos = *player_pos;
    let now = time.elapsed_secs();
    let step = config.zombie.speed * time.delta_secs();

    for (entity, mut pos, mut zombie) in &mut zombies {
        let dx = player_pos.x - pos.x;
        let dz = player_pos.z - pos.z;
        let distance = dx.hypot(dz);

        if distance < config.zombie.attack_range {
            let ready = zombie
                .last_attack
                .is_none_or(|last| now - last > config.zombie.attack_cooldown);
            if ready {
                zombie.last_attack = Some(now);
                attacks.write(ZombieAttacked { entity });
                player_outcomes.damage(&mut state, &mut player_health, config.zombie.damage);
            }
        } else {
            *pos = slide_zombie_along_obstacles(
                &pos,
                dx / distance * step,
                dz / distance * step,
                &layout.collision_boxes,
                config.zombie.height,
            );
        }

        zombie.yaw = dx.atan2(dz);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{events::ZombieIgnited, systems::test_support::*};
    use rand::{SeedableRng, rngs::StdRng};
    use std::time::Duration;

    fn spawn_zombie(world: &mut World, x: f32, z: f32) -> Entity {
        let config = world.resource::<GameConfig>().clone();
        world.spawn(zombie_bundle(&config, x, z)).id()
    }

    #[test]
    fn initial_wave_spawns_on_first_run() {
        let mut world = test_world();
        run_system(&mut world, zombie_spawn_system);
        let count = world.query::<&ZombieMarker>().iter(&world).count();
        assert_eq!(count, 10);

        for pos in world.query::<(&Position, &ZombieMarker)>().iter(&world).map(|(p, _)| *p) {
            let d = pos.x.hypot(pos.z);
            assert!((20.0..=40.0).contains(&d), "distance {d}");
        }
    }

    #[test]
    fn respawn_waits_for_interval_and_respects_cap() {
        let mut world = test_world();
        run_system(&mut world, zombie_spawn_system);

        advance(&mut world, 4.9);
        run_system(&mut world, zombie_spawn_system);
        assert_eq!(world.query::<&ZombieMarker>().iter(&world).count(), 10);

        advance(&mut world, 0.2);
        run_system(&mut world, zombie_spawn_system);
        assert_eq!(world.query::<&ZombieMarker>().iter(&world).count(), 11);

        for _ in 0..10 {
            advance(&mut world, 5.0);
            run_system(&mut world, zombie_spawn_system);
        }
        assert_eq!(world.query::<&ZombieMarker>().iter(&world).count(), 15);
    }

    #[test]
    fn respawned_zombies_appear_at_distance_forty() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let (x, z) = respawn_position(&mut rng);
            assert!((x.hypot(z) - 40.0).abs() < 1e-3);
        }
    }

    #[test]
    fn zombie_walks_toward_player_and_faces_it() {
        let mut world = test_world();
        spawn_player(&mut world, Position::new(0.0, 0.9, 20.0));
        let zombie = spawn_zombie(&mut world, 10.0, 20.0);
        advance(&mut world, 1.0);
        run_system(&mut world, zombie_ai_system);

        let pos = *world.get::<Position>(zombie).unwrap();
        assert!((pos.x - 9.7).abs() < 1e-4);
        assert!((pos.z - 20.0).abs() < 1e-4);
        let yaw = world.get::<Zombie>(zombie).unwrap().yaw;
        assert!((yaw - -std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn zombie_attacks_within_range_with_cooldown() {
        let mut world = test_world();
        let player = spawn_player(&mut world, Position::new(0.0, 0.9, 20.0));
        spawn_zombie(&mut world, 1.0, 20.0);

        advance(&mut world, 0.1);
        run_system(&mut world, zombie_ai_system);
        assert_eq!(world.get::<Health>(player).unwrap().current, 90);
        assert_eq!(drain::<ZombieAttacked>(&mut world).len(), 1);

        // Still cooling down
        advance(&mut world, 0.5);
        run_system(&mut world, zombie_ai_system);
        assert_eq!(world.get::<Health>(player).unwrap().current, 90);

        advance(&mut world, 0.6);
        run_system(&mut world, zombie_ai_system);
        assert_eq!(world.get::<Health>(player).unwrap().current, 80);
        assert_eq!(drain::<PlayerDamaged>(&mut world).len(), 2);
    }

    #[test]
    fn player_death_ends_the_game_once() {
        let mut world = test_world();
        let player = spawn_player(&mut world, Position::new(0.0, 0.9, 20.0));
        world.get_mut::<Health>(player).unwrap().current = 10;
        spawn_zombie(&mut world, 1.0, 20.0);
        spawn_zombie(&mut world, -1.0, 20.0);

        advance(&mut world, 0.1);
        run_system(&mut world, zombie_ai_system);

        assert!(world.resource::<GameState>().is_game_over);
        assert_eq!(drain::<GameOver>(&mut world).len(), 1);
        assert_eq!(world.get::<Health>(player).unwrap().current, 0);
    }

    fn burn_damage(steps: usize, dt: f32) -> (i32, usize, bool) {
        let mut world = test_world();
        let zombie = spawn_zombie(&mut world, 30.0, 0.0);
        let burn = world.resource::<GameConfig>().burn.clone();
        world
            .entity_mut(zombie)
            .insert(Burning::new(burn.duration, burn.tick_interval));

        for _ in 0..steps {
            advance(&mut world, dt);
            run_system(&mut world, zombie_burning_system);
        }

        let damage = 100 - world.get::<Health>(zombie).unwrap().current;
        let still_burning = world.get::<Burning>(zombie).is_some();
        (damage, drain::<ZombieHit>(&mut world).len(), still_burning)
    }

    #[test]
    fn burning_deals_fifty_damage_at_any_frame_rate() {
        for fps in [4_usize, 10, 20, 30, 60, 100, 144] {
            let (damage, hits, still_burning) = burn_damage(fps * 4, 1.0 / fps as f32);
            assert_eq!(damage, 50, "fps={fps}");
            assert_eq!(hits, 10, "fps={fps}");
            assert!(!still_burning, "fps={fps}");
        }
    }

    #[test]
    fn one_long_frame_never_overpays_the_burn() {
        let (damage, hits, still_burning) = burn_damage(1, 4.0);
        assert_eq!(damage, 50);
        assert_eq!(hits, 10);
        assert!(!still_burning);
    }

    #[test]
    fn burn_ticks_are_counted_from_elapsed_time() {
        let mut burning = Burning::new(3.0, 0.3);
        assert_eq!(burning.total_ticks(), 10);
        assert_eq!(burning.advance(Duration::from_secs_f32(0.29)), 0);
        assert_eq!(burning.advance(Duration::from_secs_f32(0.02)), 1);
        assert_eq!(burning.advance(Duration::from_secs_f32(1.0)), 3);
        assert_eq!(burning.advance(Duration::from_secs_f32(10.0)), 6);
        assert_eq!(burning.advance(Duration::from_secs_f32(1.0)), 0);
        assert!(burning.is_finished());
    }

    #[test]
    fn burning_can_kill_and_scores_once() {
        let mut world = test_world();
        let zombie = spawn_zombie(&mut world, 30.0, 0.0);
        world.get_mut::<Health>(zombie).unwrap().current = 5;
        world.entity_mut(zombie).insert(Burning::new(3.0, 0.3));

        advance(&mut world, 0.31);
        run_system(&mut world, zombie_burning_system);

        assert!(world.get_entity(zombie).is_err());
        assert_eq!(world.resource::<GameState>().score, 1);
        assert_eq!(drain::<ZombieKilled>(&mut world).len(), 1);
        assert!(drain::<ZombieIgnited>(&mut world).is_empty());
    }
}
