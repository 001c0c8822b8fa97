#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_time::Time;
use rand::Rng;
use std::f32::consts::TAU;
use tracing::info;

use super::zombies::ZombieOutcomes;
use crate::{
    collision::within_radius,
    components::{Health, Position, PowerUp},
    config::GameConfig,
    constants::{
        POWERUP_BASE_HEIGHT, POWERUP_DISTANCE_SPREAD, POWERUP_FLOAT_AMPLITUDE, POWERUP_FLOAT_FREQUENCY,
        POWERUP_MIN_DISTANCE, POWERUP_SPIN_SPEED,
    },
    events::PowerUpCollected,
    markers::{PlayerMarker, PowerUpMarker, ZombieMarker},
    resources::GameState,
};

// Orbs scattered around the campus at random angles, each with its own float phase
pub fn spawn_powerups(commands: &mut Commands, config: &GameConfig, rng: &mut impl Rng) {
    for i in 0..config.powerup.count {
        let angle = rng.random_range(0.0..TAU);
        let distance = rng.random::<f32>().mul_add(POWERUP_DISTANCE_SPREAD, POWERUP_MIN_DISTANCE);
        commands.spawn((
            PowerUpMarker,
            PowerUp {
                float_offset: i as f32,
                spin: 0.0,
            },
            Position::new(angle.cos() * distance, POWERUP_BASE_HEIGHT, angle.sin() * distance),
        ));
    }
}

#[must_use]
pub fn float_height(elapsed: f32, offset: f32) -> f32 {
    POWERUP_FLOAT_AMPLITUDE.mul_add(elapsed.mul_add(POWERUP_FLOAT_FREQUENCY, offset).sin(), POWERUP_BASE_HEIGHT)
}

pub fn powerup_float_system(time: Res<Time>, mut orbs: Query<(&mut Position, &mut PowerUp), With<PowerUpMarker>>) {
    let elapsed = time.elapsed_secs();
    let delta = time.delta_secs();
    for (mut pos, mut orb) in &mut orbs {
        pos.y = float_height(elapsed, orb.float_offset);
        orb.spin = POWERUP_SPIN_SPEED.mul_add(delta, orb.spin) % TAU;
    }
}

// Touching an orb wipes out every zombie near the player
pub fn powerup_collect_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut state: ResMut<GameState>,
    mut collected: MessageWriter<PowerUpCollected>,
    mut outcomes: ZombieOutcomes,
    players: Query<&Position, (With<PlayerMarker>, Without<ZombieMarker>)>,
    orbs: Query<(Entity, &Position), (With<PowerUpMarker>, Without<PlayerMarker>, Without<ZombieMarker>)>,
    mut zombies: Query<(Entity, &Position, &mut Health), (With<ZombieMarker>, Without<PlayerMarker>)>,
) {
    let Ok(player_pos) = players.single() else {
        return;
    };

    for (orb, orb_pos) in &orbs {
        if !within_radius(player_pos, orb_pos, config.powerup.pickup_radius) {
            continue;
        }
        commands.entity(orb).despawn();

        let mut killed = 0;
        for (entity, pos, mut health) in &mut zombies {
            if health.is_dead() || !within_radius(player_pos, pos, config.powerup.kill_radius) {
                continue;
            }
            outcomes.kill(&mut commands, &mut state, entity, pos, &mut health);
            killed += 1;
        }

        collected.write(PowerUpCollected {
            position: *player_pos,
            killed,
        });
        info!("power-up collected: {killed} zombies destroyed");
    }
}
