#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use bevy_time::{Timer, TimerMode};
use rand::{SeedableRng, rngs::StdRng};

use crate::{config::GameConfig, weapons::Weapon};

// ============================================================================
// Game State
// ============================================================================

#[derive(Resource, Debug)]
pub struct GameState {
    pub score: u32,
    pub is_game_over: bool,
    pub weapon: Weapon,
    pub shot_cooldown: Timer,
}

impl GameState {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut shot_cooldown = Timer::from_seconds(config.weapon.cooldown, TimerMode::Once);
        // Ready to fire from the first frame
        shot_cooldown.tick(shot_cooldown.duration());
        Self {
            score: 0,
            is_game_over: false,
            weapon: Weapon::default(),
            shot_cooldown,
        }
    }

    #[must_use]
    pub fn can_shoot(&self) -> bool {
        !self.is_game_over && self.shot_cooldown.is_finished()
    }
}

// ============================================================================
// Player Input
// ============================================================================

// Filled by the presentation layer each frame and consumed by the simulation.
// `shoot` and `switch_weapon` are edges: they are cleared at the end of the frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct PlayerInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
    pub switch_weapon: bool,
    pub look_delta: Vec2, // mouse movement in pixels
    pub pointer_locked: bool,
}

// ============================================================================
// Spawning
// ============================================================================

#[derive(Resource, Debug)]
pub struct ZombieSpawner {
    pub timer: Timer,
    pub initial_wave_spawned: bool,
}

impl ZombieSpawner {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            timer: Timer::from_seconds(config.zombie.spawn_interval, TimerMode::Repeating),
            initial_wave_spawned: false,
        }
    }
}

// Source of all gameplay randomness, seedable for reproducible runs and tests
#[derive(Resource)]
pub struct CampusRng(pub StdRng);

impl CampusRng {
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}
