use anyhow::{Context, Result, ensure};
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Game Configuration
// ============================================================================

// All gameplay tunables. Speeds are per second; the defaults reproduce the feel of a
// 60 FPS per-frame loop.
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub zombie: ZombieConfig,
    pub weapon: WeaponConfig,
    pub burn: BurnConfig,
    pub powerup: PowerUpConfig,
    pub tree: TreeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub height: f32,
    pub speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    pub health: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            height: 1.8,
            speed: 6.0,
            jump_speed: 18.0,
            gravity: 72.0,
            health: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZombieConfig {
    pub speed: f32,
    pub damage: i32,
    pub health: i32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
    pub height: f32,
    pub initial_count: usize,
    pub max_count: usize,
    pub spawn_interval: f32,
}

impl Default for ZombieConfig {
    fn default() -> Self {
        Self {
            speed: 0.3,
            damage: 10,
            health: 100,
            attack_range: 2.0,
            attack_cooldown: 1.0,
            height: 1.5,
            initial_count: 10,
            max_count: 15,
            spawn_interval: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeaponConfig {
    pub damage: i32,
    pub range: f32,
    pub cooldown: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            damage: 25,
            range: 50.0,
            cooldown: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BurnConfig {
    pub duration: f32,
    pub tick_interval: f32,
    pub tick_damage: i32,
}

impl Default for BurnConfig {
    fn default() -> Self {
        Self {
            duration: 3.0,
            tick_interval: 0.3,
            tick_damage: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PowerUpConfig {
    pub count: usize,
    pub pickup_radius: f32,
    pub kill_radius: f32,
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self {
            count: 10,
            pickup_radius: 2.0,
            kill_radius: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    pub count: usize,
    pub ring_radius: f32,
    pub hit_points: u32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            count: 8,
            ring_radius: 35.0,
            hit_points: 3,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("invalid config in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.player.height > 0.0, "player.height must be positive");
        ensure!(self.player.speed > 0.0, "player.speed must be positive");
        ensure!(self.player.gravity > 0.0, "player.gravity must be positive");
        ensure!(self.player.health > 0, "player.health must be positive");
        ensure!(self.zombie.speed > 0.0, "zombie.speed must be positive");
        ensure!(self.zombie.health > 0, "zombie.health must be positive");
        ensure!(self.zombie.attack_range > 0.0, "zombie.attack_range must be positive");
        ensure!(self.zombie.attack_cooldown > 0.0, "zombie.attack_cooldown must be positive");
        ensure!(self.zombie.spawn_interval > 0.0, "zombie.spawn_interval must be positive");
        ensure!(self.weapon.range > 0.0, "weapon.range must be positive");
        ensure!(self.weapon.cooldown > 0.0, "weapon.cooldown must be positive");
        ensure!(self.burn.tick_interval > 0.0, "burn.tick_interval must be positive");
        ensure!(self.burn.duration > 0.0, "burn.duration must be positive");
        ensure!(self.powerup.pickup_radius > 0.0, "powerup.pickup_radius must be positive");
        ensure!(self.powerup.kill_radius > 0.0, "powerup.kill_radius must be positive");
        Ok(())
    }
}
