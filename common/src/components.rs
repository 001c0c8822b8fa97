#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_time::{Timer, TimerMode};
use std::time::Duration;

// ============================================================================
// Shared Game Components
// ============================================================================

// World-space position in meters. For the player this is the body center; zombies,
// trees and power-ups are anchored at their base.
#[derive(Debug, Clone, Copy, Component, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    // Distance in the XZ plane only
    #[must_use]
    pub fn horizontal_distance(&self, other: &Self) -> f32 {
        (other.x - self.x).hypot(other.z - self.z)
    }

    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        Vec3::from(*self).distance(Vec3::from(*other))
    }
}

impl From<Position> for Vec3 {
    fn from(pos: Position) -> Self {
        Self::new(pos.x, pos.y, pos.z)
    }
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

#[derive(Debug, Clone, Copy, Component, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    #[must_use]
    pub const fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.current <= 0
    }

    // Health as a percentage of max, clamped at zero for the HUD
    #[must_use]
    pub fn percent(&self) -> f32 {
        (self.current as f32 / self.max as f32 * 100.0).max(0.0)
    }
}

// First-person player state
#[derive(Debug, Clone, Copy, Component, Default)]
pub struct Player {
    pub velocity_y: f32,
    pub on_ground: bool,
    pub yaw: f32,   // radians, rotation around Y
    pub pitch: f32, // radians, camera tilt
}

#[derive(Debug, Clone, Copy, Component, Default)]
pub struct Zombie {
    pub last_attack: Option<f32>, // elapsed seconds of the last attack
    pub yaw: f32,
}

// Present on a zombie only while it burns. Damage ticks are counted against the elapsed
// burn time, so the total does not depend on how frames slice it.
#[derive(Debug, Clone, Component)]
pub struct Burning {
    pub remaining: Timer,
    pub interval: f32,
    pub applied: u32,
}

impl Burning {
    #[must_use]
    pub fn new(duration: f32, tick_interval: f32) -> Self {
        Self {
            remaining: Timer::from_seconds(duration, TimerMode::Once),
            interval: tick_interval,
            applied: 0,
        }
    }

    // Ticks dealt over the whole burn
    #[must_use]
    pub fn total_ticks(&self) -> u32 {
        (self.remaining.duration().as_secs_f32() / self.interval).round() as u32
    }

    // Advance the burn and return how many ticks came due since the last call
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.remaining.tick(delta);
        let due = ((self.remaining.elapsed_secs() / self.interval + 1e-4).floor() as u32).min(self.total_ticks());
        let fresh = due.saturating_sub(self.applied);
        self.applied = due;
        fresh
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining.is_finished()
    }
}

#[derive(Debug, Clone, Copy, Component)]
pub struct Tree {
    pub hit_points: u32,
    pub destroyed: bool,
    pub velocity: Vec3,
    pub angular_velocity: f32,
    pub roll: f32, // accumulated fall rotation around Z
    pub yaw: f32,
}

impl Tree {
    #[must_use]
    pub const fn standing(hit_points: u32, yaw: f32) -> Self {
        Self {
            hit_points,
            destroyed: false,
            velocity: Vec3::ZERO,
            angular_velocity: 0.0,
            roll: 0.0,
            yaw,
        }
    }
}

#[derive(Debug, Clone, Copy, Component, Default)]
pub struct PowerUp {
    pub float_offset: f32,
    pub spin: f32,
}
