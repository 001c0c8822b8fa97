use bevy::prelude::*;
use common::weapons::Weapon;

// ============================================================================
// Weapon Components
// ============================================================================

// One of the three weapon models parented to the camera
#[derive(Component)]
pub struct WeaponModel {
    pub weapon: Weapon,
    pub rest: Vec3,
}

// Seconds since the last shot, present while the weapon is recoiling
#[derive(Component, Default)]
pub struct Recoil {
    pub elapsed: f32,
}

// Flame particle drifting forward from the flamethrower nozzle, in weapon space
#[derive(Component)]
pub struct FlameParticle {
    pub velocity: Vec3,
}

// ============================================================================
// Zombie Components
// ============================================================================

// Per-zombie material so hit flashes and fire glow tint one body only
#[derive(Component)]
pub struct ZombieVisual {
    pub material: Handle<StandardMaterial>,
}

// Red flash after being hit or while attacking
#[derive(Component)]
pub struct ZombieFlash {
    pub timer: Timer,
}

impl ZombieFlash {
    #[must_use]
    pub fn new(secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(secs, TimerMode::Once),
        }
    }
}

// Present on a zombie while its fire particles are attached
#[derive(Component)]
pub struct FireEmitter;

// Fire particle rising around a burning zombie
#[derive(Component)]
pub struct FireParticle {
    pub velocity: Vec3,
    pub alpha: f32,
    pub material: Handle<StandardMaterial>,
}

// ============================================================================
// Effect Components
// ============================================================================

// Despawns the entity (and its children) when the timer finishes
#[derive(Component)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    #[must_use]
    pub fn from_seconds(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }
}

// Material alpha fades linearly from `start` to zero over the entity's lifetime
#[derive(Component)]
pub struct FadeOut {
    pub material: Handle<StandardMaterial>,
    pub start: f32,
}
