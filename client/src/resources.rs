#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;

// ============================================================================
// Shared Render Assets
// ============================================================================

// Materials built once at startup from the procedural textures
#[derive(Resource, Clone)]
pub struct CampusMaterials {
    pub brick: Handle<StandardMaterial>,
    pub concrete: Handle<StandardMaterial>,
    pub asphalt: Handle<StandardMaterial>,
    pub bark: Handle<StandardMaterial>,
    pub foliage: Handle<StandardMaterial>,
    pub glass: Handle<StandardMaterial>,
    pub door: Handle<StandardMaterial>,
    pub handle: Handle<StandardMaterial>,
    pub powerup: Handle<StandardMaterial>,
    // Template cloned per zombie so flashes stay local to one body
    pub zombie_skin: StandardMaterial,
}

// Meshes reused by short-lived effect entities
#[derive(Resource, Clone)]
pub struct EffectMeshes {
    pub fire_particle: Handle<Mesh>,
    pub flame_particle: Handle<Mesh>,
    pub flame_cone: Handle<Mesh>,
    pub flame_glow: Handle<Mesh>,
    pub muzzle_flash: Handle<Mesh>,
    pub muzzle_flash_material: Handle<StandardMaterial>,
    pub powerup_orb: Handle<Mesh>,
    pub zombie_fallback: Handle<Mesh>,
}

// ============================================================================
// Loaded Assets
// ============================================================================

#[derive(Resource)]
pub struct ZombieModel {
    pub scene: Handle<Scene>,
    pub failed: bool,
}

#[derive(Resource)]
pub struct SoundAssets {
    pub rifle: Handle<AudioSource>,
    pub pistol: Handle<AudioSource>,
    pub flamethrower: Handle<AudioSource>,
    pub weapon_switch: Handle<AudioSource>,
    pub zombie_hit: Handle<AudioSource>,
    pub zombie_death: Handle<AudioSource>,
    pub player_hurt: Handle<AudioSource>,
    pub tree_hit: Handle<AudioSource>,
    pub powerup: Handle<AudioSource>,
    pub game_over: Handle<AudioSource>,
}

// Asset handles whose load outcome has not been logged yet
#[derive(Resource, Default)]
pub struct TrackedAssets {
    pub pending: Vec<TrackedAsset>,
}

pub struct TrackedAsset {
    pub path: &'static str,
    pub handle: UntypedHandle,
}

impl TrackedAssets {
    pub fn track<A: Asset>(&mut self, path: &'static str, handle: &Handle<A>) {
        self.pending.push(TrackedAsset {
            path,
            handle: handle.clone().untyped(),
        });
    }
}

// ============================================================================
// Screen Effects
// ============================================================================

// Darkens the screen briefly after the player takes damage
#[derive(Resource, Default)]
pub struct DamageFlash {
    pub timer: Option<Timer>,
}
