use bevy::{asset::LoadState, prelude::*};

use crate::{
    constants::*,
    resources::{SoundAssets, TrackedAssets, ZombieModel},
};

// ============================================================================
// Asset Loading
// ============================================================================

// Queue the zombie model and every sound; loading continues in the background
pub fn load_assets_system(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut tracked = TrackedAssets::default();
    let mut load_sound = |path: &'static str| {
        let handle = asset_server.load::<AudioSource>(path);
        tracked.track(path, &handle);
        handle
    };

    let sounds = SoundAssets {
        rifle: load_sound(SOUND_RIFLE),
        pistol: load_sound(SOUND_PISTOL),
        flamethrower: load_sound(SOUND_FLAMETHROWER),
        weapon_switch: load_sound(SOUND_WEAPON_SWITCH),
        zombie_hit: load_sound(SOUND_ZOMBIE_HIT),
        zombie_death: load_sound(SOUND_ZOMBIE_DEATH),
        player_hurt: load_sound(SOUND_PLAYER_HURT),
        tree_hit: load_sound(SOUND_TREE_HIT),
        powerup: load_sound(SOUND_POWERUP),
        game_over: load_sound(SOUND_GAME_OVER),
    };

    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(ZOMBIE_MODEL));
    tracked.track(ZOMBIE_MODEL, &scene);

    info!("loading {} assets", tracked.pending.len());
    commands.insert_resource(sounds);
    commands.insert_resource(ZombieModel { scene, failed: false });
    commands.insert_resource(tracked);
}

// Log each asset once it settles. A failed zombie model switches zombies to the fallback mesh.
pub fn track_asset_loads_system(
    asset_server: Res<AssetServer>,
    mut tracked: ResMut<TrackedAssets>,
    mut model: ResMut<ZombieModel>,
) {
    if tracked.pending.is_empty() {
        return;
    }

    tracked.pending.retain(|asset| match asset_server.get_load_state(asset.handle.id()) {
        Some(LoadState::Loaded) => {
            info!("loaded {}", asset.path);
            false
        }
        Some(LoadState::Failed(err)) => {
            error!("failed to load {}: {err}", asset.path);
            if asset.path == ZOMBIE_MODEL {
                model.failed = true;
            }
            false
        }
        _ => true,
    });

    if tracked.pending.is_empty() {
        info!("all assets settled");
    }
}
