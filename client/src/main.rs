use anyhow::{Context, Result};
#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, WindowPosition};
use clap::Parser;
use std::path::PathBuf;

use campus_zombies::{
    constants::{DEFAULT_LOG_FILTER, WINDOW_TITLE},
    resources::DamageFlash,
    spawning::{
        apply_zombie_skin_system, attach_powerup_visuals_system, attach_tree_visuals_system,
        attach_zombie_visuals_system, fit_zombie_model_system, setup_campus_materials_system,
        spawn_camera_system, spawn_campus_scene_system, zombie_model_fallback_system,
    },
    systems::{
        assets::{load_assets_system, track_asset_loads_system},
        audio::play_sounds_system,
        effects::{damage_overlay_system, fade_out_system, lifetime_system, powerup_explosion_system},
        input::{cursor_lock_system, keyboard_input_system, mouse_look_system},
        sync::{sync_camera_system, sync_powerups_system, sync_trees_system, sync_zombies_system},
        ui::{setup_hud_system, ui_game_over_system, ui_health_system, ui_score_system, ui_weapon_system},
        weapons::{
            flame_particle_system, muzzle_effect_system, recoil_animate_system, recoil_start_system,
            weapon_visibility_system,
        },
        zombies::{
            extinguish_zombie_system, fire_particle_system, ignite_zombie_system, zombie_flash_system,
            zombie_tint_system,
        },
    },
};
use common::{GameplayPlugin, GameplaySet, config::GameConfig, resources::CampusRng};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "First-person zombie shooter on a small campus", long_about = None)]
struct Args {
    // JSON file with gameplay tuning; defaults are used when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    // Window X position
    #[arg(long)]
    window_x: Option<i32>,

    // Window Y position
    #[arg(long)]
    window_y: Option<i32>,

    // Window width
    #[arg(long, default_value = "1280")]
    window_width: u32,

    // Window height
    #[arg(long, default_value = "720")]
    window_height: u32,

    // Log filter directives, e.g. "wgpu=error,common=debug"
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,

    // Seed for the campus RNG (tree yaw, power-up placement, zombie spawns)
    #[arg(long)]
    seed: Option<u64>,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            GameConfig::load(path).with_context(|| format!("failed to load config from {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    let window_position = if let (Some(x), Some(y)) = (args.window_x, args.window_y) {
        WindowPosition::At(IVec2::new(x, y))
    } else {
        WindowPosition::Automatic
    };

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    resolution: (args.window_width, args.window_height).into(),
                    position: window_position,
                    ..default()
                }),
                // The pointer is captured by the first click
                primary_cursor_options: Some(CursorOptions {
                    visible: true,
                    grab_mode: CursorGrabMode::None,
                    hit_test: true,
                }),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                filter: args.log_filter.clone(),
                ..default()
            }),
    )
    // Config and RNG go in before the gameplay plugin so it picks them up
    .insert_resource(config)
    .insert_resource(CampusRng::from_seed(args.seed))
    .add_plugins(GameplayPlugin)
    .init_resource::<DamageFlash>()
    .add_systems(
        Startup,
        (
            setup_campus_materials_system,
            spawn_campus_scene_system,
            spawn_camera_system,
            setup_hud_system,
            load_assets_system,
        )
            .chain(),
    )
    .add_systems(
        Update,
        (cursor_lock_system, keyboard_input_system, mouse_look_system)
            .chain()
            .before(GameplaySet),
    )
    .add_systems(
        Update,
        (
            // Visuals for entities the simulation spawned
            (
                attach_zombie_visuals_system,
                attach_tree_visuals_system,
                attach_powerup_visuals_system,
                zombie_model_fallback_system,
                apply_zombie_skin_system,
                fit_zombie_model_system,
            ),
            // Simulation state onto transforms
            (
                sync_camera_system,
                sync_zombies_system,
                sync_trees_system,
                sync_powerups_system,
            ),
            // Weapon feedback
            (
                recoil_start_system,
                recoil_animate_system,
                weapon_visibility_system,
                muzzle_effect_system,
                flame_particle_system,
            )
                .chain(),
            // Zombie feedback
            (
                zombie_flash_system,
                zombie_tint_system,
                ignite_zombie_system,
                fire_particle_system,
                extinguish_zombie_system,
            )
                .chain(),
            // Screen effects, sounds and HUD
            (
                damage_overlay_system,
                powerup_explosion_system,
                lifetime_system,
                fade_out_system,
                play_sounds_system,
                track_asset_loads_system,
            ),
            (
                ui_score_system,
                ui_health_system,
                ui_weapon_system,
                ui_game_over_system,
            ),
        )
            .chain()
            .after(GameplaySet),
    )
    .run();

    Ok(())
}
