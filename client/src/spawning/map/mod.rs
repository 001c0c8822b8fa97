mod buildings;
mod helpers;
mod walls;

pub use buildings::spawn_buildings;
pub use helpers::{repeat_sampler, srgb, tiled_cuboid};
pub use walls::{spawn_ground, spawn_perimeter_walls};

use bevy::prelude::*;

use crate::{
    constants::*,
    resources::{CampusMaterials, EffectMeshes},
    textures::{asphalt_canvas, bark_canvas, brick_canvas, concrete_canvas, zombie_skin_canvas},
};
use common::{config::GameConfig, resources::CampusRng};

// ============================================================================
// Material Setup
// ============================================================================

// Generate the procedural textures and the shared materials and meshes built on them
pub fn setup_campus_materials_system(
    mut commands: Commands,
    mut rng: ResMut<CampusRng>,
    mut images: ResMut<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let rng = &mut rng.0;
    let brick = images.add(brick_canvas(rng).into_image());
    let concrete = images.add(concrete_canvas(rng).into_image());
    let asphalt = images.add(asphalt_canvas(rng).into_image());
    let bark = images.add(bark_canvas(rng).into_image());
    let skin = images.add(zombie_skin_canvas(rng).into_image());

    let textured = |texture: Handle<Image>, roughness: f32, metallic: f32| StandardMaterial {
        base_color_texture: Some(texture),
        perceptual_roughness: roughness,
        metallic,
        ..default()
    };

    commands.insert_resource(CampusMaterials {
        brick: materials.add(textured(brick, 0.9, 0.1)),
        concrete: materials.add(textured(concrete, 0.8, 0.2)),
        asphalt: materials.add(textured(asphalt, 0.9, 0.1)),
        bark: materials.add(textured(bark, 0.95, 0.0)),
        foliage: materials.add(StandardMaterial {
            base_color: srgb(FOLIAGE_COLOR),
            perceptual_roughness: 0.9,
            ..default()
        }),
        glass: materials.add(StandardMaterial {
            base_color: srgb(WINDOW_COLOR),
            emissive: srgb(WINDOW_EMISSIVE).to_linear() * 0.3,
            perceptual_roughness: 0.1,
            metallic: 0.9,
            ..default()
        }),
        door: materials.add(StandardMaterial {
            base_color: srgb(DOOR_COLOR),
            perceptual_roughness: 0.8,
            metallic: 0.1,
            ..default()
        }),
        handle: materials.add(StandardMaterial {
            base_color: Color::srgb(0.8, 0.8, 0.8),
            perceptual_roughness: 0.2,
            metallic: 0.9,
            ..default()
        }),
        powerup: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 1.0, 0.0),
            emissive: LinearRgba::rgb(1.0, 1.0, 0.0) * POWERUP_EMISSIVE_STRENGTH,
            perceptual_roughness: 0.2,
            metallic: 0.7,
            ..default()
        }),
        zombie_skin: textured(skin, 0.9, 0.0),
    });

    commands.insert_resource(EffectMeshes {
        fire_particle: meshes.add(Sphere::new(FIRE_PARTICLE_RADIUS).mesh().uv(6, 4)),
        flame_particle: meshes.add(Sphere::new(FLAME_PARTICLE_RADIUS).mesh().uv(6, 4)),
        flame_cone: meshes.add(Cone {
            radius: 0.15,
            height: FLAME_REACH,
        }),
        flame_glow: meshes.add(Sphere::new(FLAME_GLOW_RADIUS)),
        muzzle_flash: meshes.add(Sphere::new(MUZZLE_FLASH_RADIUS)),
        muzzle_flash_material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 1.0, 0.0),
            unlit: true,
            ..default()
        }),
        powerup_orb: meshes.add(Sphere::new(POWERUP_RADIUS)),
        zombie_fallback: meshes.add(Capsule3d::new(
            ZOMBIE_FALLBACK_RADIUS,
            2.0f32.mul_add(-ZOMBIE_FALLBACK_RADIUS, ZOMBIE_MODEL_SCALE),
        )),
    });
}

// ============================================================================
// Scene Setup
// ============================================================================

// Sky, fog, lights and the static campus geometry
pub fn spawn_campus_scene_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    campus: Res<CampusMaterials>,
    config: Res<GameConfig>,
) {
    commands.insert_resource(ClearColor(srgb(SKY_COLOR)));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: LIGHT_AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: false,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(LIGHT_SUN_POSITION)).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    spawn_ground(&mut commands, &mut meshes, &campus);
    spawn_perimeter_walls(&mut commands, &mut meshes, &campus);
    spawn_buildings(&mut commands, &mut meshes, &campus);

    info!(
        "campus scene ready: {} trees, {} power-ups",
        config.tree.count, config.powerup.count
    );
}
