use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use super::walls::BlockBundle;
use crate::{constants::*, markers::DecorationMarker, resources::CampusMaterials};
#[allow(clippy::wildcard_imports)]
use common::{constants::*, map::classroom_centers};

#[derive(Bundle)]
struct DecorationBundle {
    mesh: Mesh3d,
    material: MeshMaterial3d<StandardMaterial>,
    transform: Transform,
    visibility: Visibility,
    marker: DecorationMarker,
}

impl DecorationBundle {
    fn new(mesh: Handle<Mesh>, material: &Handle<StandardMaterial>, transform: Transform) -> Self {
        Self {
            mesh: Mesh3d(mesh),
            material: MeshMaterial3d(material.clone()),
            transform,
            visibility: Visibility::default(),
            marker: DecorationMarker,
        }
    }
}

// Main building, first floor, stairs, corridor and classrooms
pub fn spawn_buildings(commands: &mut Commands, meshes: &mut Assets<Mesh>, campus: &CampusMaterials) {
    let window_mesh = meshes.add(Cuboid::from_size(Vec3::from_array(WINDOW_SIZE)));

    // Main building with two rows of front windows
    let building_center = Vec3::from_array(MAIN_BUILDING_CENTER);
    let building_size = Vec3::from_array(MAIN_BUILDING_SIZE);
    commands.spawn(BlockBundle::new(
        meshes,
        &campus.concrete,
        building_center,
        building_size,
        TEXTURE_CONCRETE_TILE_SIZE,
    ));
    let front_z = building_size.z / 2.0 + 0.1;
    for i in -3..=3 {
        for j in 0..2 {
            let offset = Vec3::new(i as f32 * 5.0, (j as f32).mul_add(5.0, -3.0), front_z);
            commands.spawn(DecorationBundle::new(
                window_mesh.clone(),
                &campus.glass,
                Transform::from_translation(building_center + offset),
            ));
        }
    }

    // Entrance door with its handle
    commands.spawn(DecorationBundle::new(
        meshes.add(Cuboid::from_size(Vec3::from_array(MAIN_DOOR_SIZE))),
        &campus.door,
        Transform::from_translation(Vec3::from_array(MAIN_DOOR_POSITION)),
    ));
    commands.spawn(DecorationBundle::new(
        meshes.add(Sphere::new(DOOR_HANDLE_RADIUS)),
        &campus.handle,
        Transform::from_translation(Vec3::from_array(DOOR_HANDLE_POSITION)),
    ));

    // First floor platform on the roof
    commands.spawn(BlockBundle::new(
        meshes,
        &campus.concrete,
        Vec3::new(
            f32::midpoint(FIRST_FLOOR_MIN_X, FIRST_FLOOR_MAX_X),
            FIRST_FLOOR_HEIGHT,
            f32::midpoint(FIRST_FLOOR_MIN_Z, FIRST_FLOOR_MAX_Z),
        ),
        Vec3::new(
            FIRST_FLOOR_MAX_X - FIRST_FLOOR_MIN_X,
            FIRST_FLOOR_THICKNESS,
            FIRST_FLOOR_MAX_Z - FIRST_FLOOR_MIN_Z,
        ),
        TEXTURE_CONCRETE_TILE_SIZE,
    ));

    // Stairs, one block per step
    let stairs_x = f32::midpoint(STAIRS_MIN_X, STAIRS_MAX_X);
    for i in 0..STAIRS_STEP_COUNT {
        let step = i as f32;
        commands.spawn(BlockBundle::new(
            meshes,
            &campus.concrete,
            Vec3::new(
                stairs_x,
                step.mul_add(STAIRS_STEP_HEIGHT, STAIRS_STEP_HEIGHT / 2.0),
                step.mul_add(STAIRS_STEP_DEPTH, STAIRS_MIN_Z),
            ),
            Vec3::new(STAIRS_STEP_WIDTH, STAIRS_STEP_HEIGHT, STAIRS_STEP_DEPTH),
            TEXTURE_CONCRETE_TILE_SIZE,
        ));
    }

    commands.spawn(BlockBundle::new(
        meshes,
        &campus.concrete,
        Vec3::from_array(CORRIDOR_CENTER),
        Vec3::from_array(CORRIDOR_SIZE),
        TEXTURE_CONCRETE_TILE_SIZE,
    ));

    // Brick classrooms, each with a door facing the corridor and a window on its front
    let classroom_size = Vec3::from_array(CLASSROOM_SIZE);
    let door_mesh = meshes.add(Cuboid::from_size(Vec3::from_array(CLASSROOM_DOOR_SIZE)));
    for center in classroom_centers() {
        commands.spawn(BlockBundle::new(
            meshes,
            &campus.brick,
            center,
            classroom_size,
            TEXTURE_BRICK_TILE_SIZE,
        ));

        let inner_x = center.x - center.x.signum() * (classroom_size.x / 2.0 + 0.1);
        commands.spawn(DecorationBundle::new(
            door_mesh.clone(),
            &campus.door,
            Transform::from_xyz(inner_x, CLASSROOM_DOOR_SIZE[1] / 2.0, center.z)
                .with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
        ));
        commands.spawn(DecorationBundle::new(
            window_mesh.clone(),
            &campus.glass,
            Transform::from_xyz(center.x, center.y, center.z + classroom_size.z / 2.0 + 0.1),
        ));
    }
}
