use bevy::prelude::*;

use super::helpers::tiled_cuboid;
use crate::{constants::*, markers::BuildingMarker, resources::CampusMaterials};
use common::{
    constants::{GROUND_SIZE, GROUND_THICKNESS},
    map::perimeter_walls,
};

#[derive(Bundle)]
pub(super) struct BlockBundle {
    mesh: Mesh3d,
    material: MeshMaterial3d<StandardMaterial>,
    transform: Transform,
    visibility: Visibility,
    marker: BuildingMarker,
}

impl BlockBundle {
    pub(super) fn new(
        meshes: &mut Assets<Mesh>,
        material: &Handle<StandardMaterial>,
        center: Vec3,
        size: Vec3,
        tile_size: f32,
    ) -> Self {
        Self {
            mesh: Mesh3d(meshes.add(tiled_cuboid(size, tile_size))),
            material: MeshMaterial3d(material.clone()),
            transform: Transform::from_translation(center),
            visibility: Visibility::default(),
            marker: BuildingMarker,
        }
    }
}

// Asphalt slab whose top face is the y = 0 plane
pub fn spawn_ground(commands: &mut Commands, meshes: &mut Assets<Mesh>, campus: &CampusMaterials) {
    commands.spawn(BlockBundle::new(
        meshes,
        &campus.asphalt,
        Vec3::new(0.0, -GROUND_THICKNESS / 2.0, 0.0),
        Vec3::new(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE),
        TEXTURE_ASPHALT_TILE_SIZE,
    ));
}

// Brick walls enclosing the campus, matching their collision boxes
pub fn spawn_perimeter_walls(commands: &mut Commands, meshes: &mut Assets<Mesh>, campus: &CampusMaterials) {
    for wall in perimeter_walls() {
        commands.spawn(BlockBundle::new(
            meshes,
            &campus.brick,
            wall.center(),
            wall.size(),
            TEXTURE_BRICK_TILE_SIZE,
        ));
    }
}
