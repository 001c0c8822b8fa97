use bevy_ecs::prelude::*;

// Marker components to disambiguate entity archetypes between simulation and presentation.
#[derive(Component, Debug, Default)]
pub struct PlayerMarker;

#[derive(Component, Debug, Default)]
pub struct ZombieMarker;

#[derive(Component, Debug, Default)]
pub struct TreeMarker;

#[derive(Component, Debug, Default)]
pub struct PowerUpMarker;
