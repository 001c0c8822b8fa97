pub mod components;
pub mod constants;
pub mod markers;
pub mod resources;
pub mod spawning;
pub mod systems;
pub mod textures;
