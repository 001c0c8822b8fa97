pub mod collision;
pub mod components;
pub mod config;
pub mod constants;
pub mod events;
pub mod map;
pub mod markers;
pub mod resources;
pub mod systems;
pub mod weapons;

pub use systems::{GameplayPlugin, GameplaySet};
