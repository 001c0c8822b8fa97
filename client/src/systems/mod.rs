pub mod assets;
pub mod audio;
pub mod effects;
pub mod input;
pub mod sync;
pub mod ui;
pub mod weapons;
pub mod zombies;
