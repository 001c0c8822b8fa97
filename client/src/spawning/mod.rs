pub mod camera;
pub mod map;
pub mod powerups;
pub mod trees;
pub mod weapons;
pub mod zombies;

pub use camera::spawn_camera_system;
pub use map::{setup_campus_materials_system, spawn_campus_scene_system};
pub use powerups::attach_powerup_visuals_system;
pub use trees::{attach_tree_visuals_system, tree_transform};
pub use zombies::{
    apply_zombie_skin_system, attach_zombie_visuals_system, fit_zombie_model_system, zombie_model_fallback_system,
    zombie_transform,
};
