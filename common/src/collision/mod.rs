pub mod helpers;
pub mod items;
pub mod player;
pub mod zombies;

pub use helpers::ray_vs_aabb;
pub use items::within_radius;
pub use player::{move_player_with_collision, player_collides};
pub use zombies::{slide_zombie_along_obstacles, zombie_collides};
