use super::helpers::{overlap_aabb_vs_box, slide_along_axes};
use crate::{components::Position, constants::PLAYER_RADIUS, map::CollisionBox};

// Player box is ±PLAYER_RADIUS in x/z and ±height/2 in y around its center
#[must_use]
pub fn player_collides(pos: &Position, boxes: &[CollisionBox], height: f32) -> bool {
    boxes
        .iter()
        .any(|bx| overlap_aabb_vs_box(pos, PLAYER_RADIUS, height / 2.0, PLAYER_RADIUS, bx))
}

// Apply a horizontal movement, sliding along whichever axis stays free.
#[must_use]
pub fn move_player_with_collision(pos: &Position, dx: f32, dz: f32, boxes: &[CollisionBox], height: f32) -> Position {
    slide_along_axes(pos, dx, dz, |candidate| player_collides(candidate, boxes, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_math::Vec3;

    const HEIGHT: f32 = 1.8;

    fn wall() -> Vec<CollisionBox> {
        // Thin wall in front of the player, spanning x -5..5 at z = -2
        vec![CollisionBox::from_center_size(
            Vec3::new(0.0, 2.5, -2.0),
            Vec3::new(10.0, 5.0, 1.0),
        )]
    }

    #[test]
    fn open_space_moves_freely() {
        let pos = move_player_with_collision(&Position::new(0.0, 0.9, 5.0), 0.1, -0.1, &wall(), HEIGHT);
        assert!(pos.distance(&Position::new(0.1, 0.9, 4.9)) < 1e-5);
    }

    #[test]
    fn wall_blocks_forward_but_allows_strafe() {
        // Front face at z = -1.5, player front at z - 0.5
        let start = Position::new(0.0, 0.9, -0.9);
        let pos = move_player_with_collision(&start, 0.2, -0.2, &wall(), HEIGHT);
        assert!((pos.x - 0.2).abs() < 1e-6);
        assert!((pos.z - -0.9).abs() < 1e-6);
    }

    #[test]
    fn standing_on_top_does_not_collide() {
        // Feet exactly on the wall top at y = 5
        let pos = Position::new(0.0, 5.0 + HEIGHT / 2.0, -2.0);
        assert!(!player_collides(&pos, &wall(), HEIGHT));
    }
}
