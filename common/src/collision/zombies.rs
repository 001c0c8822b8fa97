use bevy_math::Vec3;

use super::helpers::slide_along_axes;
use crate::{components::Position, constants::ZOMBIE_HALF_WIDTH, map::CollisionBox};

// Zombie positions are anchored at the feet; the box spans [y, y + height]
#[must_use]
pub fn zombie_bounds(pos: &Position, height: f32) -> CollisionBox {
    CollisionBox {
        min: Vec3::new(pos.x - ZOMBIE_HALF_WIDTH, pos.y, pos.z - ZOMBIE_HALF_WIDTH),
        max: Vec3::new(pos.x + ZOMBIE_HALF_WIDTH, pos.y + height, pos.z + ZOMBIE_HALF_WIDTH),
    }
}

#[must_use]
pub fn zombie_collides(pos: &Position, boxes: &[CollisionBox], height: f32) -> bool {
    let bounds = zombie_bounds(pos, height);
    boxes.iter().any(|bx| bounds.overlaps(bx))
}

#[must_use]
pub fn slide_zombie_along_obstacles(
    pos: &Position,
    dx: f32,
    dz: f32,
    boxes: &[CollisionBox],
    height: f32,
) -> Position {
    // A zombie spawned inside geometry is allowed to walk out of it
    if zombie_collides(pos, boxes, height) {
        return Position {
            x: pos.x + dx,
            y: pos.y,
            z: pos.z + dz,
        };
    }
    slide_along_axes(pos, dx, dz, |candidate| zombie_collides(candidate, boxes, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zombie_slides_along_building() {
        let boxes = vec![CollisionBox::from_center_size(
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::new(4.0, 8.0, 4.0),
        )];
        // Touching the +x face and pushing diagonally into it
        let start = Position::new(2.4, 0.0, 0.0);
        let pos = slide_zombie_along_obstacles(&start, -0.1, 0.1, &boxes, 1.5);
        assert_eq!(pos.x, 2.4);
        assert!((pos.z - 0.1).abs() < 1e-6);
    }

    #[test]
    fn zombie_inside_geometry_walks_out() {
        let boxes = vec![CollisionBox::from_center_size(Vec3::new(0.0, 4.0, 0.0), Vec3::splat(8.0))];
        let pos = slide_zombie_along_obstacles(&Position::new(0.0, 0.0, 0.0), 0.1, 0.0, &boxes, 1.5);
        assert_eq!(pos, Position::new(0.1, 0.0, 0.0));
    }
}
