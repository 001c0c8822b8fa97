use bevy_math::Vec3;

use crate::{components::Position, constants::PHYSICS_EPSILON, map::CollisionBox};

// Check if two 1D ranges overlap, touching ends excluded.
#[must_use]
pub fn ranges_overlap_1d(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max > b_min && a_min < b_max
}

// Box of the given half extents around a center overlaps the collision box
#[must_use]
pub fn overlap_aabb_vs_box(center: &Position, half_x: f32, half_y: f32, half_z: f32, bx: &CollisionBox) -> bool {
    ranges_overlap_1d(center.x - half_x, center.x + half_x, bx.min.x, bx.max.x)
        && ranges_overlap_1d(center.y - half_y, center.y + half_y, bx.min.y, bx.max.y)
        && ranges_overlap_1d(center.z - half_z, center.z + half_z, bx.min.z, bx.max.z)
}

// Compute the intersection interval of a ray with a slab (used in ray-AABB tests)
#[must_use]
pub fn sweep_slab_interval(
    local_coord: f32,
    ray_dir: f32,
    half_extent: f32,
    t_min: f32,
    t_max: f32,
) -> Option<(f32, f32)> {
    if ray_dir.abs() > PHYSICS_EPSILON {
        let t1 = (-half_extent - local_coord) / ray_dir;
        let t2 = (half_extent - local_coord) / ray_dir;
        let new_min = t_min.max(t1.min(t2));
        let new_max = t_max.min(t1.max(t2));
        if new_min <= new_max {
            Some((new_min, new_max))
        } else {
            None
        }
    } else if local_coord.abs() > half_extent {
        None
    } else {
        Some((t_min, t_max))
    }
}

// Distance along a normalized ray to the first face of the box, if it is hit within `max_t`.
// A ray starting inside the box hits at distance 0.
#[must_use]
pub fn ray_vs_aabb(origin: Vec3, dir: Vec3, bx: &CollisionBox, max_t: f32) -> Option<f32> {
    let center = bx.center();
    let half = bx.size() / 2.0;
    let local = origin - center;

    let mut interval = (0.0_f32, max_t);
    for axis in 0..3 {
        interval = sweep_slab_interval(local[axis], dir[axis], half[axis], interval.0, interval.1)?;
    }
    Some(interval.0)
}

// Shared axis-aligned slide between two candidate positions; the caller decides validity.
// Tries the full move, then x only, then z only from wherever the x step ended.
pub fn slide_along_axes(current_pos: &Position, dx: f32, dz: f32, collides: impl Fn(&Position) -> bool) -> Position {
    let full = Position {
        x: current_pos.x + dx,
        y: current_pos.y,
        z: current_pos.z + dz,
    };
    if !collides(&full) {
        return full;
    }

    let mut pos = *current_pos;
    let x_only = Position { x: pos.x + dx, ..pos };
    if !collides(&x_only) {
        pos = x_only;
    }
    let z_only = Position { z: pos.z + dz, ..pos };
    if !collides(&z_only) {
        pos = z_only;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: f32, y: f32, z: f32) -> CollisionBox {
        CollisionBox::from_center_size(Vec3::new(x, y, z), Vec3::ONE)
    }

    #[test]
    fn ray_hits_front_face() {
        let bx = unit_box_at(0.0, 0.0, -10.0);
        let t = ray_vs_aabb(Vec3::ZERO, Vec3::NEG_Z, &bx, 50.0);
        assert_eq!(t, Some(9.5));
    }

    #[test]
    fn ray_misses_box_to_the_side() {
        let bx = unit_box_at(3.0, 0.0, -10.0);
        assert_eq!(ray_vs_aabb(Vec3::ZERO, Vec3::NEG_Z, &bx, 50.0), None);
    }

    #[test]
    fn ray_respects_max_distance() {
        let bx = unit_box_at(0.0, 0.0, -60.0);
        assert_eq!(ray_vs_aabb(Vec3::ZERO, Vec3::NEG_Z, &bx, 50.0), None);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let bx = unit_box_at(0.0, 0.0, -10.0);
        assert_eq!(ray_vs_aabb(Vec3::ZERO, Vec3::Z, &bx, 50.0), None);
    }

    #[test]
    fn ray_from_inside_hits_immediately() {
        let bx = unit_box_at(0.0, 0.0, 0.0);
        assert_eq!(ray_vs_aabb(Vec3::ZERO, Vec3::X, &bx, 50.0), Some(0.0));
    }

    #[test]
    fn slide_keeps_free_axis() {
        // Wall along x = 1: blocks any x > 0.5
        let blocked = |p: &Position| p.x > 0.5;
        let pos = slide_along_axes(&Position::new(0.0, 0.0, 0.0), 1.0, 1.0, blocked);
        assert_eq!(pos, Position::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn slide_stops_when_both_axes_blocked() {
        let pos = slide_along_axes(&Position::new(2.0, 1.0, 3.0), 1.0, 1.0, |_| true);
        assert_eq!(pos, Position::new(2.0, 1.0, 3.0));
    }

    #[test]
    fn overlap_excludes_touching_faces() {
        let bx = unit_box_at(0.0, 0.0, 0.0);
        assert!(!overlap_aabb_vs_box(&Position::new(1.0, 0.0, 0.0), 0.5, 0.5, 0.5, &bx));
        assert!(overlap_aabb_vs_box(&Position::new(0.9, 0.0, 0.0), 0.5, 0.5, 0.5, &bx));
    }
}
