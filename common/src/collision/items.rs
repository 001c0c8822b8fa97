use crate::components::Position;

// 3D proximity check, strictly inside the radius
#[must_use]
pub fn within_radius(a: &Position, b: &Position, radius: f32) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    let dist_sq = dz.mul_add(dz, dx.mul_add(dx, dy * dy));
    dist_sq < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_exclusive() {
        let origin = Position::new(0.0, 0.0, 0.0);
        assert!(within_radius(&origin, &Position::new(1.9, 0.0, 0.0), 2.0));
        assert!(!within_radius(&origin, &Position::new(2.0, 0.0, 0.0), 2.0));
    }

    #[test]
    fn height_counts_toward_distance() {
        let player = Position::new(0.0, 0.9, 0.0);
        assert!(within_radius(&player, &Position::new(1.0, 1.2, 0.0), 2.0));
        assert!(!within_radius(&player, &Position::new(1.0, 3.0, 1.0), 2.0));
    }
}
