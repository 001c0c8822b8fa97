use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use std::f32::consts::TAU;

use crate::{components::Position, config::GameConfig, constants::*};

// ============================================================================
// Collision Boxes
// ============================================================================

// Axis-aligned box given by its minimum and maximum corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl CollisionBox {
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    // Strict overlap: touching faces do not count as a collision
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.cmplt(other.max).all() && self.max.cmpgt(other.min).all()
    }
}

// ============================================================================
// Campus Layout
// ============================================================================

// Axis-aligned rectangle in the XZ plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Footprint {
    #[must_use]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }
}

// Result of resolving the player's vertical position against the walkable surfaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    pub y: f32,
    pub on_ground: bool,
}

// Static campus geometry shared by simulation and presentation
#[derive(Resource, Debug, Clone)]
pub struct CampusLayout {
    pub collision_boxes: Vec<CollisionBox>,
    pub stairs: Footprint,
    pub first_floor: Footprint,
    pub tree_positions: Vec<Position>,
    pub player_spawn: Position,
}

#[must_use]
pub fn campus_layout(config: &GameConfig) -> CampusLayout {
    let mut collision_boxes = perimeter_walls().to_vec();

    collision_boxes.push(CollisionBox::from_center_size(
        Vec3::from_array(MAIN_BUILDING_CENTER),
        Vec3::from_array(MAIN_BUILDING_SIZE),
    ));
    collision_boxes.push(CollisionBox::from_center_size(
        Vec3::from_array(CORRIDOR_CENTER),
        Vec3::from_array(CORRIDOR_SIZE),
    ));

    let classroom_size = Vec3::from_array(CLASSROOM_SIZE);
    for center in classroom_centers() {
        collision_boxes.push(CollisionBox::from_center_size(center, classroom_size));
    }

    CampusLayout {
        collision_boxes,
        stairs: Footprint {
            min_x: STAIRS_MIN_X,
            max_x: STAIRS_MAX_X,
            min_z: STAIRS_MIN_Z,
            max_z: STAIRS_MAX_Z,
        },
        first_floor: Footprint {
            min_x: FIRST_FLOOR_MIN_X,
            max_x: FIRST_FLOOR_MAX_X,
            min_z: FIRST_FLOOR_MIN_Z,
            max_z: FIRST_FLOOR_MAX_Z,
        },
        tree_positions: tree_ring(config.tree.count, config.tree.ring_radius),
        player_spawn: Position::new(PLAYER_SPAWN_X, config.player.height / 2.0, PLAYER_SPAWN_Z),
    }
}

// Perimeter walls: back, front, left, right
#[must_use]
pub fn perimeter_walls() -> [CollisionBox; 4] {
    let long = GROUND_SIZE;
    let h = PERIMETER_WALL_HEIGHT;
    let t = PERIMETER_WALL_THICKNESS;
    let o = PERIMETER_WALL_OFFSET;
    [
        (Vec3::new(0.0, h / 2.0, -o), Vec3::new(long, h, t)),
        (Vec3::new(0.0, h / 2.0, o), Vec3::new(long, h, t)),
        (Vec3::new(-o, h / 2.0, 0.0), Vec3::new(t, h, long)),
        (Vec3::new(o, h / 2.0, 0.0), Vec3::new(t, h, long)),
    ]
    .map(|(center, size)| CollisionBox::from_center_size(center, size))
}

// Classroom centers, left then right, front to back
#[must_use]
pub fn classroom_centers() -> Vec<Vec3> {
    let y = CLASSROOM_SIZE[1] / 2.0;
    (0..CLASSROOM_COUNT)
        .flat_map(|i| {
            let z = (i as f32).mul_add(CLASSROOM_SPACING_Z, CLASSROOM_FIRST_Z);
            [
                Vec3::new(-CLASSROOM_OFFSET_X, y, z),
                Vec3::new(CLASSROOM_OFFSET_X, y, z),
            ]
        })
        .collect()
}

fn tree_ring(count: usize, radius: f32) -> Vec<Position> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            Position::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

impl CampusLayout {
    // Height of the stairs surface at a given Z, measured from the ground
    #[must_use]
    pub fn stairs_height_at(&self, z: f32) -> f32 {
        let progress = (z - self.stairs.min_z) / (self.stairs.max_z - self.stairs.min_z);
        progress * STAIRS_RISE
    }

    // Resolve the player center height against stairs, ground and first floor, in that order
    #[must_use]
    pub fn ground_height_at(&self, pos: &Position, player_height: f32) -> GroundContact {
        let half_height = player_height / 2.0;

        if self.stairs.contains(pos.x, pos.z) {
            let target = self.stairs_height_at(pos.z) + half_height;
            return if pos.y < target {
                GroundContact {
                    y: target,
                    on_ground: true,
                }
            } else {
                GroundContact {
                    y: pos.y,
                    on_ground: pos.y <= target + STAIRS_GROUND_TOLERANCE,
                }
            };
        }

        if pos.y <= half_height {
            return GroundContact {
                y: half_height,
                on_ground: true,
            };
        }

        if (FIRST_FLOOR_CATCH_MIN_Y..=FIRST_FLOOR_CATCH_MAX_Y).contains(&pos.y) && self.first_floor.contains(pos.x, pos.z)
        {
            return GroundContact {
                y: FIRST_FLOOR_HEIGHT + half_height,
                on_ground: true,
            };
        }

        GroundContact {
            y: pos.y,
            on_ground: false,
        }
    }

    #[must_use]
    pub fn clamp_to_bounds(pos: Position) -> Position {
        Position {
            x: pos.x.clamp(-PLAY_BOUND, PLAY_BOUND),
            y: pos.y,
            z: pos.z.clamp(-PLAY_BOUND, PLAY_BOUND),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f32 = 1.8;

    fn layout() -> CampusLayout {
        campus_layout(&GameConfig::default())
    }

    #[test]
    fn layout_has_walls_buildings_and_classrooms() {
        // 4 perimeter walls, main building, corridor, 8 classrooms
        assert_eq!(layout().collision_boxes.len(), 14);
    }

    #[test]
    fn main_building_box_matches_its_footprint() {
        let building = layout().collision_boxes[4];
        assert_eq!(building.min, Vec3::new(-20.0, 0.0, -40.0));
        assert_eq!(building.max, Vec3::new(20.0, 15.0, -20.0));
    }

    #[test]
    fn trees_sit_on_a_ring() {
        let layout = layout();
        assert_eq!(layout.tree_positions.len(), 8);
        for tree in &layout.tree_positions {
            assert!((tree.x.hypot(tree.z) - 35.0).abs() < 1e-3);
        }
    }

    #[test]
    fn touching_boxes_do_not_overlap() {
        let a = CollisionBox::from_center_size(Vec3::ZERO, Vec3::ONE);
        let b = CollisionBox::from_center_size(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE);
        let c = CollisionBox::from_center_size(Vec3::new(0.5, 0.5, 0.5), Vec3::ONE);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(a.contains(Vec3::new(0.5, 0.5, 0.5)));
    }

    #[test]
    fn falling_below_ground_snaps_up() {
        let contact = layout().ground_height_at(&Position::new(0.0, 0.2, 20.0), HEIGHT);
        assert_eq!(contact, GroundContact { y: 0.9, on_ground: true });
    }

    #[test]
    fn airborne_above_open_ground() {
        let contact = layout().ground_height_at(&Position::new(0.0, 3.0, 20.0), HEIGHT);
        assert!(!contact.on_ground);
        assert_eq!(contact.y, 3.0);
    }

    #[test]
    fn stairs_lift_the_player_with_z() {
        let layout = layout();
        let contact = layout.ground_height_at(&Position::new(-15.0, 0.9, -16.0), HEIGHT);
        // halfway up: 6 / 12 * 7.5 = 3.75
        assert!(contact.on_ground);
        assert!((contact.y - (3.75 + 0.9)).abs() < 1e-4);
    }

    #[test]
    fn slightly_above_stairs_still_counts_as_grounded() {
        let layout = layout();
        let target = layout.stairs_height_at(-16.0) + 0.9;
        let contact = layout.ground_height_at(&Position::new(-15.0, target + 0.4, -16.0), HEIGHT);
        assert!(contact.on_ground);
        let contact = layout.ground_height_at(&Position::new(-15.0, target + 0.6, -16.0), HEIGHT);
        assert!(!contact.on_ground);
    }

    #[test]
    fn first_floor_catches_player_in_band() {
        let contact = layout().ground_height_at(&Position::new(0.0, 15.2, -30.0), HEIGHT);
        assert_eq!(contact, GroundContact { y: 15.9, on_ground: true });
    }

    #[test]
    fn bounds_clamp_horizontal_only() {
        let pos = CampusLayout::clamp_to_bounds(Position::new(60.0, 7.0, -60.0));
        assert_eq!(pos, Position::new(48.0, 7.0, -48.0));
    }
}
