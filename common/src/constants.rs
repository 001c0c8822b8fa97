// ============================================================================
// Floating-Point Comparisons
// ============================================================================

// Small value for floating-point comparisons (near-zero checks, division guards).
pub const PHYSICS_EPSILON: f32 = 1e-6;

// ============================================================================
// Campus Geometry (meters)
// ============================================================================

pub const GROUND_SIZE: f32 = 100.0;
pub const GROUND_THICKNESS: f32 = 0.5;

// Perimeter walls
pub const PERIMETER_WALL_HEIGHT: f32 = 5.0;
pub const PERIMETER_WALL_THICKNESS: f32 = 1.0;
pub const PERIMETER_WALL_OFFSET: f32 = 50.0; // distance from origin

// Player is clamped inside the perimeter walls
pub const PLAY_BOUND: f32 = 48.0;

// Main building
pub const MAIN_BUILDING_CENTER: [f32; 3] = [0.0, 7.5, -30.0];
pub const MAIN_BUILDING_SIZE: [f32; 3] = [40.0, 15.0, 20.0];

// Corridor running through the middle of the main building
pub const CORRIDOR_CENTER: [f32; 3] = [0.0, 4.0, -25.0];
pub const CORRIDOR_SIZE: [f32; 3] = [5.0, 8.0, 30.0];

// Classrooms on both sides of the corridor
pub const CLASSROOM_COUNT: usize = 4;
pub const CLASSROOM_SIZE: [f32; 3] = [10.0, 8.0, 8.0];
pub const CLASSROOM_OFFSET_X: f32 = 15.0;
pub const CLASSROOM_FIRST_Z: f32 = -40.0;
pub const CLASSROOM_SPACING_Z: f32 = 10.0;

// Stairs up to the first floor
pub const STAIRS_MIN_X: f32 = -17.0;
pub const STAIRS_MAX_X: f32 = -13.0;
pub const STAIRS_MIN_Z: f32 = -22.0;
pub const STAIRS_MAX_Z: f32 = -10.0;
pub const STAIRS_RISE: f32 = 7.5; // total climb across the stairs footprint
pub const STAIRS_STEP_COUNT: usize = 15;
pub const STAIRS_STEP_WIDTH: f32 = 4.0;
pub const STAIRS_STEP_HEIGHT: f32 = 0.5;
pub const STAIRS_STEP_DEPTH: f32 = 0.8;
pub const STAIRS_GROUND_TOLERANCE: f32 = 0.5; // still grounded this far above the steps

// First floor platform
pub const FIRST_FLOOR_HEIGHT: f32 = 15.0;
pub const FIRST_FLOOR_MIN_X: f32 = -19.0;
pub const FIRST_FLOOR_MAX_X: f32 = 19.0;
pub const FIRST_FLOOR_MIN_Z: f32 = -39.0;
pub const FIRST_FLOOR_MAX_Z: f32 = -21.0;
pub const FIRST_FLOOR_CATCH_MIN_Y: f32 = 14.5;
pub const FIRST_FLOOR_CATCH_MAX_Y: f32 = 15.5;

// Player start (x, z); y is derived from the configured player height
pub const PLAYER_SPAWN_X: f32 = 0.0;
pub const PLAYER_SPAWN_Z: f32 = 20.0;

// ============================================================================
// Player
// ============================================================================

pub const PLAYER_RADIUS: f32 = 0.5; // horizontal half extent for wall collision
pub const MOUSE_SENSITIVITY: f32 = 0.002; // radians per pixel

// ============================================================================
// Zombies
// ============================================================================

pub const ZOMBIE_HALF_WIDTH: f32 = 0.4;
pub const ZOMBIE_INITIAL_MIN_DISTANCE: f32 = 20.0;
pub const ZOMBIE_INITIAL_DISTANCE_SPREAD: f32 = 20.0;
pub const ZOMBIE_RESPAWN_DISTANCE: f32 = 40.0;

// ============================================================================
// Trees
// ============================================================================

pub const TREE_TRUNK_RADIUS: f32 = 0.5;
pub const TREE_TRUNK_HEIGHT: f32 = 5.0;
pub const TREE_CANOPY_HALF_WIDTH: f32 = 2.2;
pub const TREE_CANOPY_MIN_Y: f32 = 4.0;
pub const TREE_CANOPY_MAX_Y: f32 = 9.0;

// Falling tree physics (per second, tuned to match 60 FPS feel)
pub const TREE_FALL_GRAVITY: f32 = 36.0;
pub const TREE_FALL_HORIZONTAL_SPEED: f32 = 1.2;
pub const TREE_FALL_INITIAL_DROP: f32 = 3.0;
pub const TREE_FALL_MAX_ANGULAR_SPEED: f32 = 1.5;
pub const TREE_REST_HEIGHT: f32 = -3.0;

// ============================================================================
// Power-Ups
// ============================================================================

pub const POWERUP_BASE_HEIGHT: f32 = 1.0;
pub const POWERUP_FLOAT_AMPLITUDE: f32 = 0.3;
pub const POWERUP_FLOAT_FREQUENCY: f32 = 3.0; // radians per second
pub const POWERUP_SPIN_SPEED: f32 = 1.2; // radians per second
pub const POWERUP_MIN_DISTANCE: f32 = 10.0;
pub const POWERUP_DISTANCE_SPREAD: f32 = 30.0;

// ============================================================================
// Weapons
// ============================================================================

pub const RECOIL_PITCH_KICK: f32 = 0.1;
pub const RECOIL_SETTLE_PITCH: f32 = 0.03;
pub const RECOIL_SETTLE_TIME: f32 = 0.05; // seconds until the first settle keyframe
pub const RECOIL_DURATION: f32 = 0.15; // seconds until the weapon is back at rest
