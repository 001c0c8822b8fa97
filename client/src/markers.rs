use bevy::prelude::*;

// ============================================================================
// Camera Markers
// ============================================================================

// Marker component for the first-person camera
#[derive(Component)]
pub struct MainCameraMarker;

// ============================================================================
// Map Markers
// ============================================================================

// Marker component for brick and concrete building blocks
#[derive(Component)]
pub struct BuildingMarker;

// Marker component for doors, windows and other decoration
#[derive(Component)]
pub struct DecorationMarker;

// ============================================================================
// Weapon Markers
// ============================================================================

// Marker for the weapon model parented to the camera
#[derive(Component)]
pub struct WeaponModelMarker;

// Marker for the glow sphere at the flamethrower nozzle
#[derive(Component)]
pub struct FlameGlowMarker;

// ============================================================================
// Zombie Markers
// ============================================================================

// Marker for the child entity carrying a zombie's visual model
#[derive(Component)]
pub struct ZombieModelMarker;

// Marker for the fallback capsule when the zombie model failed to load
#[derive(Component)]
pub struct ZombieFallbackMarker;

// ============================================================================
// UI Markers
// ============================================================================

#[derive(Component)]
pub struct ScoreUIMarker;

#[derive(Component)]
pub struct HealthBarUIMarker;

#[derive(Component)]
pub struct HealthTextUIMarker;

#[derive(Component)]
pub struct WeaponUIMarker;

#[derive(Component)]
pub struct CrosshairUIMarker;

#[derive(Component)]
pub struct DamageOverlayUIMarker;

#[derive(Component)]
pub struct GameOverUIMarker;

#[derive(Component)]
pub struct FinalScoreUIMarker;
