// ============================================================================
// Client Constants
// ============================================================================

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.05; // weapons sit well inside the default near plane

// Sky and fog
pub const SKY_COLOR: [f32; 3] = [0.529, 0.808, 0.922]; // #87ceeb
pub const FOG_START: f32 = 50.0;
pub const FOG_END: f32 = 150.0;

// Lighting
pub const LIGHT_AMBIENT_BRIGHTNESS: f32 = 600.0;
pub const LIGHT_SUN_ILLUMINANCE: f32 = 10000.0;
pub const LIGHT_SUN_POSITION: [f32; 3] = [50.0, 100.0, 50.0];

// Window defaults
pub const WINDOW_TITLE: &str = "Campus Zombies";
pub const DEFAULT_LOG_FILTER: &str = "wgpu=error,naga=warn";

// ============================================================================
// Textures
// ============================================================================

pub const TEXTURE_SIZE: u32 = 512;
pub const BARK_TEXTURE_SIZE: u32 = 256;

// World-space size of one texture tile, used to compute UV repeats on cuboids
pub const TEXTURE_BRICK_TILE_SIZE: f32 = 4.0;
pub const TEXTURE_CONCRETE_TILE_SIZE: f32 = 10.0;
pub const TEXTURE_ASPHALT_TILE_SIZE: f32 = 5.0;

// Brick pattern (pixels)
pub const BRICK_WIDTH: u32 = 128;
pub const BRICK_HEIGHT: u32 = 64;
pub const BRICK_MORTAR: u32 = 4;
pub const BRICK_MORTAR_COLOR: [u8; 4] = [0x8b, 0x73, 0x55, 0xff];
pub const BRICK_BASE_COLOR: [i32; 3] = [165, 102, 70];
pub const BRICK_SHADE_RANGE: i32 = 15;

pub const ASPHALT_COLOR: [u8; 4] = [0x3a, 0x3a, 0x3a, 0xff];
pub const ASPHALT_SPECKS: usize = 1000;

pub const CONCRETE_COLOR: [u8; 4] = [0xc8, 0xc8, 0xc8, 0xff];
pub const CONCRETE_SEAM_COLOR: [u8; 4] = [0xa0, 0xa0, 0xa0, 0xff];
pub const CONCRETE_SEAM_SPACING: u32 = 128;
pub const CONCRETE_BLOTCHES: usize = 500;

pub const BARK_COLOR: [u8; 4] = [0x3d, 0x28, 0x17, 0xff];
pub const BARK_LINE_COLOR: [u8; 4] = [0x2a, 0x18, 0x10, 0xff];
pub const BARK_KNOT_COLOR: [u8; 4] = [0x22, 0x15, 0x10, 0xff];
pub const BARK_KNOTS: usize = 8;

pub const SKIN_COLOR: [u8; 4] = [0x8b, 0x9a, 0x7c, 0xff];
pub const SKIN_BLOOD_STAINS: usize = 50;
pub const SKIN_WOUNDS: usize = 30;
pub const SKIN_BUMPS: usize = 2000;

// ============================================================================
// Campus Decoration
// ============================================================================

pub const WINDOW_SIZE: [f32; 3] = [2.0, 2.5, 0.2];
pub const WINDOW_COLOR: [f32; 3] = [0.529, 0.808, 0.922];
pub const WINDOW_EMISSIVE: [f32; 3] = [0.133, 0.2, 0.267];
pub const MAIN_DOOR_SIZE: [f32; 3] = [3.0, 4.0, 0.3];
pub const MAIN_DOOR_POSITION: [f32; 3] = [0.0, 2.0, -19.85];
pub const DOOR_HANDLE_POSITION: [f32; 3] = [1.0, 2.0, -19.7];
pub const DOOR_HANDLE_RADIUS: f32 = 0.1;
pub const DOOR_COLOR: [f32; 3] = [0.396, 0.263, 0.129]; // #654321
pub const CLASSROOM_DOOR_SIZE: [f32; 3] = [2.0, 3.0, 0.2];
pub const FIRST_FLOOR_THICKNESS: f32 = 0.5;

// Trees
pub const TRUNK_TOP_RADIUS: f32 = 0.4;
pub const TRUNK_BOTTOM_RADIUS: f32 = 0.5;
pub const FOLIAGE_COLOR: [f32; 3] = [0.176, 0.314, 0.086]; // #2d5016

// Power-ups
pub const POWERUP_RADIUS: f32 = 0.5;
pub const POWERUP_EMISSIVE_STRENGTH: f32 = 0.8;

// ============================================================================
// Zombies
// ============================================================================

pub const ZOMBIE_MODEL: &str = "models/zombie_lowpoly_arms_forward.glb";
pub const ZOMBIE_MODEL_SCALE: f32 = 1.5; // the source model is one unit tall
pub const ZOMBIE_FALLBACK_RADIUS: f32 = 0.4;
pub const ZOMBIE_FALLBACK_COLOR: [f32; 3] = [0.545, 0.604, 0.486];

// Red flash on the body
pub const ZOMBIE_HIT_FLASH_SECS: f32 = 0.1;
pub const ZOMBIE_ATTACK_FLASH_SECS: f32 = 0.2;
pub const ZOMBIE_FLASH_STRENGTH: f32 = 0.8;

// Fire while burning
pub const FIRE_PARTICLE_COUNT: usize = 15;
pub const FIRE_PARTICLE_RADIUS: f32 = 0.1;
pub const FIRE_PARTICLE_SPREAD: f32 = 0.75;
pub const FIRE_PARTICLE_MAX_Y: f32 = 1.5;
pub const FIRE_PARTICLE_SIDE_SPEED: f32 = 0.6; // m/s, either direction
pub const FIRE_PARTICLE_RISE_MIN: f32 = 1.8; // m/s
pub const FIRE_PARTICLE_RISE_SPREAD: f32 = 1.2;
pub const FIRE_PARTICLE_START_ALPHA: f32 = 0.8;
pub const FIRE_PARTICLE_FADE: f32 = 1.2; // alpha per second
pub const FIRE_GLOW_STRENGTH: f32 = 0.6;

// ============================================================================
// Weapons
// ============================================================================

pub const RIFLE_REST: [f32; 3] = [0.25, -0.25, -0.6];
pub const PISTOL_REST: [f32; 3] = [0.2, -0.2, -0.4];
pub const FLAMETHROWER_REST: [f32; 3] = [0.2, -0.22, -0.5];
pub const WEAPON_REST_YAW: f32 = -0.1;

pub const MUZZLE_FLASH_SECS: f32 = 0.05;
pub const MUZZLE_FLASH_RADIUS: f32 = 0.05;
pub const MUZZLE_FLASH_Y: f32 = 0.05; // above the barrel axis

pub const FLAME_PARTICLE_COUNT: usize = 30;
pub const FLAME_PARTICLE_RADIUS: f32 = 0.05;
pub const FLAME_REACH: f32 = 1.5;
pub const FLAME_SPREAD: f32 = 0.3; // radial spread per meter of reach
pub const FLAME_NOZZLE_Z: f32 = -0.8;
pub const FLAME_SECS: f32 = 10.0 / 60.0;
pub const FLAME_SPEED: f32 = 9.0; // m/s forward
pub const FLAME_JITTER: f32 = 1.5; // m/s sideways
pub const FLAME_PARTICLE_ALPHA: f32 = 0.8;
pub const FLAME_PARTICLE_COLORS: [u32; 2] = [0xff_4400, 0xff_aa00];
pub const FLAME_CONE_Z: f32 = -1.2;
pub const FLAME_CONE_ALPHA: f32 = 0.7;
pub const FLAME_GLOW_RADIUS: f32 = 0.2;
pub const FLAME_GLOW_ALPHA: f32 = 0.5;

// ============================================================================
// Screen Effects
// ============================================================================

pub const DAMAGE_OVERLAY_SECS: f32 = 0.1;
pub const DAMAGE_OVERLAY_ALPHA: f32 = 0.5;
pub const EXPLOSION_SECS: f32 = 0.5;
pub const EXPLOSION_ALPHA: f32 = 0.3;

// ============================================================================
// Sounds
// ============================================================================

pub const SOUND_RIFLE: &str = "sounds/rifle.wav";
pub const SOUND_PISTOL: &str = "sounds/pistol.wav";
pub const SOUND_FLAMETHROWER: &str = "sounds/flamethrower.flac";
pub const SOUND_WEAPON_SWITCH: &str = "sounds/weapon_switch.wav";
pub const SOUND_ZOMBIE_HIT: &str = "sounds/zombie_hit.wav";
pub const SOUND_ZOMBIE_DEATH: &str = "sounds/zombie_death.flac";
pub const SOUND_PLAYER_HURT: &str = "sounds/player_hurt.wav";
pub const SOUND_TREE_HIT: &str = "sounds/tree_hit.wav";
pub const SOUND_POWERUP: &str = "sounds/powerup.wav";
pub const SOUND_GAME_OVER: &str = "sounds/game_over.flac";

// ============================================================================
// HUD
// ============================================================================

pub const HUD_FONT_SIZE: f32 = 24.0;
pub const HUD_MARGIN: f32 = 20.0;
pub const HEALTH_BAR_WIDTH: f32 = 200.0;
pub const HEALTH_BAR_HEIGHT: f32 = 20.0;
pub const CROSSHAIR_SIZE: f32 = 20.0;
pub const CROSSHAIR_THICKNESS: f32 = 2.0;
