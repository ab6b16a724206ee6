//! Fixed gameplay constants.  Nothing here is read from the environment;
//! changing a value means rebuilding.

// ── World ─────────────────────────────────────────────────────────────────────

pub const WORLD_WIDTH: f32 = 700.0;
pub const WORLD_HEIGHT: f32 = 500.0;

/// Top edge of the ground strip.
pub const FLOOR_Y: f32 = 400.0;

/// Screen column the camera pins the player to.
pub const CAMERA_ANCHOR_X: f32 = 50.0;

/// Projectiles are drawn with a wider lead than the rest of the world.
pub const PROJECTILE_ANCHOR_X: f32 = 100.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_START_X: f32 = 50.0;
pub const PLAYER_START_Y: f32 = 300.0;
pub const PLAYER_WIDTH: f32 = 60.0;
pub const PLAYER_HEIGHT: f32 = 95.0;

/// The player's `y` when standing on the floor.
pub const PLAYER_GROUND_Y: f32 = 300.0;

pub const GRAVITY: f32 = 1.2;
pub const WALK_STEP: f32 = 4.0;
pub const JUMP_IMPULSE: f32 = 5.0;

/// Jump input is honoured while fewer than this many ticks have passed
/// since the player last stood on something.
pub const JUMP_WINDOW: u32 = 5;

pub const ANIMATION_FRAMES: usize = 5;
pub const TICKS_PER_ANIMATION_FRAME: usize = 5;

// ── Obstacles ─────────────────────────────────────────────────────────────────

pub const TUBE_WIDTH: f32 = 55.0;
pub const TUBE_HEIGHT: f32 = 400.0;

/// Level layout, in spawn order.
pub const TUBE_POSITIONS: [(f32, f32); 4] = [
    (276.0, 347.0),
    (553.0, 331.0),
    (897.0, 257.0),
    (1291.0, 164.0),
];

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_WIDTH: f32 = 99.0;
pub const ENEMY_HEIGHT: f32 = 118.0;
pub const ENEMY_SPEED: f32 = 1.0;

/// An enemy burning for more than this many ticks is removed.
pub const FIRE_EXPIRY_TICKS: u32 = 40;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_SIZE: f32 = 47.0;
pub const PROJECTILE_SPEED: f32 = 2.0;
pub const PROJECTILE_GRAVITY: f32 = 1.05;
pub const PROJECTILE_BOUNCE_VELOCITY: f32 = -10.0;

/// Offset from the player's top-left corner at which a throw spawns.
pub const THROW_OFFSET: (f32, f32) = (0.0, 30.0);

// ── Pacing ────────────────────────────────────────────────────────────────────

pub const FRAME_MILLIS: u64 = 16;
