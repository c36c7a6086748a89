//! # Game Constants
//!
//! Server-side simulation parameters, mirrored so bots can plan without
//! guessing. The server is authoritative; these values only describe it.

// =============================================================================
// GAME
// =============================================================================

/// Server ticks per second.
pub const TICK_RATE: u32 = 30;

/// Ticks in one round.
pub const TICKS_PER_ROUND: u32 = 5 * 60 * 3 * 10;

/// Ticks before the point-rush stage begins.
pub const TICKS_POINT_RUSH_STAGE: u32 = 4 * 60 * 3 * 10;

// =============================================================================
// MAP
// =============================================================================

/// Map width and height, in cells.
pub const MAP_CELLS: usize = 10;

/// Width of one cell, in world units.
pub const CELL_WIDTH: u32 = 10;

/// Subsquares per cell side.
pub const NUM_SUBSQUARE: f64 = 9.0;

/// Width of one subsquare, in world units.
pub const SUBSQUARE_WIDTH: f64 = 10.0 / NUM_SUBSQUARE;

/// Size of the opaque per-bot save blob echoed in every map message.
pub const SAVE_SIZE: usize = 100;

// =============================================================================
// PLAYER
// =============================================================================

/// Player diameter.
pub const PLAYER_SIZE: f64 = 1.0;

/// Starting health.
pub const PLAYER_HEALTH: i32 = 100;

/// Distance travelled per tick.
pub const PLAYER_SPEED: f64 = 1.15;

/// Seconds before an eliminated player respawns.
pub const RESPAWN_TIME: f64 = 5.0;

// =============================================================================
// WEAPONS
// =============================================================================

/// Projectile diameter.
pub const PROJECTILE_SIZE: f64 = 0.35;

/// Damage dealt by one projectile hit.
pub const PROJECTILE_DAMAGE: i32 = 15;

/// Projectile travel speed.
pub const PROJECTILE_SPEED: f64 = 3.0;

/// Projectile lifetime in seconds.
pub const PROJECTILE_TTL: f64 = 5.0;

/// Blade length, measured from the player centre.
pub const BLADE_SIZE: f64 = PLAYER_SIZE / 2.0 + 1.5;

/// Damage dealt by one blade hit.
pub const BLADE_DAMAGE: i32 = 4;

/// Blade rotation speed, degrees per second.
pub const BLADE_ROTATION_SPEED: f64 = 230.0;

// =============================================================================
// COINS & SCORE
// =============================================================================

/// Coin diameter.
pub const COIN_SIZE: f64 = 0.5;

/// Score for picking up a coin.
pub const COIN_VALUE: i32 = 40;

/// Coins on the map at once.
pub const NUM_COINS: usize = 30;

/// Big coin (treasure) diameter.
pub const BIG_COIN_SIZE: f64 = 4.0;

/// Score for picking up the big coin.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const BIG_COIN_VALUE: i32 = NUM_COINS as i32 * COIN_VALUE;

/// Score for hitting an opponent with a projectile.
pub const SCORE_ON_HIT_WITH_PROJECTILE: i64 = 15;

/// Score for hitting an opponent with the blade.
pub const SCORE_ON_HIT_WITH_BLADE: i64 = 10;
