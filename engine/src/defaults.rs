//! Stock tuning values. Every one of these can be overridden through
//! `EngineConfig`.

/// Seconds in one round (T0).
pub const ROUND_SECONDS: u32 = 30;
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;

pub const SHOOTER_TICK_INTERVAL_MS: u64 = 50;
pub const SHOOTER_FIRST_SPAWN_DELAY_MS: u64 = 500;
pub const SHOOTER_SPAWN_INTERVAL_MS: u64 = 1500;
pub const SHOOTER_LASER_SPEED: f32 = 2.0;
pub const SHOOTER_COLLISION_RADIUS: f32 = 15.0;
pub const POINTS_PER_HIT: u32 = 10;

pub const SNAKE_GRID_SIZE: usize = 20;
pub const SNAKE_TICK_INTERVAL_MS: u64 = 150;
pub const SNAKE_ENEMY_SPAWN_INTERVAL_MS: u64 = 3000;
pub const POINTS_PER_FOOD: u32 = 10;
