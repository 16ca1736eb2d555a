use std::ops::RangeInclusive;

mod bot_controller;
mod entity;
mod game_state;
mod settings;

pub use bot_controller::ShooterBot;
pub use entity::{Enemy, Laser, Player, Position};
pub use game_state::ShooterGameState;
pub use settings::ShooterSettings;

/// Fixed vertical position of the player ship, percent of field height.
pub const PLAYER_Y: f32 = 85.0;
pub const PLAYER_START_X: f32 = 50.0;
pub const MIN_X: f32 = 5.0;
pub const MAX_X: f32 = 95.0;
/// Distance a keyboard nudge moves the player.
pub const KEY_STEP: f32 = 5.0;

pub const LASER_SPAWN_OFFSET: f32 = 5.0;
pub const LASER_EXIT_Y: f32 = -5.0;
pub const LASER_WIDTH: f32 = 3.0;
pub const LASER_HEIGHT: f32 = 15.0;

pub const FIELD_BOTTOM: f32 = 100.0;
pub const ENEMY_SIZE: f32 = 30.0;
pub const MIN_ENEMY_SPEED: f32 = 0.5;
pub const MAX_ENEMY_SPEED: f32 = 1.5;

/// Spawn column range, both ends reachable.
pub const ENEMY_X_RANGE: RangeInclusive<f32> = RangeInclusive::new(MIN_X, MAX_X);
pub const ENEMY_SPEED_RANGE: RangeInclusive<f32> = RangeInclusive::new(MIN_ENEMY_SPEED, MAX_ENEMY_SPEED);
