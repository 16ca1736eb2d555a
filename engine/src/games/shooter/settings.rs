use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterSettings {
    pub tick_interval_ms: u64,
    pub first_spawn_delay_ms: u64,
    pub spawn_interval_ms: u64,
    /// Percentage units a laser climbs per tick.
    pub laser_speed: f32,
    pub collision_radius: f32,
    pub points_per_hit: u32,
}

impl Default for ShooterSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: defaults::SHOOTER_TICK_INTERVAL_MS,
            first_spawn_delay_ms: defaults::SHOOTER_FIRST_SPAWN_DELAY_MS,
            spawn_interval_ms: defaults::SHOOTER_SPAWN_INTERVAL_MS,
            laser_speed: defaults::SHOOTER_LASER_SPEED,
            collision_radius: defaults::SHOOTER_COLLISION_RADIUS,
            points_per_hit: defaults::POINTS_PER_HIT,
        }
    }
}

impl Validate for ShooterSettings {
    fn validate(&self) -> Result<(), String> {
        if !(10..=1000).contains(&self.tick_interval_ms) {
            return Err("shooter.tick_interval_ms must be between 10 and 1000".to_string());
        }
        if self.spawn_interval_ms == 0 {
            return Err("shooter.spawn_interval_ms must be greater than 0".to_string());
        }
        if !(self.laser_speed.is_finite() && self.laser_speed > 0.0) {
            return Err("shooter.laser_speed must be a positive number".to_string());
        }
        if !(self.collision_radius.is_finite() && self.collision_radius > 0.0) {
            return Err("shooter.collision_radius must be a positive number".to_string());
        }
        Ok(())
    }
}
