use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    /// Side of the square toroidal grid.
    pub grid_size: usize,
    pub tick_interval_ms: u64,
    pub enemy_spawn_interval_ms: u64,
    pub points_per_food: u32,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: defaults::SNAKE_GRID_SIZE,
            tick_interval_ms: defaults::SNAKE_TICK_INTERVAL_MS,
            enemy_spawn_interval_ms: defaults::SNAKE_ENEMY_SPAWN_INTERVAL_MS,
            points_per_food: defaults::POINTS_PER_FOOD,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(5..=100).contains(&self.grid_size) {
            return Err("snake.grid_size must be between 5 and 100".to_string());
        }
        if !(10..=1000).contains(&self.tick_interval_ms) {
            return Err("snake.tick_interval_ms must be between 10 and 1000".to_string());
        }
        if self.enemy_spawn_interval_ms == 0 {
            return Err("snake.enemy_spawn_interval_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}
