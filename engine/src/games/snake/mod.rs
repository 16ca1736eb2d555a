mod bot_controller;
mod game_state;
mod settings;
mod snake;
mod types;

pub use bot_controller::SnakeBot;
pub use game_state::{SnakeEnemy, SnakeGameState};
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use types::{Axis, Direction, Point};

/// Attempts at rejection sampling a free cell before falling back to
/// enumerating the free cells.
pub const MAX_SPAWN_ATTEMPTS: usize = 100;
pub const INITIAL_LENGTH: usize = 3;
