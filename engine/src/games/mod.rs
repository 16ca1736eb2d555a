mod session_rng;
mod types;

pub mod shooter;
pub mod snake;

pub use session_rng::SessionRng;
pub use types::{EndReason, EnemyKind, GameMode, GameTickResult};

use crate::engine_config::EngineConfig;
use crate::input::Intent;
use crate::snapshot::EntityView;
use shooter::ShooterGameState;
use snake::SnakeGameState;

/// Per-mode rules plugged into the shared session loop.
pub trait GameLogic {
    /// One motion & collision step.
    fn update(&mut self, rng: &mut SessionRng) -> GameTickResult;

    fn spawn_enemy(&mut self, rng: &mut SessionRng);

    /// Intents the mode does not understand are ignored.
    fn apply_intent(&mut self, intent: Intent);

    fn score(&self) -> u32;

    fn entities(&self) -> Vec<EntityView>;
}

pub enum GameVariant {
    Shooter(ShooterGameState),
    Snake(SnakeGameState),
}

impl GameVariant {
    /// Builds a fresh entity model for `mode`.
    pub fn new(mode: GameMode, config: &EngineConfig, rng: &mut SessionRng) -> Self {
        match mode {
            GameMode::Shooter => GameVariant::Shooter(ShooterGameState::new(config.shooter.clone())),
            GameMode::Snake => GameVariant::Snake(SnakeGameState::new(config.snake.clone(), rng)),
        }
    }

    pub fn mode(&self) -> GameMode {
        match self {
            GameVariant::Shooter(_) => GameMode::Shooter,
            GameVariant::Snake(_) => GameMode::Snake,
        }
    }

    pub fn logic(&self) -> &dyn GameLogic {
        match self {
            GameVariant::Shooter(s) => s,
            GameVariant::Snake(s) => s,
        }
    }

    pub fn logic_mut(&mut self) -> &mut dyn GameLogic {
        match self {
            GameVariant::Shooter(s) => s,
            GameVariant::Snake(s) => s,
        }
    }
}
