use arcade_engine::games::shooter::ShooterBot;
use arcade_engine::games::snake::SnakeBot;
use arcade_engine::{EngineConfig, EngineSnapshot, GameMode, InputEvent};

/// Plans between fire attempts of the shooter bot.
const SHOOTER_FIRE_COOLDOWN: u32 = 4;

pub enum Autopilot {
    Shooter(ShooterBot),
    Snake(SnakeBot),
}

impl Autopilot {
    pub fn new(mode: GameMode, config: &EngineConfig) -> Self {
        match mode {
            GameMode::Shooter => Autopilot::Shooter(ShooterBot::new(SHOOTER_FIRE_COOLDOWN)),
            GameMode::Snake => Autopilot::Snake(SnakeBot::new(config.snake.grid_size)),
        }
    }

    pub fn plan(&mut self, snapshot: &EngineSnapshot) -> Vec<InputEvent> {
        match self {
            Autopilot::Shooter(bot) => bot.plan(snapshot),
            Autopilot::Snake(bot) => bot.plan(snapshot).into_iter().collect(),
        }
    }
}
