use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Shooter,
    Snake,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Shooter => write!(f, "shooter"),
            GameMode::Snake => write!(f, "snake"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shooter" => Ok(GameMode::Shooter),
            "snake" => Ok(GameMode::Snake),
            other => Err(format!("Unknown game mode: {}", other)),
        }
    }
}

/// Cosmetic enemy look, shared by both games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Pirate,
    Ufo,
    Bat,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Pirate, EnemyKind::Ufo, EnemyKind::Bat];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    TimeExpired,
    SelfCollision,
    EnemyCollision,
}

pub enum GameTickResult {
    Continue,
    GameOver(EndReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_mode_parse_is_case_insensitive() {
        assert_eq!("Shooter".parse::<GameMode>(), Ok(GameMode::Shooter));
        assert_eq!("SNAKE".parse::<GameMode>(), Ok(GameMode::Snake));
        assert!("pong".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_game_mode_display_round_trips() {
        for mode in [GameMode::Shooter, GameMode::Snake] {
            assert_eq!(mode.to_string().parse::<GameMode>(), Ok(mode));
        }
    }
}
