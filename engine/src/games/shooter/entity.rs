use crate::games::EnemyKind;

use super::{ENEMY_SIZE, LASER_HEIGHT, LASER_WIDTH, MAX_X, MIN_X, PLAYER_START_X, PLAYER_Y};

/// Point in percentage space: `x` and `y` both run 0..=100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Position,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: Position::new(PLAYER_START_X, PLAYER_Y),
        }
    }

    pub fn move_to(&mut self, x: f32) {
        if x.is_finite() {
            self.position.x = x.clamp(MIN_X, MAX_X);
        }
    }

    pub fn move_by(&mut self, dx: f32) {
        self.move_to(self.position.x + dx);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: u64,
    pub position: Position,
    pub size: f32,
    pub speed: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn new(id: u64, position: Position, speed: f32, kind: EnemyKind) -> Self {
        Self {
            id,
            position,
            size: ENEMY_SIZE,
            speed,
            kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Laser {
    pub id: u64,
    pub position: Position,
    pub width: f32,
    pub height: f32,
}

impl Laser {
    pub fn new(id: u64, position: Position) -> Self {
        Self {
            id,
            position,
            width: LASER_WIDTH,
            height: LASER_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_move_is_clamped() {
        let mut player = Player::new();
        player.move_to(120.0);
        assert_eq!(player.position.x, MAX_X);
        player.move_to(-3.0);
        assert_eq!(player.position.x, MIN_X);
        player.move_by(-5.0);
        assert_eq!(player.position.x, MIN_X);
    }

    #[test]
    fn test_player_ignores_non_finite_target() {
        let mut player = Player::new();
        player.move_to(f32::NAN);
        assert_eq!(player.position.x, PLAYER_START_X);
    }

    #[test]
    fn test_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }
}
