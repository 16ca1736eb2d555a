use crate::input::InputEvent;
use crate::snapshot::{EngineSnapshot, EntityView, Phase};

use super::{PLAYER_START_X, PLAYER_Y};

/// Horizontal distance under which the bot considers itself lined up.
const ALIGN_TOLERANCE: f32 = 4.0;

/// Autopilot for the shooter: chases the enemy closest to the ship and
/// fires when lined up, at most once every `fire_cooldown` plans.
pub struct ShooterBot {
    fire_cooldown: u32,
    cooldown_left: u32,
}

impl ShooterBot {
    pub fn new(fire_cooldown: u32) -> Self {
        Self {
            fire_cooldown,
            cooldown_left: 0,
        }
    }

    pub fn plan(&mut self, snapshot: &EngineSnapshot) -> Vec<InputEvent> {
        if snapshot.phase != Phase::Active {
            return Vec::new();
        }

        self.cooldown_left = self.cooldown_left.saturating_sub(1);

        let player_x = snapshot
            .entities
            .iter()
            .find_map(|entity| match entity {
                EntityView::Player { x, .. } => Some(*x),
                _ => None,
            })
            .unwrap_or(PLAYER_START_X);

        let Some(target_x) = Self::closest_threat(snapshot) else {
            return Vec::new();
        };

        let mut events = vec![InputEvent::PointerMove(target_x)];
        if (target_x - player_x).abs() < ALIGN_TOLERANCE && self.cooldown_left == 0 {
            events.push(InputEvent::PointerActivate);
            self.cooldown_left = self.fire_cooldown;
        }
        events
    }

    /// Lowest enemy still above the ship.
    fn closest_threat(snapshot: &EngineSnapshot) -> Option<f32> {
        snapshot
            .entities
            .iter()
            .filter_map(|entity| match entity {
                EntityView::Enemy { x, y, .. } if *y < PLAYER_Y => Some((*x, *y)),
                _ => None,
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(x, _)| x)
    }
}
