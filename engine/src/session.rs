use std::time::Duration;

use crate::clock::{ClockEvent, ClockSettings, GameClock};
use crate::engine_config::EngineConfig;
use crate::games::{EndReason, GameMode, GameTickResult, GameVariant, SessionRng};
use crate::input::Intent;
use crate::log;
use crate::snapshot::EntityView;

pub enum SessionStep {
    Running,
    Ended(EndReason),
}

/// One Active-state lifetime. Owns the entity model and every timer of
/// the round; leaving Active means dropping this value, which stops them.
pub struct ActiveSession {
    game: GameVariant,
    clock: GameClock,
    time_left: u32,
    ticks: u64,
}

impl ActiveSession {
    pub fn start(mode: GameMode, config: &EngineConfig, rng: &mut SessionRng) -> Self {
        let settings = ClockSettings::for_mode(mode, config);
        log!(
            "Starting {} session: {}s round, tick every {}ms",
            mode,
            config.round_seconds,
            settings.tick_interval.as_millis()
        );

        Self {
            game: GameVariant::new(mode, config, rng),
            clock: GameClock::new(&settings),
            time_left: config.round_seconds,
            ticks: 0,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.game.mode()
    }

    pub fn score(&self) -> u32 {
        self.game.logic().score()
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub fn game_mut(&mut self) -> &mut GameVariant {
        &mut self.game
    }

    pub fn entities(&self) -> Vec<EntityView> {
        self.game.logic().entities()
    }

    pub fn apply_intent(&mut self, intent: Intent) {
        self.game.logic_mut().apply_intent(intent);
    }

    /// Runs every timer due within the next `dt`, in due-time order. Stops
    /// at the first event that ends the round; later timers never fire.
    pub fn advance(&mut self, dt: Duration, rng: &mut SessionRng) -> SessionStep {
        let until = self.clock.elapsed().saturating_add(dt);

        while let Some(event) = self.clock.next_event(until) {
            if let SessionStep::Ended(reason) = self.handle_event(event, rng) {
                return SessionStep::Ended(reason);
            }
        }

        self.clock.settle(until);
        SessionStep::Running
    }

    fn handle_event(&mut self, event: ClockEvent, rng: &mut SessionRng) -> SessionStep {
        match event {
            ClockEvent::Tick => {
                self.ticks += 1;
                match self.game.logic_mut().update(rng) {
                    GameTickResult::Continue => SessionStep::Running,
                    GameTickResult::GameOver(reason) => SessionStep::Ended(reason),
                }
            }
            ClockEvent::Spawn => {
                self.game.logic_mut().spawn_enemy(rng);
                SessionStep::Running
            }
            ClockEvent::Countdown => {
                self.time_left = self.time_left.saturating_sub(1);
                if self.time_left == 0 {
                    SessionStep::Ended(EndReason::TimeExpired)
                } else {
                    SessionStep::Running
                }
            }
        }
    }
}
