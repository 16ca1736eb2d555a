use std::time::Duration;

use crate::config::Validate;
use crate::engine_config::EngineConfig;
use crate::games::{EndReason, GameMode, SessionRng};
use crate::input::{InputAdapter, InputEvent, Key};
use crate::log;
use crate::session::{ActiveSession, SessionStep};
use crate::snapshot::{EngineSnapshot, Phase};

enum EngineState {
    Selection {
        mode: Option<GameMode>,
    },
    Active(ActiveSession),
    GameOver {
        mode: GameMode,
        final_score: u32,
        time_left: u32,
        reason: EndReason,
    },
    Unmounted,
}

/// Mini-game engine driven by an external presentation layer.
///
/// Transition methods return whether the transition happened. A request
/// that does not apply to the current state is ignored. The config is
/// validated once at construction.
pub struct GameEngine {
    state: EngineState,
    config: EngineConfig,
    rng: SessionRng,
}

impl GameEngine {
    pub fn new(config: EngineConfig, rng: SessionRng) -> Result<Self, String> {
        config.validate()?;
        log!("Engine created with seed {}", rng.seed());
        Ok(Self {
            state: EngineState::Selection { mode: None },
            config,
            rng,
        })
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            EngineState::Selection { .. } => Phase::Selection,
            EngineState::Active(_) => Phase::Active,
            EngineState::GameOver { .. } => Phase::GameOver,
            EngineState::Unmounted => Phase::Unmounted,
        }
    }

    pub fn mode(&self) -> Option<GameMode> {
        match &self.state {
            EngineState::Selection { mode } => *mode,
            EngineState::Active(session) => Some(session.mode()),
            EngineState::GameOver { mode, .. } => Some(*mode),
            EngineState::Unmounted => None,
        }
    }

    pub fn score(&self) -> u32 {
        match &self.state {
            EngineState::Active(session) => session.score(),
            EngineState::GameOver { final_score, .. } => *final_score,
            EngineState::Selection { .. } | EngineState::Unmounted => 0,
        }
    }

    pub fn time_left(&self) -> u32 {
        match &self.state {
            EngineState::Active(session) => session.time_left(),
            EngineState::GameOver { time_left, .. } => *time_left,
            EngineState::Selection { .. } | EngineState::Unmounted => self.config.round_seconds,
        }
    }

    pub fn session(&self) -> Option<&ActiveSession> {
        match &self.state {
            EngineState::Active(session) => Some(session),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> Option<&mut ActiveSession> {
        match &mut self.state {
            EngineState::Active(session) => Some(session),
            _ => None,
        }
    }

    pub fn select_mode(&mut self, mode: GameMode) -> bool {
        match &mut self.state {
            EngineState::Selection { mode: current } => {
                *current = Some(mode);
                log!("Selected {}", mode);
                true
            }
            _ => self.ignore("select_mode"),
        }
    }

    pub fn start(&mut self) -> bool {
        match self.state {
            EngineState::Selection { mode: Some(mode) } => {
                self.begin_session(mode);
                true
            }
            _ => self.ignore("start"),
        }
    }

    pub fn restart(&mut self) -> bool {
        match self.state {
            EngineState::GameOver { mode, .. } => {
                self.begin_session(mode);
                true
            }
            _ => self.ignore("restart"),
        }
    }

    pub fn back_to_selection(&mut self) -> bool {
        match self.state {
            EngineState::Unmounted => self.ignore("back_to_selection"),
            _ => {
                self.state = EngineState::Selection { mode: None };
                log!("Back to selection");
                true
            }
        }
    }

    /// Final teardown. Every later call is a no-op.
    pub fn exit(&mut self) -> bool {
        match self.state {
            EngineState::Unmounted => false,
            _ => {
                self.state = EngineState::Unmounted;
                log!("Engine exited");
                true
            }
        }
    }

    /// Moves virtual time forward. Only an active session observes it.
    pub fn advance(&mut self, dt: Duration) {
        let EngineState::Active(session) = &mut self.state else {
            return;
        };

        if let SessionStep::Ended(reason) = session.advance(dt, &mut self.rng) {
            let mode = session.mode();
            let final_score = session.score();
            let time_left = session.time_left();
            log!(
                "{} round over ({:?}) after {} ticks, final score {}",
                mode,
                reason,
                session.ticks(),
                final_score
            );
            self.state = EngineState::GameOver {
                mode,
                final_score,
                time_left,
                reason,
            };
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        let EngineState::Active(session) = &mut self.state else {
            return;
        };
        if let Some(intent) = InputAdapter::translate(session.mode(), event) {
            session.apply_intent(intent);
        }
    }

    pub fn pointer_move(&mut self, x_percent: f32) {
        self.handle_input(InputEvent::PointerMove(x_percent));
    }

    pub fn pointer_activate(&mut self) {
        self.handle_input(InputEvent::PointerActivate);
    }

    pub fn key_down(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.handle_input(InputEvent::KeyDown(key));
        }
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let (end_reason, entities) = match &self.state {
            EngineState::Active(session) => (None, session.entities()),
            EngineState::GameOver { reason, .. } => (Some(*reason), Vec::new()),
            EngineState::Selection { .. } | EngineState::Unmounted => (None, Vec::new()),
        };

        EngineSnapshot {
            phase: self.phase(),
            mode: self.mode(),
            score: self.score(),
            time_left: self.time_left(),
            end_reason,
            entities,
        }
    }

    fn begin_session(&mut self, mode: GameMode) {
        // the previous session, if any, is dropped with its timers here
        self.state = EngineState::Active(ActiveSession::start(mode, &self.config, &mut self.rng));
    }

    fn ignore(&self, action: &str) -> bool {
        log!("Ignoring {} while {:?}", action, self.phase());
        false
    }
}
