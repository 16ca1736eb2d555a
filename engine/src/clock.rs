use std::time::Duration;

use crate::defaults;
use crate::engine_config::EngineConfig;
use crate::games::GameMode;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Timer cadences for one session.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockSettings {
    pub tick_interval: Duration,
    pub first_spawn_delay: Duration,
    pub spawn_interval: Duration,
    pub countdown_interval: Duration,
}

impl ClockSettings {
    pub fn for_mode(mode: GameMode, config: &EngineConfig) -> Self {
        let countdown_interval = Duration::from_millis(defaults::COUNTDOWN_INTERVAL_MS);
        match mode {
            GameMode::Shooter => Self {
                tick_interval: Duration::from_millis(config.shooter.tick_interval_ms),
                first_spawn_delay: Duration::from_millis(config.shooter.first_spawn_delay_ms),
                spawn_interval: Duration::from_millis(config.shooter.spawn_interval_ms),
                countdown_interval,
            },
            GameMode::Snake => {
                let spawn_interval = Duration::from_millis(config.snake.enemy_spawn_interval_ms);
                Self {
                    tick_interval: Duration::from_millis(config.snake.tick_interval_ms),
                    first_spawn_delay: spawn_interval,
                    spawn_interval,
                    countdown_interval,
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Duration,
}

impl RepeatingTimer {
    pub fn new(period: Duration) -> Self {
        Self::with_initial_delay(period, period)
    }

    pub fn with_initial_delay(delay: Duration, period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next_due: delay,
        }
    }

    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    fn fire(&mut self) {
        self.next_due += self.period;
    }
}

/// Timer kinds. The declaration order breaks ties between timers due at
/// the same instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClockEvent {
    Tick,
    Spawn,
    Countdown,
}

/// Virtual clock of one session: simulation tick, spawn cadence and the
/// one-second countdown. Time only moves through `next_event`/`settle`.
#[derive(Clone, Debug)]
pub struct GameClock {
    elapsed: Duration,
    tick: RepeatingTimer,
    spawn: RepeatingTimer,
    countdown: RepeatingTimer,
}

impl GameClock {
    pub fn new(settings: &ClockSettings) -> Self {
        Self {
            elapsed: Duration::ZERO,
            tick: RepeatingTimer::new(settings.tick_interval),
            spawn: RepeatingTimer::with_initial_delay(settings.first_spawn_delay, settings.spawn_interval),
            countdown: RepeatingTimer::new(settings.countdown_interval),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn timer_mut(&mut self, event: ClockEvent) -> &mut RepeatingTimer {
        match event {
            ClockEvent::Tick => &mut self.tick,
            ClockEvent::Spawn => &mut self.spawn,
            ClockEvent::Countdown => &mut self.countdown,
        }
    }

    /// Fires the earliest timer due at or before `until` and moves the
    /// clock to its due time.
    pub fn next_event(&mut self, until: Duration) -> Option<ClockEvent> {
        let (due, event) = [
            (self.tick.next_due(), ClockEvent::Tick),
            (self.spawn.next_due(), ClockEvent::Spawn),
            (self.countdown.next_due(), ClockEvent::Countdown),
        ]
        .into_iter()
        .min()?;

        if due > until {
            return None;
        }

        self.elapsed = self.elapsed.max(due);
        self.timer_mut(event).fire();
        Some(event)
    }

    /// Moves the clock to `until` once every due timer has fired.
    pub fn settle(&mut self, until: Duration) {
        self.elapsed = self.elapsed.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(clock: &mut GameClock, until: Duration) -> Vec<(Duration, ClockEvent)> {
        let mut events = Vec::new();
        while let Some(event) = clock.next_event(until) {
            events.push((clock.elapsed(), event));
        }
        clock.settle(until);
        events
    }

    #[test]
    fn test_shooter_cadence() {
        let settings = ClockSettings::for_mode(GameMode::Shooter, &EngineConfig::default());
        let mut clock = GameClock::new(&settings);

        let events = drain(&mut clock, Duration::from_millis(2000));

        let ticks = events.iter().filter(|(_, e)| *e == ClockEvent::Tick).count();
        let spawns: Vec<Duration> = events
            .iter()
            .filter(|(_, e)| *e == ClockEvent::Spawn)
            .map(|(at, _)| *at)
            .collect();
        let countdowns = events.iter().filter(|(_, e)| *e == ClockEvent::Countdown).count();

        assert_eq!(ticks, 40);
        assert_eq!(spawns, vec![Duration::from_millis(500), Duration::from_millis(2000)]);
        assert_eq!(countdowns, 2);
        assert_eq!(clock.elapsed(), Duration::from_millis(2000));
    }

    #[test]
    fn test_ties_fire_tick_before_countdown() {
        let settings = ClockSettings::for_mode(GameMode::Snake, &EngineConfig::default());
        let mut clock = GameClock::new(&settings);

        let events = drain(&mut clock, Duration::from_millis(3000));
        let at_3000: Vec<ClockEvent> = events
            .iter()
            .filter(|(at, _)| *at == Duration::from_millis(3000))
            .map(|(_, e)| *e)
            .collect();

        assert_eq!(at_3000, vec![ClockEvent::Tick, ClockEvent::Spawn, ClockEvent::Countdown]);
    }

    #[test]
    fn test_events_are_time_ordered_across_calls() {
        let settings = ClockSettings::for_mode(GameMode::Snake, &EngineConfig::default());
        let mut clock = GameClock::new(&settings);

        assert!(drain(&mut clock, Duration::from_millis(149)).is_empty());
        let events = drain(&mut clock, Duration::from_millis(300));
        assert_eq!(
            events,
            vec![
                (Duration::from_millis(150), ClockEvent::Tick),
                (Duration::from_millis(300), ClockEvent::Tick),
            ]
        );
    }

    #[test]
    fn test_zero_period_does_not_stall() {
        let mut timer = RepeatingTimer::new(Duration::ZERO);
        let before = timer.next_due();
        timer.fire();
        assert!(timer.next_due() > before);
    }
}
