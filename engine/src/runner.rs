use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior, interval};

use crate::engine::GameEngine;
use crate::games::GameMode;
use crate::input::InputEvent;
use crate::log;
use crate::snapshot::{EngineSnapshot, Phase};

const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

pub trait SnapshotBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: EngineSnapshot) -> impl Future<Output = ()> + Send;
}

/// Publishes the latest snapshot on a `watch` channel; slow readers only
/// ever see the newest state.
#[derive(Clone)]
pub struct WatchBroadcaster {
    sender: Arc<watch::Sender<EngineSnapshot>>,
}

impl WatchBroadcaster {
    pub fn new(initial: EngineSnapshot) -> (Self, watch::Receiver<EngineSnapshot>) {
        let (sender, receiver) = watch::channel(initial);
        (
            Self {
                sender: Arc::new(sender),
            },
            receiver,
        )
    }
}

impl SnapshotBroadcaster for WatchBroadcaster {
    async fn broadcast_state(&self, snapshot: EngineSnapshot) {
        // no receivers left is fine, the runner keeps going until exit
        let _ = self.sender.send(snapshot);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EngineCommand {
    SelectMode(GameMode),
    Start,
    Restart,
    BackToSelection,
    Exit,
    Input(InputEvent),
}

/// Drives a `GameEngine` in real time on the tokio runtime.
///
/// Wall-clock time measured on a fixed frame cadence is fed to the
/// engine's virtual clock. Commands are applied between frames, after the
/// engine has been brought up to the current instant.
pub struct EngineRunner<B: SnapshotBroadcaster> {
    engine: Arc<Mutex<GameEngine>>,
    broadcaster: B,
    frame_interval: Duration,
}

impl<B: SnapshotBroadcaster> EngineRunner<B> {
    pub fn new(engine: GameEngine, broadcaster: B, frame_interval: Duration) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            broadcaster,
            frame_interval: frame_interval.max(MIN_FRAME_INTERVAL),
        }
    }

    pub fn engine(&self) -> Arc<Mutex<GameEngine>> {
        self.engine.clone()
    }

    /// Runs until the engine is exited or every command sender is gone.
    /// Returns the last snapshot.
    pub async fn run(self, mut commands: mpsc::Receiver<EngineCommand>) -> EngineSnapshot {
        let mut frame_timer = interval(self.frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_instant = Instant::now();

        loop {
            tokio::select! {
                _ = frame_timer.tick() => {
                    let snapshot = {
                        let mut engine = self.engine.lock().await;
                        let was_active = engine.phase() == Phase::Active;
                        last_instant = Self::catch_up(&mut engine, last_instant);
                        was_active.then(|| engine.snapshot())
                    };
                    if let Some(snapshot) = snapshot {
                        self.broadcaster.broadcast_state(snapshot).await;
                    }
                }
                command = commands.recv() => {
                    let snapshot = {
                        let mut engine = self.engine.lock().await;
                        last_instant = Self::catch_up(&mut engine, last_instant);
                        match command {
                            Some(command) => Self::apply(&mut engine, command),
                            None => {
                                log!("Command channel closed, shutting engine down");
                                engine.exit();
                            }
                        }
                        engine.snapshot()
                    };
                    let unmounted = snapshot.phase == Phase::Unmounted;
                    self.broadcaster.broadcast_state(snapshot).await;
                    if unmounted {
                        break;
                    }
                }
            }
        }

        self.engine.lock().await.snapshot()
    }

    fn catch_up(engine: &mut GameEngine, last_instant: Instant) -> Instant {
        let now = Instant::now();
        engine.advance(now.saturating_duration_since(last_instant));
        now
    }

    fn apply(engine: &mut GameEngine, command: EngineCommand) {
        match command {
            EngineCommand::SelectMode(mode) => {
                engine.select_mode(mode);
            }
            EngineCommand::Start => {
                engine.start();
            }
            EngineCommand::Restart => {
                engine.restart();
            }
            EngineCommand::BackToSelection => {
                engine.back_to_selection();
            }
            EngineCommand::Exit => {
                engine.exit();
            }
            EngineCommand::Input(event) => engine.handle_input(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_config::EngineConfig;
    use crate::games::SessionRng;

    fn spawn_runner() -> (
        mpsc::Sender<EngineCommand>,
        watch::Receiver<EngineSnapshot>,
        Arc<Mutex<GameEngine>>,
        tokio::task::JoinHandle<EngineSnapshot>,
    ) {
        spawn_runner_with_frame(Duration::from_millis(10))
    }

    fn spawn_runner_with_frame(frame_interval: Duration) -> (
        mpsc::Sender<EngineCommand>,
        watch::Receiver<EngineSnapshot>,
        Arc<Mutex<GameEngine>>,
        tokio::task::JoinHandle<EngineSnapshot>,
    ) {
        let engine = GameEngine::new(EngineConfig::default(), SessionRng::new(5)).unwrap();
        let (broadcaster, receiver) = WatchBroadcaster::new(engine.snapshot());
        let runner = EngineRunner::new(engine, broadcaster, frame_interval);
        let shared = runner.engine();
        let (sender, commands) = mpsc::channel(16);
        let handle = tokio::spawn(runner.run(commands));
        (sender, receiver, shared, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_expires_in_real_time() {
        let (sender, receiver, _, handle) = spawn_runner();
        sender.send(EngineCommand::SelectMode(GameMode::Shooter)).await.unwrap();
        sender.send(EngineCommand::Start).await.unwrap();

        tokio::time::sleep(Duration::from_millis(10_500)).await;
        assert_eq!(receiver.borrow().phase, Phase::Active);
        let time_left = receiver.borrow().time_left;
        assert!((19..=20).contains(&time_left), "time_left was {}", time_left);

        tokio::time::sleep(Duration::from_secs(21)).await;
        assert_eq!(receiver.borrow().phase, Phase::GameOver);
        assert_eq!(receiver.borrow().time_left, 0);

        sender.send(EngineCommand::Exit).await.unwrap();
        let last = handle.await.unwrap();
        assert_eq!(last.phase, Phase::Unmounted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_to_selection_stops_the_clock() {
        let (sender, receiver, engine, handle) = spawn_runner();
        sender.send(EngineCommand::SelectMode(GameMode::Snake)).await.unwrap();
        sender.send(EngineCommand::Start).await.unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
        sender.send(EngineCommand::BackToSelection).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let before = engine.lock().await.snapshot();
        tokio::time::sleep(Duration::from_secs(5)).await;
        let after = engine.lock().await.snapshot();

        assert_eq!(before.phase, Phase::Selection);
        assert_eq!(before, after);
        assert_eq!(receiver.borrow().phase, Phase::Selection);

        drop(sender);
        let last = handle.await.unwrap();
        assert_eq!(last.phase, Phase::Unmounted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_reaches_active_session() {
        let (sender, _receiver, engine, handle) = spawn_runner();
        sender.send(EngineCommand::SelectMode(GameMode::Shooter)).await.unwrap();
        sender.send(EngineCommand::Start).await.unwrap();
        sender.send(EngineCommand::Input(InputEvent::PointerMove(20.0))).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        let snapshot = engine.lock().await.snapshot();
        assert!(snapshot.entities.iter().any(|e| matches!(
            e,
            crate::snapshot::EntityView::Player { x, .. } if *x == 20.0
        )));

        sender.send(EngineCommand::Exit).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_frame_interval_still_runs() {
        let (sender, receiver, _, handle) = spawn_runner_with_frame(Duration::ZERO);
        sender.send(EngineCommand::SelectMode(GameMode::Snake)).await.unwrap();
        sender.send(EngineCommand::Start).await.unwrap();
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(receiver.borrow().phase, Phase::Active);
        assert_eq!(receiver.borrow().time_left, 29);

        sender.send(EngineCommand::Exit).await.unwrap();
        assert_eq!(handle.await.unwrap().phase, Phase::Unmounted);
    }
}
