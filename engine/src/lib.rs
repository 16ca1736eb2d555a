pub mod clock;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod engine_config;
pub mod games;
pub mod input;
pub mod logger;
pub mod runner;
pub mod session;
pub mod snapshot;

pub use engine::GameEngine;
pub use engine_config::EngineConfig;
pub use games::{EndReason, EnemyKind, GameMode, SessionRng};
pub use input::{InputAdapter, InputEvent, Intent, Key};
pub use runner::{EngineCommand, EngineRunner, SnapshotBroadcaster, WatchBroadcaster};
pub use snapshot::{EngineSnapshot, EntityView, Phase};
