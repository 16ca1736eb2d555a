mod autopilot;

use std::time::Duration;

use arcade_engine::engine_config::get_config_manager;
use arcade_engine::{
    EngineCommand, EngineRunner, GameEngine, GameMode, Phase, SessionRng, WatchBroadcaster, log,
    logger,
};
use autopilot::Autopilot;
use clap::Parser;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "arcade_runner", about = "Headless host for the arcade mini-game engine")]
struct Args {
    /// Game to play: shooter or snake
    #[arg(long, default_value = "shooter")]
    mode: GameMode,

    /// Seed for spawn randomness; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML engine config
    #[arg(long)]
    config: Option<String>,

    /// Let a bot play
    #[arg(long)]
    autoplay: bool,

    /// Write every snapshot to stdout as one JSON line
    #[arg(long)]
    json: bool,

    /// Rounds to play before exiting
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Frame cadence of the real-time driver
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config.as_deref()).get_config()?;
    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    let engine = GameEngine::new(config.clone(), rng)?;

    let (broadcaster, mut snapshots) = WatchBroadcaster::new(engine.snapshot());
    let runner = EngineRunner::new(engine, broadcaster, Duration::from_millis(args.frame_ms));
    let (commands, command_receiver) = mpsc::channel(64);
    let runner_handle = tokio::spawn(runner.run(command_receiver));

    commands.send(EngineCommand::SelectMode(args.mode)).await?;
    commands.send(EngineCommand::Start).await?;

    let mut autopilot = args.autoplay.then(|| Autopilot::new(args.mode, &config));
    let rounds = args.rounds.max(1);
    let mut rounds_played = 0;
    let mut round_reported = false;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                if args.json {
                    println!("{}", serde_json::to_string(&snapshot)?);
                }

                match snapshot.phase {
                    Phase::Active => {
                        round_reported = false;
                        if let Some(autopilot) = autopilot.as_mut() {
                            for event in autopilot.plan(&snapshot) {
                                commands.send(EngineCommand::Input(event)).await?;
                            }
                        }
                    }
                    Phase::GameOver if !round_reported => {
                        round_reported = true;
                        rounds_played += 1;
                        log!(
                            "Round {}/{} over: {} points ({:?})",
                            rounds_played,
                            rounds,
                            snapshot.score,
                            snapshot.end_reason
                        );
                        if !args.json {
                            println!("round {}: {} points", rounds_played, snapshot.score);
                        }
                        let next = if rounds_played < rounds {
                            EngineCommand::Restart
                        } else {
                            EngineCommand::Exit
                        };
                        commands.send(next).await?;
                    }
                    Phase::Unmounted => break,
                    _ => {}
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log!("Interrupted, exiting engine");
                // the runner may already be gone
                let _ = commands.send(EngineCommand::Exit).await;
            }
        }
    }

    let last = runner_handle.await?;
    log!("Engine stopped after {} round(s), last phase {:?}", rounds_played, last.phase);

    Ok(())
}
