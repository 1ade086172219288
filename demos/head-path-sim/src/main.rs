//! Headless exercise session driver.
//!
//! Runs a full session against a scripted head: the head idles, shakes the
//! device to start, then turns toward each target in turn. Snapshots are
//! printed as status lines and audio cues go to the log.
//!
//! # Usage
//!
//! ```text
//! head-path-sim --repetitions 3
//! head-path-sim --config session.json --hz 30 --every 5
//! RUST_LOG=debug head-path-sim --mute
//! ```
//!
//! The config file is JSON with optional `session` and `cues` sections;
//! anything left out keeps its default.

mod render;
mod script;
mod sink;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use audio_cues::{AudioSink, CueConfig, SilentSink};
use clap::Parser;
use exercise_session::{ManualClock, OnComplete, SessionEngine};
use exercise_types::{SessionConfig, SessionState};
use sensor_types::Duration;
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use script::ScriptedHead;
use sink::LoggingSink;

/// Drive an exercise session with a scripted head.
#[derive(Parser, Debug)]
#[command(name = "head-path-sim")]
#[command(about = "Simulate a motion-guided exercise session", long_about = None)]
#[command(version)]
struct Args {
    /// JSON file with `session` and `cues` settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of repetitions
    #[arg(long)]
    repetitions: Option<u32>,

    /// Frames per simulated second
    #[arg(long, default_value_t = 60)]
    hz: u32,

    /// Give up after this many frames
    #[arg(long, default_value_t = 20_000)]
    frames: u64,

    /// Frames of stillness before the start shake
    #[arg(long, default_value_t = 30)]
    idle: u32,

    /// How fast the head turns, in degrees per frame
    #[arg(long, default_value_t = 2.0)]
    turn_rate: f64,

    /// Print a status line every N frames (events always print)
    #[arg(long, default_value_t = 10)]
    every: u64,

    /// Disable audio output
    #[arg(long)]
    mute: bool,
}

/// Contents of the `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    session: SessionConfig,
    cues: CueConfig,
}

impl FileConfig {
    fn load(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => Self::default(),
        };
        if let Some(repetitions) = args.repetitions {
            config.session.target_repetitions = repetitions;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.hz == 0 {
        bail!("--hz must be positive");
    }
    if !(args.turn_rate.is_finite() && args.turn_rate > 0.0) {
        bail!("--turn-rate must be a positive number of degrees");
    }

    let config = FileConfig::load(&args)?;
    info!(
        targets = config.session.path.len(),
        repetitions = config.session.target_repetitions,
        "loaded configuration"
    );

    let sink: Box<dyn AudioSink> = if args.mute {
        Box::new(SilentSink)
    } else {
        Box::new(LoggingSink::new())
    };
    let clock = ManualClock::new();
    let frame_time = Duration::from_nanos(1_000_000_000 / u64::from(args.hz));

    let mut engine = SessionEngine::new(config.session, config.cues, sink, Box::new(clock.clone()))
        .context("building session engine")?
        .with_observer(Box::new(OnComplete(|score| {
            info!(final_score = score, "session complete");
        })));

    let mut head = ScriptedHead::new(args.idle, args.turn_rate);
    let mut previous = engine.snapshot();
    println!("{}", render::status_line(0, &previous));

    for frame in 1..=args.frames {
        clock.advance(frame_time);

        let target = engine
            .path()
            .get(previous.current_target_index)
            .context("target index outside the path")?;
        let (orientation, motion) = head.next_frame(target);
        let snapshot = engine.on_tick(&orientation, &motion);

        let changed = snapshot.state != previous.state
            || snapshot.current_target_index != previous.current_target_index;
        if changed || frame % args.every.max(1) == 0 {
            println!("{}", render::status_line(frame, &snapshot));
        }
        previous = snapshot;

        if snapshot.state == SessionState::Completed {
            break;
        }
    }

    // Let the closing fanfare finish.
    while engine.pending_cues() > 0 {
        clock.advance(frame_time);
        engine.pump_audio();
    }

    if previous.state == SessionState::Completed {
        println!(
            "completed {} repetitions, score {}",
            previous.repetitions, previous.score
        );
    } else {
        warn!(frames = args.frames, "frame budget ran out before completion");
        println!(
            "stopped after {} frames: {}/{} repetitions, score {}",
            args.frames, previous.repetitions, previous.target_repetitions, previous.score
        );
    }

    Ok(())
}
