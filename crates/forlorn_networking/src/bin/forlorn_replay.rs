//! Replays a recorded feed capture through a bot session.
//!
//! Run with: `cargo run --bin forlorn_replay -- capture.bin --config bot.toml`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use forlorn_networking::{
    capture, telemetry, Action, Bot, ClientConfig, GameSnapshot, MapSnapshot, Session,
    SessionError,
};

#[derive(Parser)]
#[command(author, version, about = "Replay a FORLORN feed capture", long_about = None)]
struct Cli {
    /// Capture file of length-prefixed frames.
    capture: PathBuf,
    /// Client config (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop at the first frame that fails to decode.
    #[arg(long)]
    strict: bool,
}

/// Walks towards the nearest coin, if it can find itself.
struct CoinChaser {
    name: String,
}

impl Bot for CoinChaser {
    fn on_start(&mut self, map: &MapSnapshot) {
        tracing::info!("Map has {} walls", map.walls.len());
    }

    fn on_tick(&mut self, state: &GameSnapshot) -> Vec<Action> {
        let Some(me) = state.player(&self.name) else {
            return Vec::new();
        };
        state
            .coins
            .iter()
            .min_by(|a, b| {
                me.pos
                    .distance_squared(a.pos)
                    .total_cmp(&me.pos.distance_squared(b.pos))
            })
            .map(|coin| vec![Action::MoveTo(coin.pos)])
            .unwrap_or_default()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ClientConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => ClientConfig::default(),
    };
    telemetry::init_tracing(&config);

    let data = match capture::load(&cli.capture) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("{}: {}", cli.capture.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let frames = match capture::read_frames(&data) {
        Ok(frames) => frames,
        Err(e) => {
            tracing::error!("{}: {}", cli.capture.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(CoinChaser { name: config.name.clone() });
    for (index, frame) in frames.iter().enumerate() {
        match session.handle_frame(frame) {
            Ok(Some(reply)) => {
                tracing::debug!("Frame {}: replied with {} bytes", index, reply.len());
            }
            Ok(None) => {}
            Err(e) => {
                // The session already logs frames that fail to decode.
                if let SessionError::Encode(e) = &e {
                    tracing::warn!("Frame {}: {}", index, e);
                }
                if cli.strict {
                    break;
                }
            }
        }
    }

    let stats = session.stats();
    println!(
        "{} frames, {} ticks, {} action frames, {} decode errors",
        stats.frames, stats.ticks, stats.actions_sent, stats.decode_errors
    );

    if stats.decode_errors == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
