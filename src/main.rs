//! Lane scorer (default binary).
//!
//! Reads one shot per line from stdin and prints the next-shot prompt after
//! each ball. Shots are pin counts or score sheet marks (`X`, `/`, `-`).

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bowling_scorer::input::{parse_names, parse_shot, should_quit};
use bowling_scorer::session::{MultiplayerSession, SessionConfig};
use bowling_scorer::term::{Scoreboard, TerminalRenderer};
use bowling_scorer::types::RotationPolicy;

#[derive(Parser)]
#[command(name = "bowling")]
#[command(about = "Score a ten-pin bowling session shot by shot")]
struct Args {
    /// Players in turn order (comma separated); read from the first input line when omitted
    #[arg(short, long, env = "BOWLING_PLAYERS", value_delimiter = ',')]
    players: Vec<String>,

    /// When the lane passes to the next player
    #[arg(long, env = "BOWLING_ROTATION", value_enum, default_value = "per-frame")]
    rotation: Rotation,

    /// Print the final session as JSON instead of a score sheet
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    plain: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rotation {
    PerFrame,
    PerRoll,
}

impl From<Rotation> for RotationPolicy {
    fn from(value: Rotation) -> Self {
        match value {
            Rotation::PerFrame => RotationPolicy::PerFrame,
            Rotation::PerRoll => RotationPolicy::PerRoll,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut renderer = TerminalRenderer::new();
    if args.plain {
        renderer = renderer.plain();
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let players = if args.players.is_empty() {
        let line = lines
            .next()
            .context("expected a line with player names")??;
        parse_names(&line)
    } else {
        args.players.iter().flat_map(|p| parse_names(p)).collect()
    };
    if players.is_empty() {
        bail!("no players given");
    }

    let config = SessionConfig::default().with_rotation(args.rotation.into());
    let mut session = MultiplayerSession::with_config(config);
    let status = session.start(players.as_slice())?;
    renderer.status(&status)?;

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if should_quit(&line) {
            info!("scorer quit before the end of the session");
            break;
        }

        let standing = session.pins_standing()?;
        let outcome = parse_shot(&line, standing).and_then(|pins| session.record_roll(pins));
        match outcome {
            Ok(status) => {
                renderer.status(&status)?;
                if status.is_finished() {
                    break;
                }
            }
            Err(err) => {
                warn!(input = %line.trim(), error = %err, "shot rejected");
                renderer.error(&err.to_string())?;
            }
        }
    }

    let snap = session.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        renderer.scoreboard(&Scoreboard::default().render(&snap))?;
    }
    Ok(())
}
