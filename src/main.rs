//! Jet Hop headless runner
//!
//! Drives the simulation at full speed with the autopilot steering, reporting
//! game overs and periodic scoreboards through the log.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use jet_hop::sim::{GameState, TickOutcome, tick};
use jet_hop::{RenderSnapshot, Scoreboard, WorldConfig, autopilot};

#[derive(Parser)]
#[command(name = "jet-hop")]
#[command(about = "Run the Jet Hop simulation headless with the autopilot")]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// JSON world config (defaults used for missing fields)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log the scoreboard every N ticks (0 disables)
    #[arg(long, default_value_t = 600)]
    report_every: u64,

    /// Print the final frame's render snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => WorldConfig::load(path)
            .with_context(|| format!("loading world config {}", path.display()))?,
        None => WorldConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Jet Hop starting with seed {seed}");

    let mut state = GameState::new(config, seed).context("building world")?;
    let mut game_overs = Vec::new();

    for _ in 0..args.ticks {
        if let Some(intent) = autopilot::steer(&state) {
            log::debug!("tick {}: autopilot moves {}", state.time_ticks, intent.as_str());
            state.apply_move(intent);
        }

        if let TickOutcome::GameOver(event) = tick(&mut state) {
            log::warn!("{}", event.message());
            game_overs.push(event);
        }

        if args.report_every > 0 && state.time_ticks % args.report_every == 0 {
            log::info!("tick {}: {}", state.time_ticks, Scoreboard::capture(&state));
        }
    }

    let board = Scoreboard::capture(&state);
    let best_score = game_overs
        .iter()
        .map(|e| e.score)
        .chain(std::iter::once(board.score))
        .max()
        .unwrap_or_default();
    println!("Seed:        {seed}");
    println!("Ticks:       {}", state.time_ticks);
    println!("Runs:        {}", state.runs);
    println!("Best score:  {best_score}");
    println!("Highscore:   {}", board.highscore);
    println!("Current:     {board}");

    if args.snapshot {
        let json = serde_json::to_string_pretty(&RenderSnapshot::capture(&state))
            .context("serializing render snapshot")?;
        println!("{json}");
    }

    Ok(())
}
