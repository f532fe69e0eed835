//! Tictactoe - terminal driver
//!
//! Play N×N tic-tac-toe against an exhaustive minimax opponent, or ask the
//! engine for the best move on a given layout.

#![warn(missing_docs)]

mod cli;
mod config;
mod input;
mod play;
mod render;
mod solve;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, ComputerSeats};
use config::GameConfig;
use std::io;
use std::path::PathBuf;
use tictactoe_core::{Game, MemoryCache, SearchEngine};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            computer,
            parallel,
            no_cache,
        } => run_play(config, size, computer, parallel, no_cache),
        Command::Solve { layout, first } => {
            solve::solve(&layout, first, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run an interactive game
#[instrument]
fn run_play(
    config_path: Option<PathBuf>,
    size: Option<usize>,
    computer: Option<ComputerSeats>,
    parallel: bool,
    no_cache: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(size, computer, parallel, no_cache);

    let mut game = Game::new(*config.size(), config.seats()?)?;
    info!(size = config.size(), cache = config.cache(), "Game configured");

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    if *config.cache() {
        let engine = SearchEngine::with_cache(MemoryCache::new());
        play::run_game(&mut game, &engine, *config.parallel(), &mut input, &mut output)?;
    } else {
        let engine = SearchEngine::new();
        play::run_game(&mut game, &engine, *config.parallel(), &mut input, &mut output)?;
    }
    Ok(())
}
