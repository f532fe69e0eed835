//! Command-line interface for the tictactoe driver.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Mark;

/// Tic-tac-toe on an N×N board against an optimal minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play N×N tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Seats played by the computer (overrides the config file)
        #[arg(long, value_enum)]
        computer: Option<ComputerSeats>,

        /// Evaluate the computer's candidate moves on all cores
        #[arg(long)]
        parallel: bool,

        /// Disable the in-memory score cache
        #[arg(long)]
        no_cache: bool,
    },

    /// Print the optimal move and every candidate score for a board
    Solve {
        /// Cells in row-major order: O, X, and . or _ for empty
        layout: String,

        /// Mark of the player in the first seat
        #[arg(long, default_value = "o", value_parser = parse_mark)]
        first: Mark,
    },
}

/// Which seats are computer-controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComputerSeats {
    /// Two humans.
    None,
    /// The computer moves first.
    First,
    /// The computer moves second.
    Second,
    /// Computer against computer.
    Both,
}

impl ComputerSeats {
    /// Computer flags for the first and second seat.
    pub fn flags(self) -> [bool; 2] {
        match self {
            ComputerSeats::None => [false, false],
            ComputerSeats::First => [true, false],
            ComputerSeats::Second => [false, true],
            ComputerSeats::Both => [true, true],
        }
    }
}

fn parse_mark(value: &str) -> Result<Mark, String> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => {
            Mark::from_symbol(symbol).ok_or_else(|| format!("unknown mark {value:?}"))
        }
        _ => Err(format!("expected a single mark (o or x), got {value:?}")),
    }
}
