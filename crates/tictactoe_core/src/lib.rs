//! Tic-tac-toe on an N×N board with an optimal computer opponent.
//!
//! # Architecture
//!
//! - **Board**: flat row-major cells plus the winning patterns for the size
//! - **Search**: full-depth minimax that returns the optimal next index
//! - **Cache**: optional lookup/store capability the search can memoize into
//! - **Game**: seats, turn counter and status for a driver to hold
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, MemoryCache, SearchEngine, Seats};
//!
//! # fn main() -> Result<(), tictactoe_core::GameError> {
//! let mut game = Game::new(3, Seats::default_pair(false, true))?;
//! let engine = SearchEngine::with_cache(MemoryCache::new());
//!
//! game.make_move(4)?;
//! let reply = game.play_computer_move(&engine, false)?;
//! assert_eq!(game.board().occupied_count(), 2);
//! assert_ne!(reply, 4);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cache;
mod error;
mod game;
mod invariants;
mod patterns;
mod search;
mod types;

pub use board::Board;
pub use cache::{CacheKey, MemoryCache, NoCache, ScoreCache};
pub use error::GameError;
pub use game::Game;
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, SingleWinner,
    TurnMatchesOccupancy,
};
pub use patterns::{Pattern, winning_patterns};
pub use search::{DRAW, MAXIMIZER_WIN, MINIMIZER_WIN, Score, SearchEngine};
pub use types::{Cell, GameStatus, Mark, Player, Seats};
