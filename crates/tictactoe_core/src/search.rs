//! Exhaustive minimax search.
//!
//! Every legal continuation is explored to the end of the game; positions are
//! scored from the maximizer's point of view as [`MAXIMIZER_WIN`], [`DRAW`]
//! or [`MINIMIZER_WIN`]. Hypothetical moves are applied to the caller's board
//! and undone before the next candidate is tried, so the board is unchanged
//! when a search returns.
//!
//! ```
//! use tictactoe_core::{Board, SearchEngine, Seats};
//!
//! let mut board: Board = "OO..X.X..".parse().unwrap();
//! let seats = Seats::default_pair(false, true);
//! // Four marks placed, so the first seat (O) is to move and completes its top row.
//! let index = SearchEngine::new().best_move(&mut board, &seats, true).unwrap();
//! assert_eq!(index, 2);
//! ```

use crate::board::Board;
use crate::cache::{CacheKey, NoCache, ScoreCache};
use crate::error::GameError;
use crate::types::{Mark, Seats};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Value of a position from the maximizer's point of view.
pub type Score = i8;

/// The maximizing mark holds a winning pattern.
pub const MAXIMIZER_WIN: Score = 1;
/// The board filled with no winner.
pub const DRAW: Score = 0;
/// The minimizing mark holds a winning pattern.
pub const MINIMIZER_WIN: Score = -1;

/// Minimax search with an optional score cache.
///
/// The engine holds no game state; each call works on the board it is given.
#[derive(Debug, Default)]
pub struct SearchEngine<C = NoCache> {
    cache: C,
}

impl SearchEngine<NoCache> {
    /// Creates an engine without a cache.
    pub fn new() -> Self {
        Self { cache: NoCache }
    }
}

impl<C: ScoreCache> SearchEngine<C> {
    /// Creates an engine that memoizes scores in `cache`.
    pub fn with_cache(cache: C) -> Self {
        Self { cache }
    }

    /// The injected cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Returns the optimal index for the seat to move.
    ///
    /// The mover is the seat whose turn follows the marks already on the
    /// board. Candidates are tried in ascending index order and the first one
    /// with the best score wins ties.
    #[instrument(skip(self, board, seats), fields(layout = %board.signature()))]
    pub fn best_move(
        &self,
        board: &mut Board,
        seats: &Seats,
        mover_is_maximizing: bool,
    ) -> Result<usize, GameError> {
        let scored = self.scored_moves(board, seats, mover_is_maximizing)?;
        let index = pick_best(&scored, mover_is_maximizing)?;
        debug!(index, "Selected move");
        Ok(index)
    }

    /// Scores every empty index for the seat to move, in ascending order.
    #[instrument(skip(self, board, seats))]
    pub fn scored_moves(
        &self,
        board: &mut Board,
        seats: &Seats,
        mover_is_maximizing: bool,
    ) -> Result<Vec<(usize, Score)>, GameError> {
        let (mover, maximizer) = perspective(board, seats, mover_is_maximizing)?;
        let candidates: Vec<usize> = board.empty_indices().collect();

        let mut scored = Vec::with_capacity(candidates.len());
        for index in candidates {
            let score = self.score_move(board, index, mover, maximizer)?;
            debug!(index, score, "Scored candidate move");
            scored.push((index, score));
        }
        Ok(scored)
    }

    /// Minimax value of `board` with `to_move` about to play.
    pub fn evaluate(
        &self,
        board: &mut Board,
        to_move: Mark,
        maximizer: Mark,
    ) -> Result<Score, GameError> {
        self.minimax(board, to_move, maximizer)
    }

    fn score_move(
        &self,
        board: &mut Board,
        index: usize,
        mover: Mark,
        maximizer: Mark,
    ) -> Result<Score, GameError> {
        board.place(index, mover)?;
        let score = self.minimax(board, mover.opponent(), maximizer);
        board.clear(index)?;
        score
    }

    fn minimax(&self, board: &mut Board, to_move: Mark, maximizer: Mark) -> Result<Score, GameError> {
        if board.has_winner(maximizer) {
            return Ok(MAXIMIZER_WIN);
        }
        if board.has_winner(maximizer.opponent()) {
            return Ok(MINIMIZER_WIN);
        }
        if board.is_full() {
            return Ok(DRAW);
        }

        let key = CacheKey::new(board, to_move, maximizer);
        if let Some(score) = self.cache.lookup(&key) {
            return Ok(score);
        }

        let maximizing = to_move == maximizer;
        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        for index in 0..board.len() {
            if board.is_position_taken(index)? {
                continue;
            }
            board.place(index, to_move)?;
            let score = self.minimax(board, to_move.opponent(), maximizer);
            // Undo before propagating so the board is restored on every path.
            board.clear(index)?;
            let score = score?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        self.cache.store(key, best);
        Ok(best)
    }
}

impl<C: ScoreCache + Sync> SearchEngine<C> {
    /// Same result as [`SearchEngine::best_move`], with top-level branches
    /// evaluated on a rayon pool. Each branch searches its own board clone.
    #[instrument(skip(self, board, seats), fields(layout = %board.signature()))]
    pub fn best_move_parallel(
        &self,
        board: &Board,
        seats: &Seats,
        mover_is_maximizing: bool,
    ) -> Result<usize, GameError> {
        let (mover, maximizer) = perspective(board, seats, mover_is_maximizing)?;
        let candidates: Vec<usize> = board.empty_indices().collect();

        let scored = candidates
            .into_par_iter()
            .map(|index| -> Result<(usize, Score), GameError> {
                let mut branch = board.clone();
                let score = self.score_move(&mut branch, index, mover, maximizer)?;
                Ok((index, score))
            })
            .collect::<Result<Vec<_>, GameError>>()?;

        let index = pick_best(&scored, mover_is_maximizing)?;
        debug!(index, candidates = scored.len(), "Selected move");
        Ok(index)
    }
}

/// Resolves the mark to move and the maximizing mark for a top-level search.
fn perspective(
    board: &Board,
    seats: &Seats,
    mover_is_maximizing: bool,
) -> Result<(Mark, Mark), GameError> {
    if board.is_terminal() {
        return Err(GameError::TerminalBoard);
    }
    let mover = seats.for_turn(board.occupied_count() + 1).mark();
    let maximizer = if mover_is_maximizing {
        mover
    } else {
        mover.opponent()
    };
    Ok((mover, maximizer))
}

/// First index with a strictly better score for the mover.
fn pick_best(scored: &[(usize, Score)], mover_is_maximizing: bool) -> Result<usize, GameError> {
    let mut best: Option<(usize, Score)> = None;
    for &(index, score) in scored {
        let improves = match best {
            None => true,
            Some((_, current)) if mover_is_maximizing => score > current,
            Some((_, current)) => score < current,
        };
        if improves {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index).ok_or(GameError::TerminalBoard)
}
