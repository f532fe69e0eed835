//! Game state: a board, two seated players and the turn counter.

use crate::board::Board;
use crate::cache::ScoreCache;
use crate::error::GameError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::search::SearchEngine;
use crate::types::{GameStatus, Player, Seats};
use tracing::{debug, info, instrument, warn};

/// A game in any phase.
///
/// The turn counter starts at 1 and advances after every accepted move, so
/// the player to move is always `seats.for_turn(turn)`.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    seats: Seats,
    turn: usize,
    status: GameStatus,
}

impl Game {
    /// Creates a game on an empty `size`×`size` board.
    #[instrument(skip(seats))]
    pub fn new(size: usize, seats: Seats) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size)?,
            seats,
            turn: 1,
            status: GameStatus::InProgress,
        })
    }

    /// Creates a game between two humans with the default seating.
    pub fn with_default_seats(size: usize) -> Result<Self, GameError> {
        Self::new(size, Seats::default_pair(false, false))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seated players.
    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    /// Returns the turn counter (1 before the first move).
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.seats.for_turn(self.turn)
    }

    /// The player whose mark completed a winning pattern.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(mark) => Some(self.seats.by_mark(mark)),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// Returns the status after the move. The board is unchanged on error.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn make_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let mark = self.current_player().mark();
        self.board.place(index, mark)?;
        let winner = match self.board.winner() {
            Ok(winner) => winner,
            Err(err) => {
                self.board.clear(index)?;
                return Err(err);
            }
        };
        self.turn += 1;

        self.status = match winner {
            Some(winner) => GameStatus::Won(winner),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
        debug!(%mark, index, status = ?self.status, "Move applied");

        let invariants = GameInvariants::check_all(self);
        if let Err(violations) = &invariants {
            warn!(?violations, "Game invariants violated");
        }
        debug_assert!(invariants.is_ok(), "Game invariants violated");

        if let GameStatus::Won(winner) = self.status {
            info!(winner = %self.seats.by_mark(winner).name(), "Game won");
        } else if self.status == GameStatus::Draw {
            info!("Game drawn");
        }

        Ok(self.status)
    }

    /// Asks `engine` for the current player's optimal move and plays it.
    ///
    /// Returns the chosen index.
    #[instrument(skip(self, engine))]
    pub fn play_computer_move<C>(
        &mut self,
        engine: &SearchEngine<C>,
        parallel: bool,
    ) -> Result<usize, GameError>
    where
        C: ScoreCache + Sync,
    {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let index = if parallel {
            engine.best_move_parallel(&self.board, &self.seats, true)?
        } else {
            engine.best_move(&mut self.board, &self.seats, true)?
        };
        self.make_move(index)?;
        Ok(index)
    }

    #[cfg(test)]
    pub(crate) fn board_mut_for_tests(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::types::Mark;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::with_default_seats(3).unwrap();
        assert_eq!(game.current_player().mark(), Mark::O);
        game.make_move(4).unwrap();
        assert_eq!(game.current_player().mark(), Mark::X);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::with_default_seats(3).unwrap();
        game.make_move(4).unwrap();
        assert_eq!(game.make_move(4), Err(GameError::PositionTaken(4)));
        assert_eq!(
            game.make_move(9),
            Err(GameError::IndexOutOfRange { index: 9, len: 9 })
        );
        assert_eq!(game.turn(), 2);
        assert_eq!(game.board().occupied_count(), 1);
    }

    #[test]
    fn test_winner_is_the_pattern_owner() {
        let mut game = Game::with_default_seats(3).unwrap();
        for index in [0, 3, 1, 4] {
            assert_eq!(game.make_move(index), Ok(GameStatus::InProgress));
        }
        assert_eq!(game.make_move(2), Ok(GameStatus::Won(Mark::O)));
        assert_eq!(game.winner().map(Player::name), Some("Player 1"));
        assert_eq!(game.make_move(8), Err(GameError::GameOver));
    }

    #[test]
    fn test_computer_vs_computer_draws() {
        let mut game = Game::new(3, Seats::default_pair(true, true)).unwrap();
        let engine = SearchEngine::with_cache(MemoryCache::new());
        while !game.status().is_over() {
            game.play_computer_move(&engine, false).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.winner().is_none());
        assert_eq!(
            game.play_computer_move(&engine, false),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn test_computer_takes_the_win() {
        let mut game = Game::new(3, Seats::default_pair(false, true)).unwrap();
        for index in [0, 4, 1, 6, 8] {
            game.make_move(index).unwrap();
        }
        // X at 2 completes 2-4-6 and would also have blocked O.
        let engine = SearchEngine::new();
        assert_eq!(game.play_computer_move(&engine, true), Ok(2));
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
    }
}
