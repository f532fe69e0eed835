//! Invariants that hold for every game reached through legal play.
//!
//! Invariants are testable independently and are checked after each move
//! in debug builds.

use crate::game::Game;
use crate::types::Mark;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: occupied cells equal the number of accepted moves.
///
/// The turn counter starts at 1, so `occupied == turn - 1`.
pub struct TurnMatchesOccupancy;

impl Invariant<Game> for TurnMatchesOccupancy {
    fn holds(game: &Game) -> bool {
        game.board().occupied_count() + 1 == game.turn()
    }

    fn description() -> &'static str {
        "Occupied cell count matches moves made"
    }
}

/// Invariant: at most one mark holds a winning pattern.
pub struct SingleWinner;

impl Invariant<Game> for SingleWinner {
    fn holds(game: &Game) -> bool {
        !(game.board().has_winner(Mark::O) && game.board().has_winner(Mark::X))
    }

    fn description() -> &'static str {
        "At most one player holds a winning pattern"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (TurnMatchesOccupancy, SingleWinner);
