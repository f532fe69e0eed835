//! Core domain types: marks, cells, players and seating.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark O (first mover in the default seating).
    O,
    /// Mark X.
    X,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    /// Returns the character used to draw this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::O => 'O',
            Mark::X => 'X',
        }
    }

    /// Parses a mark from its symbol (case-insensitive).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'O' => Some(Mark::O),
            'X' => Some(Mark::X),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Character used in board signatures.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(mark) => mark.symbol(),
        }
    }
}

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    name: String,
    mark: Mark,
    is_computer: bool,
}

impl Player {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Whether moves for this player come from the search engine.
    pub fn is_computer(&self) -> bool {
        self.is_computer
    }
}

/// The two players in fixed seating order.
///
/// The first seat moves on turn 1, the second on turn 2, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seats {
    players: [Player; 2],
}

impl Seats {
    /// Seats two players. Fails if they share a mark.
    #[instrument(skip_all, fields(first = %first.name, second = %second.name))]
    pub fn new(first: Player, second: Player) -> Result<Self, GameError> {
        if first.mark == second.mark {
            return Err(GameError::DuplicateMark(first.mark));
        }
        Ok(Self {
            players: [first, second],
        })
    }

    /// "Player 1" plays O and moves first, "Player 2" plays X.
    pub fn default_pair(first_is_computer: bool, second_is_computer: bool) -> Self {
        Self {
            players: [
                Player::new("Player 1".to_string(), Mark::O, first_is_computer),
                Player::new("Player 2".to_string(), Mark::X, second_is_computer),
            ],
        }
    }

    /// Player who moves on the given turn (turns start at 1).
    pub fn for_turn(&self, turn: usize) -> &Player {
        &self.players[turn.saturating_sub(1) % self.players.len()]
    }

    /// Player who owns the given mark.
    pub fn by_mark(&self, mark: Mark) -> &Player {
        if self.players[0].mark == mark {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    /// Both players in seating order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with this mark holding a winning pattern.
    Won(Mark),
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Whether the game has finished.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
