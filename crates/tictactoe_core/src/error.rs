//! Error type shared by the board, game and search modules.

use crate::types::Mark;

/// Error that can occur when building a board, applying a move or searching.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The board side length is below the minimum of 2.
    #[display("Board size {} is invalid (must be at least 2)", size)]
    InvalidSize {
        /// The rejected side length.
        size: usize,
    },

    /// A board layout's length is not a perfect square.
    #[display("Board layout has {} cells, which is not a square number", len)]
    LayoutNotSquare {
        /// Number of cells in the layout.
        len: usize,
    },

    /// Both seats were given the same mark.
    #[display("Both players cannot play {}", _0)]
    DuplicateMark(Mark),

    /// The position lies outside the board.
    #[display("Position {} is out of range (must be 0-{})", index, len.saturating_sub(1))]
    IndexOutOfRange {
        /// The rejected position.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// The position already holds a mark.
    #[display("Position {} is already taken", _0)]
    PositionTaken(usize),

    /// A search was requested on a board that already has a result.
    #[display("Board is already terminal, no move to search")]
    TerminalBoard,

    /// A move was submitted after the game finished.
    #[display("Game is already over")]
    GameOver,

    /// Both marks complete a winning pattern at once.
    #[display("Both players hold a winning pattern")]
    MultipleWinners,

    /// A board layout contained a character that is not a mark or a blank.
    #[display("Unknown board symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for GameError {}
