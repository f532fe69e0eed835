//! N×N board storage and win detection.

use crate::error::GameError;
use crate::patterns::{Pattern, winning_patterns};
use crate::types::{Cell, Mark};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Square board of `size`×`size` cells stored in row-major order.
///
/// The only mutation paths are [`Board::place`] and the crate-internal
/// `clear` used by the search engine to undo hypothetical moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    /// Shared between clones; fixed for a given size.
    patterns: Arc<[Pattern]>,
}

impl Board {
    /// Creates an empty board. Fails if `size < 2`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < 2 {
            return Err(GameError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            patterns: winning_patterns(size).into(),
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size²`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a board has at least four cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Winning patterns for this board's size.
    pub fn winning_patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Returns the cell at `index`.
    pub fn cell(&self, index: usize) -> Result<Cell, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
    }

    /// Checks whether `index` already holds a mark.
    pub fn is_position_taken(&self, index: usize) -> Result<bool, GameError> {
        Ok(self.cell(index)? != Cell::Empty)
    }

    /// Places `mark` at `index`. Leaves the board untouched on error.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if self.is_position_taken(index)? {
            return Err(GameError::PositionTaken(index));
        }
        self.cells[index] = Cell::Marked(mark);
        Ok(())
    }

    /// Resets `index` to empty.
    pub(crate) fn clear(&mut self, index: usize) -> Result<(), GameError> {
        self.cell(index)?;
        self.cells[index] = Cell::Empty;
        Ok(())
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// True if every cell of some winning pattern holds `mark`.
    pub fn has_winner(&self, mark: Mark) -> bool {
        let target = Cell::Marked(mark);
        self.patterns
            .iter()
            .any(|pattern| pattern.iter().all(|&index| self.cells[index] == target))
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// True if either mark has won or the board is full.
    pub fn is_terminal(&self) -> bool {
        Mark::iter().any(|mark| self.has_winner(mark)) || self.is_full()
    }

    /// The mark holding a winning pattern, if exactly one does.
    ///
    /// Returns `Ok(None)` for a draw or an unfinished game and
    /// [`GameError::MultipleWinners`] if both marks hold a pattern.
    pub fn winner(&self) -> Result<Option<Mark>, GameError> {
        match (self.has_winner(Mark::O), self.has_winner(Mark::X)) {
            (true, true) => Err(GameError::MultipleWinners),
            (true, false) => Ok(Some(Mark::O)),
            (false, true) => Ok(Some(Mark::X)),
            (false, false) => Ok(None),
        }
    }

    /// Canonical one-character-per-cell encoding (`O`, `X`, `.`).
    pub fn signature(&self) -> String {
        self.cells.iter().map(|cell| cell.symbol()).collect()
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses a signature. `.` and `_` are empty cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        let size = symbols.len().isqrt();
        if size * size != symbols.len() {
            return Err(GameError::LayoutNotSquare { len: symbols.len() });
        }

        let mut board = Board::new(size)?;
        for (index, symbol) in symbols.into_iter().enumerate() {
            match symbol {
                '.' | '_' => {}
                other => {
                    let mark = Mark::from_symbol(other).ok_or(GameError::UnknownSymbol(other))?;
                    board.place(index, mark)?;
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
