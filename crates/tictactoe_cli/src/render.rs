//! Text rendering of the board for the terminal.

use tictactoe_core::{Board, Cell};

/// Renders each row as `"{index}:{symbol}   "` cells, blank for empty cells.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for (index, cell) in board.cells().iter().enumerate() {
        let symbol = match cell {
            Cell::Empty => ' ',
            Cell::Marked(mark) => mark.symbol(),
        };
        out.push_str(&format!("{index}:{symbol}   "));
        if (index + 1) % board.size() == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_two_by_two() {
        let board = Board::new(2).unwrap();
        assert_eq!(render_board(&board), "0:    1:    \n2:    3:    \n");
    }

    #[test]
    fn test_render_marks() {
        let board: Board = "O...X...X".parse().unwrap();
        let rendered = render_board(&board);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "0:O   1:    2:    ");
        assert_eq!(rows[1], "3:    4:X   5:    ");
        assert_eq!(rows[2], "6:    7:    8:X   ");
    }
}
