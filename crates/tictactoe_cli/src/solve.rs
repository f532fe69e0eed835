//! One-shot analysis of a board layout.

use anyhow::Result;
use std::io::Write;
use tictactoe_core::{
    Board, DRAW, MAXIMIZER_WIN, Mark, MemoryCache, Player, Score, SearchEngine, Seats,
};
use tracing::instrument;

/// Prints every candidate score and the optimal move for the seat to move.
///
/// Returns `None` when the layout is already decided.
#[instrument(skip(output))]
pub fn solve<W: Write>(layout: &str, first: Mark, output: &mut W) -> Result<Option<usize>> {
    let mut board: Board = layout.parse()?;
    let seats = Seats::new(
        Player::new("Player 1".to_string(), first, true),
        Player::new("Player 2".to_string(), first.opponent(), true),
    )?;

    writeln!(output, "{board}")?;
    if board.is_terminal() {
        match board.winner()? {
            Some(mark) => writeln!(output, "{mark} has already won")?,
            None => writeln!(output, "Board is full: draw")?,
        }
        return Ok(None);
    }

    let mover = seats.for_turn(board.occupied_count() + 1).mark();
    let engine = SearchEngine::with_cache(MemoryCache::new());
    for (index, score) in engine.scored_moves(&mut board, &seats, true)? {
        writeln!(output, "{index}: {}", outcome(score))?;
    }

    let best = engine.best_move(&mut board, &seats, true)?;
    writeln!(output, "Best move for {mover}: {best}")?;
    Ok(Some(best))
}

fn outcome(score: Score) -> &'static str {
    match score {
        MAXIMIZER_WIN => "win",
        DRAW => "draw",
        _ => "loss",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_finds_winning_move() {
        let mut output = Vec::new();
        let best = solve("OO..X.X..", Mark::O, &mut output).unwrap();
        assert_eq!(best, Some(2));

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("OO.\n.X.\nX..\n"));
        assert!(text.contains("2: win\n"));
        assert!(text.ends_with("Best move for O: 2\n"));
    }

    #[test]
    fn test_solve_reports_mover_from_first_seat() {
        let mut output = Vec::new();
        let best = solve("OO..X.X..", Mark::X, &mut output).unwrap();
        assert_eq!(best, Some(2));
        assert!(String::from_utf8(output).unwrap().ends_with("Best move for X: 2\n"));
    }

    #[test]
    fn test_solve_reports_decided_boards() {
        let mut output = Vec::new();
        assert_eq!(solve("OOO.X.X..", Mark::O, &mut output).unwrap(), None);
        assert!(String::from_utf8(output).unwrap().contains("O has already won"));

        let mut output = Vec::new();
        assert_eq!(solve("OXOOXXXOO", Mark::O, &mut output).unwrap(), None);
        assert!(String::from_utf8(output).unwrap().contains("draw"));
    }

    #[test]
    fn test_solve_rejects_bad_layouts() {
        let mut output = Vec::new();
        assert!(solve("OX?", Mark::O, &mut output).is_err());
        assert!(solve("OXO.X", Mark::O, &mut output).is_err());
    }
}
