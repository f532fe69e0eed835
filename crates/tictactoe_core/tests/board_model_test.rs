//! Tests for the board model's public surface.

use tictactoe_core::{Board, Cell, Game, GameError, Mark, winning_patterns};

#[test]
fn test_winning_patterns_literals() {
    assert_eq!(
        winning_patterns(3),
        vec![
            vec![0, 1, 2],
            vec![0, 3, 6],
            vec![3, 4, 5],
            vec![1, 4, 7],
            vec![6, 7, 8],
            vec![2, 5, 8],
            vec![0, 4, 8],
            vec![2, 4, 6],
        ]
    );
    assert_eq!(
        winning_patterns(2),
        vec![
            vec![0, 1],
            vec![0, 2],
            vec![2, 3],
            vec![1, 3],
            vec![0, 3],
            vec![1, 2],
        ]
    );
}

#[test]
fn test_board_caches_patterns_for_its_size() {
    let board = Board::new(4).unwrap();
    assert_eq!(board.winning_patterns(), winning_patterns(4).as_slice());
}

#[test]
fn test_row_win_detection() {
    let mut board = Board::new(3).unwrap();
    for (index, mark) in [(0, Mark::O), (1, Mark::O), (2, Mark::O), (4, Mark::X), (6, Mark::X)] {
        board.place(index, mark).unwrap();
    }
    assert!(board.has_winner(Mark::O));
    assert!(!board.has_winner(Mark::X));
    assert_eq!(board.winner(), Ok(Some(Mark::O)));
}

#[test]
fn test_occupied_place_is_rejected_without_change() {
    let mut board: Board = "OX.......".parse().unwrap();
    let before = board.cells().to_vec();

    for mark in [Mark::O, Mark::X] {
        assert_eq!(board.place(0, mark), Err(GameError::PositionTaken(0)));
        assert_eq!(board.place(1, mark), Err(GameError::PositionTaken(1)));
    }
    assert_eq!(board.cells(), before.as_slice());
}

#[test]
fn test_cells_snapshot_is_row_major() {
    let mut board = Board::new(2).unwrap();
    board.place(0, Mark::O).unwrap();
    board.place(3, Mark::X).unwrap();
    assert_eq!(
        board.cells(),
        &[Cell::Marked(Mark::O), Cell::Empty, Cell::Empty, Cell::Marked(Mark::X)]
    );
}

#[test]
fn test_full_board_without_winner_is_terminal_draw() {
    for layout in ["OXOOXXXOO", "XOXXOOOXX", "OXXXOOOOX"] {
        let board: Board = layout.parse().unwrap();
        assert!(board.is_full(), "{layout}");
        assert!(board.is_terminal(), "{layout}");
        assert_eq!(board.winner(), Ok(None), "{layout}");
    }
}

/// Walks every legal move sequence up to `depth` moves.
fn walk(game: &Game, depth: usize, visited: &mut usize) {
    let board = game.board();
    assert_eq!(board.occupied_count() + 1, game.turn());
    assert!(!(board.has_winner(Mark::O) && board.has_winner(Mark::X)));
    *visited += 1;

    if depth == 0 || game.status().is_over() {
        return;
    }
    for index in board.empty_indices().collect::<Vec<_>>() {
        let mut next = game.clone();
        next.make_move(index).unwrap();
        walk(&next, depth - 1, visited);
    }
}

#[test]
fn test_legal_play_keeps_counts_and_single_winner() {
    let mut visited = 0;
    walk(&Game::with_default_seats(2).unwrap(), 4, &mut visited);
    assert!(visited > 1);

    let mut visited = 0;
    walk(&Game::with_default_seats(3).unwrap(), 5, &mut visited);
    assert!(visited > 10_000);
}
