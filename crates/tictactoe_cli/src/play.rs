//! Interactive game loop.

use crate::input::prompt_position;
use crate::render::render_board;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_core::{Game, GameStatus, ScoreCache, SearchEngine};
use tracing::{info, instrument};

/// Plays `game` to the end, prompting humans on `input` and letting the
/// engine move for computer seats.
#[instrument(skip_all, fields(size = game.board().size()))]
pub fn run_game<C, R, W>(
    game: &mut Game,
    engine: &SearchEngine<C>,
    parallel: bool,
    input: &mut R,
    output: &mut W,
) -> Result<GameStatus>
where
    C: ScoreCache + Sync,
    R: BufRead,
    W: Write,
{
    info!("Starting game");

    while !game.status().is_over() {
        writeln!(output)?;
        write!(output, "{}", render_board(game.board()))?;

        let player = game.current_player().clone();
        if player.is_computer() {
            let index = game.play_computer_move(engine, parallel)?;
            writeln!(output, "{} plays {}", player.name(), index)?;
        } else {
            let index = prompt_position(input, output, game)?;
            game.make_move(index)?;
        }
    }

    writeln!(output)?;
    write!(output, "{}", render_board(game.board()))?;
    match game.winner() {
        Some(winner) => writeln!(output, "{} wins!", winner.name())?,
        None => writeln!(output, "\nNo winner! Play again.")?,
    }

    info!(status = ?game.status(), turns = game.turn() - 1, "Game finished");
    Ok(game.status())
}
