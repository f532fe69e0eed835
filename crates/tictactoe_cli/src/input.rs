//! Console input for human moves.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Game};
use tracing::{debug, instrument};

/// Why a typed position was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Not an integer, or outside the board.
    #[display("Invalid position! It must be an integer between 0-{}.", max)]
    Invalid {
        /// Largest valid index.
        max: usize,
    },

    /// The cell already holds a mark.
    #[display("Position {} is taken!", _0)]
    Taken(usize),
}

impl std::error::Error for InputError {}

/// Parses one line of user input into a free board index.
pub fn parse_position(line: &str, board: &Board) -> Result<usize, InputError> {
    let invalid = InputError::Invalid {
        max: board.len() - 1,
    };
    let index: usize = line.trim().parse().map_err(|_| invalid.clone())?;
    match board.is_position_taken(index) {
        Ok(false) => Ok(index),
        Ok(true) => Err(InputError::Taken(index)),
        Err(_) => Err(invalid),
    }
}

/// Prompts until the current player enters a free position.
///
/// Rejected input is reported and re-prompted; only a closed input stream
/// ends the prompt with an error.
#[instrument(skip_all, fields(player = %game.current_player().name()))]
pub fn prompt_position<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    game: &Game,
) -> Result<usize> {
    let player = game.current_player();
    let mut prompt = format!(
        "Turn of {}, enter target position [{}]: ",
        player.name(),
        player.mark()
    );

    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before {} chose a move", player.name());
        }

        match parse_position(&line, game.board()) {
            Ok(index) => return Ok(index),
            Err(InputError::Taken(index)) => {
                debug!(index, "Rejected taken position");
                prompt = format!("Position is taken! Enter target position [{}]: ", player.mark());
            }
            Err(err) => {
                debug!(input = line.trim(), "Rejected position");
                writeln!(output, "{err}")?;
            }
        }
    }
}
