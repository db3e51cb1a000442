//! Referee command parser

use othello_core::{Move, ParseMoveError};
use thiserror::Error;

use super::commands::RefereeCommand;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("play_move without a move")]
    MissingMove,
    #[error("invalid move in play_move: {0}")]
    InvalidMove(#[from] ParseMoveError),
}

/// Parse a referee command from an input line
pub fn parse_referee_command(line: &str) -> Result<RefereeCommand, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Err(CommandError::Empty);
    };

    match head {
        "gen_move" => Ok(RefereeCommand::GenMove),
        "game_over" => Ok(RefereeCommand::GameOver),
        "play_move" => parse_play_move(&parts[1..]),
        _ => Err(CommandError::Unknown(head.to_string())),
    }
}

fn parse_play_move(parts: &[&str]) -> Result<RefereeCommand, CommandError> {
    let text = parts.first().ok_or(CommandError::MissingMove)?;
    let mv: Move = text.parse()?;
    Ok(RefereeCommand::PlayMove(mv))
}
