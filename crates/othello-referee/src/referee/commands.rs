//! Referee command definitions

use std::fmt;

use othello_core::{Color, Move};

/// Commands sent by the referee
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefereeCommand {
    /// Choose and play a move for our colour
    GenMove,

    /// The opponent played this move
    PlayMove(Move),

    /// The game has ended
    GameOver,

    /// Anything we could not make sense of; the raw line is kept for the log
    Unknown(String),
}

impl fmt::Display for RefereeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefereeCommand::GenMove => write!(f, "gen_move"),
            RefereeCommand::PlayMove(mv) => write!(f, "play_move {mv}"),
            RefereeCommand::GameOver => write!(f, "game_over"),
            RefereeCommand::Unknown(line) => write!(f, "unknown '{line}'"),
        }
    }
}

/// 開始時に受け取る手番色を解釈する。解釈できなければ `None`。
pub fn parse_color(line: &str) -> Option<Color> {
    match line.trim().to_ascii_lowercase().as_str() {
        "black" | "b" | "1" => Some(Color::Black),
        "white" | "w" | "2" => Some(Color::White),
        _ => None,
    }
}
