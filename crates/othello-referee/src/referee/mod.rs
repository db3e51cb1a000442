//! Line-based referee protocol.
//!
//! The referee first sends the colour the engine plays, then one command per
//! line: `gen_move`, `play_move <move>` or `game_over`. The engine answers
//! `gen_move` with a single move line (`rc` digits or `pass`).

mod commands;
mod link;
mod parser;

pub use commands::{RefereeCommand, parse_color};
pub use link::{LineLink, RefereeError, RefereeLink, TcpLink, connect_tcp};
pub use parser::{CommandError, parse_referee_command};
