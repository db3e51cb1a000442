//! Referee front end of the othello engine.

pub mod flushing_logger;
pub mod referee;
pub mod session;

pub use session::{Session, SessionEnd, play_game};
