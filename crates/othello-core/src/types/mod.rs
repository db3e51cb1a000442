//! 基本型

mod cell;
mod color;
mod moves;
mod square;

pub use cell::Cell;
pub use color::Color;
pub use moves::{Move, ParseMoveError};
pub use square::Square;
