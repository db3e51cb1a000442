//! 指し手（Move）とレフェリー表記
//!
//! レフェリー表記は「行・列」の2桁（左上が `"00"`）。パスは `"pass"`。

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Square;

/// 着手またはパス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Square),
    Pass,
}

/// レフェリー表記のパース失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("empty move string")]
    Empty,
    #[error("move string must be two digits or \"pass\", got {0:?}")]
    Malformed(String),
    #[error("row/column out of range in {0:?}")]
    OutOfRange(String),
}

impl Move {
    /// 集約用の整数表現（パスは -1）
    pub const PASS_WIRE: i32 = -1;

    #[inline]
    pub const fn square(self) -> Option<Square> {
        match self {
            Move::Place(sq) => Some(sq),
            Move::Pass => None,
        }
    }

    #[inline]
    pub const fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }

    /// 番兵付きインデックス（パスは -1）
    #[inline]
    pub const fn to_wire(self) -> i32 {
        match self {
            Move::Place(sq) => sq.index() as i32,
            Move::Pass => Self::PASS_WIRE,
        }
    }

    /// `to_wire` の逆変換。盤上でないインデックスはパス扱い
    #[inline]
    pub fn from_wire(value: i32) -> Move {
        usize::try_from(value).ok().and_then(Square::new).map_or(Move::Pass, Move::Place)
    }

    /// レフェリーへ送る文字列（改行付き）
    pub fn to_referee_string(self) -> String {
        format!("{self}\n")
    }
}

impl From<Square> for Move {
    #[inline]
    fn from(sq: Square) -> Move {
        Move::Place(sq)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(sq) => write!(f, "{}{}", sq.row(), sq.col()),
            Move::Pass => write!(f, "pass"),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoveError::Empty);
        }
        if s == "pass" {
            return Ok(Move::Pass);
        }
        let bytes = s.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ParseMoveError::Malformed(s.to_string()));
        }
        Square::from_row_col(bytes[0] - b'0', bytes[1] - b'0')
            .map(Move::Place)
            .ok_or_else(|| ParseMoveError::OutOfRange(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Place(Square::new(11).unwrap()).to_string(), "00");
        assert_eq!(Move::Place(Square::new(34).unwrap()).to_string(), "23");
        assert_eq!(Move::Place(Square::new(88).unwrap()).to_string(), "77");
        assert_eq!(Move::Pass.to_referee_string(), "pass\n");
    }

    #[test]
    fn test_move_parse() {
        assert_eq!("23".parse::<Move>(), Ok(Move::Place(Square::new(34).unwrap())));
        assert_eq!("23\n".parse::<Move>(), Ok(Move::Place(Square::new(34).unwrap())));
        assert_eq!("pass\n".parse::<Move>(), Ok(Move::Pass));
    }

    #[test]
    fn test_move_parse_errors() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert!(matches!("2".parse::<Move>(), Err(ParseMoveError::Malformed(_))));
        assert!(matches!("a3".parse::<Move>(), Err(ParseMoveError::Malformed(_))));
        assert!(matches!("234".parse::<Move>(), Err(ParseMoveError::Malformed(_))));
        assert!(matches!("83".parse::<Move>(), Err(ParseMoveError::OutOfRange(_))));
        assert!(matches!("38".parse::<Move>(), Err(ParseMoveError::OutOfRange(_))));
    }

    #[test]
    fn test_move_wire() {
        let mv = Move::Place(Square::new(56).unwrap());
        assert_eq!(mv.to_wire(), 56);
        assert_eq!(Move::from_wire(56), mv);
        assert_eq!(Move::Pass.to_wire(), -1);
        assert_eq!(Move::from_wire(-1), Move::Pass);
        assert_eq!(Move::from_wire(10), Move::Pass);
    }
}
