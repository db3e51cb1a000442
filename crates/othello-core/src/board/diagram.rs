//! 盤面の文字列表現（診断ログ・テスト用）

use std::fmt;

use super::{Board, BoardError};
use crate::types::{Cell, Color, Square};

impl Board {
    /// 8行の `.`/`b`/`w` から盤面を構築する（空白・改行は無視）
    pub fn from_diagram(diagram: &str) -> Result<Board, BoardError> {
        let symbols: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != Square::NUM {
            return Err(BoardError::Diagram(format!(
                "expected {} cells, found {}",
                Square::NUM,
                symbols.len()
            )));
        }
        let mut board = Board::empty();
        for (sq, &c) in Square::ALL.iter().zip(&symbols) {
            let cell = Cell::from_symbol(c)
                .ok_or_else(|| BoardError::Diagram(format!("unexpected symbol {c:?}")))?;
            board.set(*sq, cell);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "   1 2 3 4 5 6 7 8 [{}={} {}={}]",
            Cell::Black.symbol(),
            self.count(Color::Black),
            Cell::White.symbol(),
            self.count(Color::White)
        )?;
        for row in 1..=8 {
            write!(f, "{row}  ")?;
            for col in 1..=8 {
                write!(f, "{} ", self.cells[10 * row + col].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for (i, sq) in Square::ALL.iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", self.cell(*sq).symbol())?;
        }
        write!(f, ")")
    }
}
