//! マスの状態（Cell）

use super::Color;

/// マスの状態
///
/// 数値は元の盤面配列表現（EMPTY=0, BLACK=1, WHITE=2, OUTER=3）に合わせている。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
    /// 盤外の番兵
    Outer = 3,
}

impl Cell {
    /// 相手の石を返す
    ///
    /// 黒⇔白以外が渡された場合はログを残して `Empty` を返す（縮退動作）。
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
            other => {
                log::warn!("illegal player {other:?}");
                Cell::Empty
            }
        }
    }

    /// 盤面表示用の文字
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'b',
            Cell::White => 'w',
            Cell::Outer => '?',
        }
    }

    /// 盤面表示用の文字から変換（`.`/`b`/`w` のみ）
    #[inline]
    pub const fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'b' | 'B' => Some(Cell::Black),
            'w' | 'W' => Some(Cell::White),
            _ => None,
        }
    }
}

impl From<Color> for Cell {
    #[inline]
    fn from(color: Color) -> Cell {
        color.to_cell()
    }
}
