//! マス（Square）
//!
//! 8x8 の盤面を周囲1マスの番兵で囲んだ 10x10 の一次元インデックスで表す。
//! `index = 10 * (row + 1) + (col + 1)`（row, col は左上原点の 0-based）。

/// 盤上のマス（番兵を含まない 64 マスのみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 盤上のマスの数
    pub const NUM: usize = 64;

    /// 番兵込みの盤面配列長
    pub const PADDED_LEN: usize = 100;

    /// 四隅
    pub const CORNERS: [Square; 4] = [Square(11), Square(18), Square(81), Square(88)];

    /// 全マス（行優先の走査順）
    pub const ALL: [Square; Self::NUM] = {
        let mut out = [Square(0); Self::NUM];
        let mut i = 0;
        while i < Self::NUM {
            out[i] = Square(((i / 8 + 1) * 10 + i % 8 + 1) as u8);
            i += 1;
        }
        out
    };

    /// 番兵付き配列のインデックスから生成（番兵マスなら `None`）
    #[inline]
    pub const fn new(index: usize) -> Option<Square> {
        if Self::is_playable(index) {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// 行・列（0-based）から生成
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(10 * (row + 1) + col + 1))
        } else {
            None
        }
    }

    /// 番兵ではない盤上のインデックスかどうか
    #[inline]
    pub const fn is_playable(index: usize) -> bool {
        index >= 11 && index <= 88 && index % 10 >= 1 && index % 10 <= 8
    }

    /// 番兵付き配列のインデックス
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 行（0-based）
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 10 - 1
    }

    /// 列（0-based）
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 10 - 1
    }

    /// 四隅かどうか
    #[inline]
    pub const fn is_corner(self) -> bool {
        let mut i = 0;
        while i < Self::CORNERS.len() {
            if Self::CORNERS[i].0 == self.0 {
                return true;
            }
            i += 1;
        }
        false
    }

    /// 隅を除く辺のマスかどうか
    #[inline]
    pub const fn is_edge(self) -> bool {
        !self.is_corner() && (self.row() == 0 || self.row() == 7 || self.col() == 0 || self.col() == 7)
    }
}
