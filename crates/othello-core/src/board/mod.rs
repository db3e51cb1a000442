//! 盤面表現と合法手生成・着手
//!
//! 盤面は番兵（`Cell::Outer`）で囲んだ 10x10 の一次元配列。8方向の走査は番兵で
//! 止まるため、境界チェックなしで隣接マスを辿れる。

mod diagram;
mod guard;

use smallvec::SmallVec;
use thiserror::Error;

use crate::types::{Cell, Color, Square};

pub use guard::BoardGuard;

/// 8方向のオフセット（番兵付きインデックス空間）
pub const DIRECTIONS: [isize; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

/// 合法手リスト（走査順）
///
/// オセロの合法手は実戦上 32 手を超えることがほぼないため inline 容量を 32 とする。
pub type MoveList = SmallVec<[Square; 32]>;

/// 盤面操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square {0} is already occupied")]
    Occupied(usize),
    #[error("square {square} flips nothing for {color}")]
    IllegalMove { square: usize, color: Color },
    #[error("invalid board diagram: {0}")]
    Diagram(String),
}

/// 盤面
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; Square::PADDED_LEN],
}

impl Board {
    /// 番兵だけを配置した空の盤面
    pub fn empty() -> Self {
        let mut cells = [Cell::Outer; Square::PADDED_LEN];
        for sq in Square::ALL {
            cells[sq.index()] = Cell::Empty;
        }
        Self { cells }
    }

    /// 初期局面（中央4マスに黒白2個ずつ）
    pub fn startpos() -> Self {
        let mut board = Self::empty();
        board.cells[44] = Cell::White;
        board.cells[45] = Cell::Black;
        board.cells[54] = Cell::Black;
        board.cells[55] = Cell::White;
        board
    }

    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// マスの状態を直接書き換える（局面構築用。反転処理は行わない）
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        debug_assert_ne!(cell, Cell::Outer, "sentinel cells are fixed");
        self.cells[sq.index()] = cell;
    }

    /// 番兵込みの生配列
    #[inline]
    pub fn cells(&self) -> &[Cell; Square::PADDED_LEN] {
        &self.cells
    }

    /// 石数
    pub fn count(&self, color: Color) -> usize {
        let cell = color.to_cell();
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// 空きマス数
    pub fn empties(&self) -> usize {
        Square::ALL.iter().filter(|&&sq| self.cell(sq) == Cell::Empty).count()
    }

    /// `color` の合法手を走査順（行優先）で列挙する
    pub fn legal_moves(&self, color: Color) -> MoveList {
        Square::ALL.iter().copied().filter(|&sq| self.is_legal(sq, color)).collect()
    }

    /// 合法手の数
    pub fn mobility(&self, color: Color) -> usize {
        Square::ALL.iter().filter(|&&sq| self.is_legal(sq, color)).count()
    }

    /// `color` が合法手を持つか
    pub fn has_legal_move(&self, color: Color) -> bool {
        Square::ALL.iter().any(|&sq| self.is_legal(sq, color))
    }

    /// 空きマスで、いずれかの方向に挟める石があれば合法
    pub fn is_legal(&self, sq: Square, color: Color) -> bool {
        self.cell(sq) == Cell::Empty
            && DIRECTIONS.iter().any(|&dir| self.would_flip(sq, dir, color).is_some())
    }

    /// `sq` から `dir` 方向に相手の石が連続し、自石で終端していればその自石のマスを返す
    pub fn would_flip(&self, sq: Square, dir: isize, color: Color) -> Option<Square> {
        let own = color.to_cell();
        let opp = color.opponent().to_cell();
        let mut idx = step(sq.index(), dir);
        if self.cells[idx] != opp {
            return None;
        }
        while self.cells[idx] == opp {
            idx = step(idx, dir);
        }
        if self.cells[idx] == own { Square::new(idx) } else { None }
    }

    /// 合法性を確認してから着手する
    ///
    /// 不正な手の場合は盤面を変更せずにエラーを返す。
    pub fn apply_move(&mut self, sq: Square, color: Color) -> Result<(), BoardError> {
        if self.cell(sq) != Cell::Empty {
            return Err(BoardError::Occupied(sq.index()));
        }
        if !self.is_legal(sq, color) {
            return Err(BoardError::IllegalMove { square: sq.index(), color });
        }
        self.play(sq, color);
        Ok(())
    }

    /// 合法であることが分かっている手を着手する（探索用）
    ///
    /// `sq` に石を置き、8方向それぞれについて挟んだ石を反転する。
    #[inline]
    pub fn play(&mut self, sq: Square, color: Color) {
        debug_assert!(self.is_legal(sq, color), "play() on illegal square {}", sq.index());
        let own = color.to_cell();
        self.cells[sq.index()] = own;
        for dir in DIRECTIONS {
            if let Some(bracket) = self.would_flip(sq, dir, color) {
                let mut idx = step(sq.index(), dir);
                while idx != bracket.index() {
                    self.cells[idx] = own;
                    idx = step(idx, dir);
                }
            }
        }
    }

    /// スナップショットを取り、ガードの破棄時に必ず復元する
    #[inline]
    pub fn scoped(&mut self) -> BoardGuard<'_> {
        BoardGuard::new(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

#[inline]
fn step(idx: usize, dir: isize) -> usize {
    idx.wrapping_add_signed(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(index: usize) -> Square {
        Square::new(index).unwrap()
    }

    #[test]
    fn test_startpos_sentinels() {
        let board = Board::startpos();
        let outer = board.cells().iter().filter(|&&c| c == Cell::Outer).count();
        assert_eq!(outer, Square::PADDED_LEN - Square::NUM);
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 2);
        assert_eq!(board.empties(), 60);
    }

    #[test]
    fn test_startpos_legal_moves() {
        let board = Board::startpos();
        let black: Vec<usize> = board.legal_moves(Color::Black).iter().map(|s| s.index()).collect();
        let white: Vec<usize> = board.legal_moves(Color::White).iter().map(|s| s.index()).collect();
        assert_eq!(black, vec![34, 43, 56, 65]);
        assert_eq!(white, vec![35, 46, 53, 64]);
    }

    #[test]
    fn test_would_flip_returns_bracket() {
        let board = Board::startpos();
        assert_eq!(board.would_flip(sq(34), 10, Color::Black), Some(sq(54)));
        assert_eq!(board.would_flip(sq(34), 1, Color::Black), None);
        assert_eq!(board.would_flip(sq(34), 10, Color::White), None);
    }

    #[test]
    fn test_apply_move_flips_single_run() {
        let mut board = Board::startpos();
        board.apply_move(sq(34), Color::Black).unwrap();
        assert_eq!(board.cell(sq(34)), Cell::Black);
        assert_eq!(board.cell(sq(44)), Cell::Black);
        assert_eq!(board.count(Color::Black), 4);
        assert_eq!(board.count(Color::White), 1);
    }

    #[test]
    fn test_apply_move_flips_multiple_directions() {
        let mut board = Board::from_diagram(
            "........
             ........
             ..b.b...
             ...ww...
             ..bw....
             ........
             ........
             ........",
        )
        .unwrap();
        // (4,4) は左（4,3→4,2）と左上（3,3→2,2）と上（3,4→2,4）を挟む
        board.apply_move(Square::from_row_col(4, 4).unwrap(), Color::Black).unwrap();
        assert_eq!(board.count(Color::White), 0);
        assert_eq!(board.count(Color::Black), 7);
    }

    #[test]
    fn test_apply_move_rejects_illegal() {
        let mut board = Board::startpos();
        let before = board;
        assert_eq!(board.apply_move(sq(44), Color::Black), Err(BoardError::Occupied(44)));
        assert_eq!(
            board.apply_move(sq(11), Color::Black),
            Err(BoardError::IllegalMove { square: 11, color: Color::Black })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_moves_without_opponent_stones() {
        let board = Board::from_diagram(
            "bbbbbbbb
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        assert!(board.legal_moves(Color::Black).is_empty());
        assert!(!board.has_legal_move(Color::White));
    }

    #[test]
    fn test_scan_stops_at_sentinel() {
        // 辺に沿った白の連続が番兵で終わる場合は挟めない
        let board = Board::from_diagram(
            ".wwwwwww
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        assert!(!board.is_legal(sq(11), Color::Black));
    }
}
