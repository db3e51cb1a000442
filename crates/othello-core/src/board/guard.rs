//! 盤面スナップショットの RAII ガード
//!
//! 探索では「着手 → 再帰 → 復元」を繰り返す。復元を Drop に任せることで、
//! alpha-beta のカットオフによる早期 break を含むすべての経路で盤面が戻る。

use std::ops::{Deref, DerefMut};

use super::Board;
use crate::types::{Cell, Square};

/// Drop 時に盤面をスナップショットへ戻す RAII ガード
pub struct BoardGuard<'a> {
    board: &'a mut Board,
    snapshot: [Cell; Square::PADDED_LEN],
}

impl<'a> BoardGuard<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        let snapshot = board.cells;
        Self { board, snapshot }
    }
}

impl Deref for BoardGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for BoardGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for BoardGuard<'_> {
    fn drop(&mut self) {
        self.board.cells = self.snapshot;
    }
}
