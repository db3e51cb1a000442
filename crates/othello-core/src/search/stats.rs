//! 探索統計

use std::ops::AddAssign;

/// ルート手1つ分の探索統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 訪問ノード数（評価関数で打ち切ったノードを含む）
    pub nodes: u64,
    /// 静的評価の呼び出し回数
    pub evaluations: u64,
    /// beta カット回数
    pub cutoffs: u64,
    /// 時間切れで打ち切ったか
    pub timed_out: bool,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
        self.evaluations += rhs.evaluations;
        self.cutoffs += rhs.cutoffs;
        self.timed_out |= rhs.timed_out;
    }
}
