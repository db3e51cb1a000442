//! 静的評価関数
//!
//! 5つの正規化済み指標（石数・着手可能数・安定度・隅・辺）の単純和を返す。
//! 各指標は `100 * (自分 - 相手) / (自分 + 相手)` の形で、分母が 0 なら 0。
//! 整数除算は 0 方向への切り捨て。

pub mod weights;

use crate::board::Board;
use crate::types::{Color, Square};

use weights::{CORNER_VALUE, EDGE_VALUE, STABILITY_WEIGHTS, class_weight};

/// 評価値の内訳
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalBreakdown {
    pub coin_parity: i32,
    pub mobility: i32,
    pub stability: i32,
    pub corners: i32,
    pub edges: i32,
}

impl EvalBreakdown {
    #[inline]
    pub fn total(&self) -> i32 {
        self.coin_parity + self.mobility + self.stability + self.corners + self.edges
    }
}

/// `color` 視点の評価値
#[inline]
pub fn evaluate(board: &Board, color: Color) -> i32 {
    evaluate_breakdown(board, color).total()
}

/// `color` 視点の評価値（内訳付き）
pub fn evaluate_breakdown(board: &Board, color: Color) -> EvalBreakdown {
    EvalBreakdown {
        coin_parity: coin_parity(board, color),
        mobility: mobility(board, color),
        stability: stability(board, color),
        corners: corners(board, color),
        edges: edges(board, color),
    }
}

/// 石数差
pub fn coin_parity(board: &Board, color: Color) -> i32 {
    let mine = board.count(color) as i32;
    let theirs = board.count(color.opponent()) as i32;
    normalized(mine, theirs)
}

/// 着手可能数の差
pub fn mobility(board: &Board, color: Color) -> i32 {
    let mine = board.mobility(color) as i32;
    let theirs = board.mobility(color.opponent()) as i32;
    if mine == theirs {
        return 0;
    }
    normalized(mine, theirs)
}

/// 静的重み × マス分類倍率の合計差
///
/// 重みに負値があるため分母が 0 以下になりうる。0 のときだけ 0 を返し、
/// 負の分母はそのまま割る（結果は ±100 を超えることがある）。
pub fn stability(board: &Board, color: Color) -> i32 {
    let (mine, theirs) = tally(board, color, |sq| STABILITY_WEIGHTS[sq.index()] * class_weight(sq));
    normalized(mine, theirs)
}

/// 隅の占有
pub fn corners(board: &Board, color: Color) -> i32 {
    let (mine, theirs) =
        tally(board, color, |sq| if sq.is_corner() { CORNER_VALUE } else { 0 });
    normalized(mine, theirs)
}

/// 辺の占有（隅を除く）
pub fn edges(board: &Board, color: Color) -> i32 {
    let (mine, theirs) = tally(board, color, |sq| if sq.is_edge() { EDGE_VALUE } else { 0 });
    normalized(mine, theirs)
}

/// 盤上の各石について `value` を自分・相手別に合計する
fn tally(board: &Board, color: Color, value: impl Fn(Square) -> i32) -> (i32, i32) {
    let own = color.to_cell();
    let opp = color.opponent().to_cell();
    let mut mine = 0;
    let mut theirs = 0;
    for sq in Square::ALL {
        let cell = board.cell(sq);
        if cell == own {
            mine += value(sq);
        } else if cell == opp {
            theirs += value(sq);
        }
    }
    (mine, theirs)
}

#[inline]
fn normalized(mine: i32, theirs: i32) -> i32 {
    let total = mine + theirs;
    if total == 0 { 0 } else { 100 * (mine - theirs) / total }
}
