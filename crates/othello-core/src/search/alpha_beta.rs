//! 深さ・時間制限付き minimax（alpha-beta 枝刈り）
//!
//! 子局面は `BoardGuard` 上で着手し、ガードの破棄で元に戻す。
//! `search` に渡した盤面は戻り値の時点でビット単位で元と一致する。

use std::time::Instant;

use super::{SearchLimits, SearchStats};
use crate::board::Board;
use crate::eval::evaluate;
use crate::types::{Color, Move, Square};

pub struct AlphaBeta {
    limits: SearchLimits,
    start: Instant,
    stats: SearchStats,
}

impl AlphaBeta {
    /// 探索器を作る。持ち時間の計測は生成時点から始まる
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            start: Instant::now(),
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    fn out_of_time(&self) -> bool {
        self.start.elapsed() >= self.limits.cutoff()
    }

    #[inline]
    fn leaf(&mut self, board: &Board, perspective: Color) -> i32 {
        self.stats.evaluations += 1;
        evaluate(board, perspective)
    }

    /// `last` で到達したノードを `perspective` 視点で評価する
    ///
    /// `maximizing` は `perspective` が手番のとき true。次のいずれかで葉になる:
    /// 残り深さ 0、パスで到達した、ルート手ごとの制限時間を過ぎた、
    /// 手番側に合法手がない（強制パスは1手と数えない）。
    #[allow(clippy::too_many_arguments)]
    pub fn search(
        &mut self,
        board: &mut Board,
        last: Move,
        perspective: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || last.is_pass() {
            return self.leaf(board, perspective);
        }
        if self.out_of_time() {
            self.stats.timed_out = true;
            return self.leaf(board, perspective);
        }

        let side = if maximizing { perspective } else { perspective.opponent() };
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            return self.leaf(board, perspective);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for &mv in &moves {
            let score = {
                let mut child = board.scoped();
                child.play(mv, side);
                self.search(
                    &mut child,
                    Move::Place(mv),
                    perspective,
                    depth - 1,
                    alpha,
                    beta,
                    !maximizing,
                )
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// `color` のルート手を1つ探索する
///
/// 着手後の局面から全窓で `limits.depth` 手読み、盤面を元に戻す。時計は
/// この関数に入った時点で始まるので、制限時間はこのルート手1つ分にかかる。
/// ルート直下のノードは `color` の maximizing ノードとして探索する。
pub fn search_root_move(
    board: &mut Board,
    mv: Square,
    color: Color,
    limits: &SearchLimits,
) -> (i32, SearchStats) {
    let mut searcher = AlphaBeta::new(*limits);
    let score = {
        let mut child = board.scoped();
        child.play(mv, color);
        searcher.search(&mut child, Move::Place(mv), color, limits.depth, i32::MIN, i32::MAX, true)
    };
    let stats = searcher.stats();

    #[cfg(feature = "search-stats")]
    log::debug!(
        "root move {} score={} nodes={} evals={} cutoffs={} timed_out={}",
        Move::Place(mv),
        score,
        stats.nodes,
        stats.evaluations,
        stats.cutoffs,
        stats.timed_out
    );

    (score, stats)
}
