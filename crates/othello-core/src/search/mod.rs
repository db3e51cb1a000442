//! 探索
//!
//! 深さ・時間制限付きの minimax（alpha-beta 枝刈り）。盤面は `BoardGuard` で
//! 着手前の状態に必ず戻るため、探索の前後で盤面はビット単位で一致する。

mod alpha_beta;
mod limits;
mod stats;

pub use alpha_beta::{AlphaBeta, search_root_move};
pub use limits::{DEFAULT_DEPTH, DEFAULT_TIME_LIMIT, DEFAULT_TIME_OFFSET, SearchLimits};
pub use stats::SearchStats;
