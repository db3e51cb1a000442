//! # othello-core
//!
//! 8x8 オセロ（リバーシ）エンジンの探索コア。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Cell, Square, Move）
//! - `board`: 番兵付き 10x10 盤面と合法手生成・着手
//! - `eval`: 静的評価関数
//! - `search`: 深さ・時間制限付き alpha-beta 探索
//! - `parallel`: ルート手を複数プロセスに分配する SPMD コーディネータ
//!

pub mod types;

pub mod board;

pub mod eval;

pub mod search;

pub mod parallel;

pub use board::{Board, BoardError, BoardGuard, MoveList};
pub use types::{Cell, Color, Move, ParseMoveError, Square};
