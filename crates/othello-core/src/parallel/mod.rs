//! ルート分割の SPMD 探索
//!
//! 全参加者が同じラウンドを実行する。正本の盤面を受け取り、ルート手を列挙し、
//! ラウンドロビンで自分が担当する手を探索して、最善の `(score, move)` を
//! ルートへ集約する。ルート（ランク 0）も探索に参加し、さらに全体の手を選ぶ。

mod collective;
mod coordinator;
mod local;
mod participant;
mod partition;
mod pool;
mod worker;

pub use collective::{
    Collective, CollectiveError, Packet, RankResult, ROOT, RoundState, Signal, WireResult,
};
pub use coordinator::{Coordinator, select_best};
pub use local::{LocalCollective, local_group};
pub use participant::Participant;
pub use partition::{owned_positions, owner_of};
pub use pool::WorkerPool;
pub use worker::{WorkerSummary, run_worker};
