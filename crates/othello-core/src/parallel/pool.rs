//! スレッドによる探索グループ
//!
//! コーディネータは呼び出し元のスレッドで、`size - 1` 個のワーカーは専用スレッドで動く。

use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::warn;

use super::collective::{Collective, CollectiveError};
use super::coordinator::Coordinator;
use super::local::{LocalCollective, local_group};
use super::participant::Participant;
use super::worker::{WorkerSummary, run_worker};
use crate::search::SearchLimits;

type WorkerHandle = JoinHandle<Result<WorkerSummary, CollectiveError>>;

pub struct WorkerPool {
    handles: Vec<(usize, WorkerHandle)>,
}

impl WorkerPool {
    /// `size` ランクのグループのワーカーを起動し、ランク 0 のコーディネータと一緒に返す
    pub fn spawn(
        size: usize,
        limits: SearchLimits,
        timeout: Option<Duration>,
    ) -> io::Result<(Coordinator<LocalCollective>, WorkerPool)> {
        let mut group = local_group(size, timeout).into_iter();
        let mut handles = Vec::with_capacity(size.saturating_sub(1));
        let root = group.next().ok_or_else(|| io::Error::other("empty search group"))?;

        for comm in group {
            let rank = comm.rank();
            let participant = Participant::new(comm, limits);
            let handle = thread::Builder::new()
                .name(format!("othello-worker-{rank}"))
                .spawn(move || run_worker(participant))?;
            handles.push((rank, handle));
        }

        Ok((Coordinator::new(Participant::new(root, limits)), WorkerPool { handles }))
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// 全ワーカーの終了を待つ
    ///
    /// `Coordinator::shutdown` の後（またはコーディネータを破棄した後）に呼ぶこと。
    /// そうでなければ永久にブロックする。
    pub fn join(self) -> Vec<Result<WorkerSummary, CollectiveError>> {
        let mut summaries = Vec::with_capacity(self.handles.len());
        for (rank, handle) in self.handles {
            match handle.join() {
                Ok(result) => summaries.push(result),
                Err(_) => warn!("worker {rank} panicked; ignoring result"),
            }
        }
        summaries
    }
}
