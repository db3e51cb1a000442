//! ワーカー側のループ

use log::{debug, info};

use super::collective::{Collective, CollectiveError, RoundState, Signal};
use super::participant::Participant;
use crate::board::Board;
use crate::search::SearchStats;
use crate::types::Color;

/// 停止までにワーカーが行った処理の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerSummary {
    pub rank: usize,
    pub rounds: u64,
    pub moves_searched: u64,
    pub stats: SearchStats,
}

/// ルートが `Signal::Stop` をブロードキャストするまでラウンドを処理する
///
/// 集団通信が失敗した時点でそのエラーを返して終了する（再試行しない）。
pub fn run_worker<C: Collective>(
    mut participant: Participant<C>,
) -> Result<WorkerSummary, CollectiveError> {
    let rank = participant.rank();
    debug!("worker {rank} waiting for rounds");

    let mut rounds = 0u64;
    loop {
        let mut signal = Signal::Stop;
        participant.comm().broadcast_signal(&mut signal)?;
        if signal == Signal::Stop {
            break;
        }

        // ルートのラウンドで上書きされる
        let mut round = RoundState { board: Board::empty(), to_move: Color::Black };
        participant.comm().broadcast_round(&mut round)?;

        let result = participant.play_round(&round)?;
        participant.comm().gather(result)?;
        rounds += 1;
    }

    let summary = WorkerSummary {
        rank,
        rounds,
        moves_searched: participant.moves_searched(),
        stats: participant.stats(),
    };
    info!(
        "worker {rank} stopped after {rounds} rounds ({} root moves, {} nodes)",
        summary.moves_searched, summary.stats.nodes
    );
    Ok(summary)
}
