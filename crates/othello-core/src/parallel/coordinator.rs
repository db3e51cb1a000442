//! ルート側のラウンド駆動

use log::{debug, info};

use super::collective::{Collective, CollectiveError, RankResult, RoundState, Signal};
use super::participant::Participant;
use crate::board::Board;
use crate::types::{Color, Move, Square};

/// 全体の最善手を選ぶ
///
/// ランク順に走査してパスを読み飛ばし、厳密に大きいときだけ更新する。
/// 同点なら先に報告したランクの手が残る。
pub fn select_best(results: &[RankResult]) -> Option<(i32, Square)> {
    let mut best: Option<(i32, Square)> = None;
    for result in results {
        if let Move::Place(sq) = result.mv {
            if best.is_none_or(|(score, _)| result.score > score) {
                best = Some((result.score, sq));
            }
        }
    }
    best
}

/// ランク 0。ラウンドを進め、指し手を決める
pub struct Coordinator<C: Collective> {
    participant: Participant<C>,
    rounds: u64,
    stopped: bool,
}

impl<C: Collective> Coordinator<C> {
    pub fn new(participant: Participant<C>) -> Self {
        debug_assert!(participant.comm().is_root(), "coordinator must run on the root rank");
        Self { participant, rounds: 0, stopped: false }
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// `board` 上で `color` の1ラウンドを実行し、選んだ手を `board` に指す
    ///
    /// どのランクも合法手を見つけなければ `board` を変えずに `Move::Pass` を返す。
    pub fn gen_move(&mut self, board: &mut Board, color: Color) -> Result<Move, CollectiveError> {
        let comm = self.participant.comm();
        comm.broadcast_signal(&mut Signal::Continue)?;
        let mut round = RoundState { board: *board, to_move: color };
        comm.broadcast_round(&mut round)?;

        let own = self.participant.play_round(&round)?;
        let results = self.participant.comm().gather(own)?.unwrap_or_else(|| vec![own]);
        self.rounds += 1;
        for (rank, result) in results.iter().enumerate() {
            debug!("round {}: rank {rank} reported {} ({})", self.rounds, result.mv, result.score);
        }

        match select_best(&results) {
            Some((score, sq)) => {
                board.play(sq, color);
                info!("{color} plays {} (score {score})", Move::Place(sq));
                Ok(Move::Place(sq))
            }
            None => {
                info!("{color} has no legal move, passing");
                Ok(Move::Pass)
            }
        }
    }

    /// 次のラウンドがないことを全ワーカーに通知する（複数回呼んでもよい）
    pub fn shutdown(&mut self) -> Result<(), CollectiveError> {
        if self.stopped {
            return Ok(());
        }
        self.stopped = true;
        self.participant.comm().broadcast_signal(&mut Signal::Stop)
    }
}
