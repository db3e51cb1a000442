//! 1参加者ぶんのラウンド処理

use log::{debug, trace};

use super::collective::{Collective, CollectiveError, RankResult, RoundState};
use super::partition::{owned_positions, owner_of};
use crate::board::Board;
use crate::search::{SearchLimits, SearchStats, search_root_move};
use crate::types::{Move, Square};

/// 探索グループの1ランクと、その盤面レプリカ
pub struct Participant<C: Collective> {
    comm: C,
    board: Board,
    limits: SearchLimits,
    stats: SearchStats,
    moves_searched: u64,
}

impl<C: Collective> Participant<C> {
    pub fn new(comm: C, limits: SearchLimits) -> Self {
        Self {
            comm,
            board: Board::startpos(),
            limits,
            stats: SearchStats::default(),
            moves_searched: 0,
        }
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.comm.rank()
    }

    #[inline]
    pub fn comm(&self) -> &C {
        &self.comm
    }

    /// 直近の同期時点のレプリカ
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// これまでの全ラウンドの探索統計の累計
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn moves_searched(&self) -> u64 {
        self.moves_searched
    }

    /// 担当するルート手を探索し、その中の最善手を返す
    ///
    /// 位置ごとの盤面再同期ブロードキャストを全ランクで揃えるため、担当外の
    /// 位置も含めて合法手リスト全体を走査する。
    pub fn play_round(&mut self, round: &RoundState) -> Result<RankResult, CollectiveError> {
        let rank = self.comm.rank();
        let size = self.comm.size();
        self.board = round.board;

        let moves = self.board.legal_moves(round.to_move);
        debug!(
            "rank {rank}: {} root moves for {}, owns positions {:?}",
            moves.len(),
            round.to_move,
            owned_positions(moves.len(), rank, size).collect::<Vec<_>>()
        );

        let mut best: Option<(i32, Square)> = None;
        for (position, &mv) in (1..).zip(moves.iter()) {
            if owner_of(position, size) == rank {
                let (score, stats) =
                    search_root_move(&mut self.board, mv, round.to_move, &self.limits);
                self.stats += stats;
                self.moves_searched += 1;
                debug!(
                    "rank {rank}: move {} scored {score} ({} nodes{})",
                    Move::Place(mv),
                    stats.nodes,
                    if stats.timed_out { ", timed out" } else { "" }
                );
                if best.is_none_or(|(best_score, _)| score > best_score) {
                    best = Some((score, mv));
                }
            }

            let mut synced = round.board;
            self.comm.broadcast_board(&mut synced)?;
            self.board = synced;
            trace!("rank {rank}: replica synchronised after position {position}");
        }

        Ok(best.map_or(RankResult::PASS, |(score, sq)| RankResult::found(score, sq)))
    }
}
