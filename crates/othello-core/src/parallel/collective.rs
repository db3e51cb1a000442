//! 探索グループの全参加者が共有する集団通信

use std::time::Duration;

use thiserror::Error;

use crate::board::Board;
use crate::types::{Color, Move, Square};

/// コーディネータのランク
pub const ROOT: usize = 0;

/// 次のラウンドがあるか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Stop,
}

/// 1ラウンド分の複製される入力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    pub board: Board,
    pub to_move: Color,
}

/// ブロードキャストの中身。ルートの値で他ランクの値を上書きする
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packet {
    Signal(Signal),
    Round(RoundState),
    Board(Board),
}

impl Packet {
    pub fn kind(&self) -> &'static str {
        match self {
            Packet::Signal(_) => "signal",
            Packet::Round(_) => "round",
            Packet::Board(_) => "board",
        }
    }
}

/// ランク間で受け渡す結果の整数表現
pub type WireResult = (i32, i32);

/// 参加者がそのラウンドで見つけた最善のルート手
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankResult {
    pub score: i32,
    pub mv: Move,
}

impl RankResult {
    /// ルート手を1つも探索しなかった参加者の結果
    pub const PASS: RankResult = RankResult { score: -1, mv: Move::Pass };

    pub fn found(score: i32, sq: Square) -> Self {
        Self { score, mv: Move::Place(sq) }
    }

    /// 集約用の整数ペア `(score, index)`。パスの index は -1
    #[inline]
    pub const fn to_wire(self) -> WireResult {
        (self.score, self.mv.to_wire())
    }

    #[inline]
    pub fn from_wire((score, mv): WireResult) -> Self {
        Self { score, mv: Move::from_wire(mv) }
    }
}

/// 集団通信の失敗。グループ全体にとって常に致命的
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectiveError {
    #[error("rank {rank}: collective peer disconnected")]
    Disconnected { rank: usize },
    #[error("rank {rank}: no collective message within {waited:?}")]
    Timeout { rank: usize, waited: Duration },
    #[error("rank {rank}: expected {expected} packet, received {found}")]
    Mismatch {
        rank: usize,
        expected: &'static str,
        found: &'static str,
    },
}

/// `size` 人の固定グループ上のブロッキング集団通信
pub trait Collective: Send {
    fn rank(&self) -> usize;

    fn size(&self) -> usize;

    #[inline]
    fn is_root(&self) -> bool {
        self.rank() == ROOT
    }

    /// 1対全。ルートが `packet` を送り、他ランクの `packet` はルートの値で置き換わる
    fn broadcast(&self, packet: &mut Packet) -> Result<(), CollectiveError>;

    /// 全対1。ルートはランク順に並んだ全員の結果を受け取り、他ランクは `None`
    fn gather(&self, result: RankResult) -> Result<Option<Vec<RankResult>>, CollectiveError>;

    fn broadcast_signal(&self, signal: &mut Signal) -> Result<(), CollectiveError> {
        let mut packet = Packet::Signal(*signal);
        self.broadcast(&mut packet)?;
        if let Packet::Signal(received) = packet {
            *signal = received;
        }
        Ok(())
    }

    fn broadcast_round(&self, round: &mut RoundState) -> Result<(), CollectiveError> {
        let mut packet = Packet::Round(*round);
        self.broadcast(&mut packet)?;
        if let Packet::Round(received) = packet {
            *round = received;
        }
        Ok(())
    }

    fn broadcast_board(&self, board: &mut Board) -> Result<(), CollectiveError> {
        let mut packet = Packet::Board(*board);
        self.broadcast(&mut packet)?;
        if let Packet::Board(received) = packet {
            *board = received;
        }
        Ok(())
    }
}
