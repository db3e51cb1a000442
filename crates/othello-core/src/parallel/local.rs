//! crossbeam チャネル上のプロセス内探索グループ
//!
//! 各参加者は自分の盤面レプリカを持ち、集団通信だけで他と通信する。
//! ルートはワーカーごとに送信チャネルと結果チャネルを1本ずつ持つため、
//! どのランクが欠けても `Disconnected` として検出できる。

use std::mem::discriminant;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded, unbounded};

use super::collective::{Collective, CollectiveError, Packet, RankResult, ROOT, WireResult};

enum Link {
    Root {
        workers: Vec<Sender<Packet>>,
        /// 要素 `i` はランク `i + 1` の結果
        results: Vec<Receiver<WireResult>>,
    },
    Worker {
        packets: Receiver<Packet>,
        results: Sender<WireResult>,
    },
}

pub struct LocalCollective {
    rank: usize,
    size: usize,
    timeout: Option<Duration>,
    link: Link,
}

/// `size` 人（最低1人）のグループを作る。戻り値の `i` 番目がランク `i`、
/// ランク 0 がルート。
///
/// `timeout` を指定すると、それ以上メッセージを待った参加者は
/// `CollectiveError::Timeout` で失敗する。
pub fn local_group(size: usize, timeout: Option<Duration>) -> Vec<LocalCollective> {
    let size = size.max(1);

    let mut packet_senders = Vec::with_capacity(size - 1);
    let mut result_receivers = Vec::with_capacity(size - 1);
    let mut workers = Vec::with_capacity(size - 1);
    for rank in 1..size {
        let (packet_tx, packet_rx) = unbounded();
        // 1ラウンドにつき結果は1つだけ
        let (result_tx, result_rx) = bounded(1);
        packet_senders.push(packet_tx);
        result_receivers.push(result_rx);
        workers.push(LocalCollective {
            rank,
            size,
            timeout,
            link: Link::Worker { packets: packet_rx, results: result_tx },
        });
    }

    let root = LocalCollective {
        rank: ROOT,
        size,
        timeout,
        link: Link::Root { workers: packet_senders, results: result_receivers },
    };
    std::iter::once(root).chain(workers).collect()
}

impl LocalCollective {
    /// `rank` は待っている相手ではなく自分のランク
    fn recv<T>(&self, rx: &Receiver<T>) -> Result<T, CollectiveError> {
        let rank = self.rank;
        match self.timeout {
            Some(waited) => rx.recv_timeout(waited).map_err(|e| match e {
                RecvTimeoutError::Timeout => CollectiveError::Timeout { rank, waited },
                RecvTimeoutError::Disconnected => CollectiveError::Disconnected { rank },
            }),
            None => rx.recv().map_err(|_| CollectiveError::Disconnected { rank }),
        }
    }
}

impl Collective for LocalCollective {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn broadcast(&self, packet: &mut Packet) -> Result<(), CollectiveError> {
        match &self.link {
            Link::Root { workers, .. } => {
                for tx in workers {
                    tx.send(*packet).map_err(|_| CollectiveError::Disconnected { rank: self.rank })?;
                }
                Ok(())
            }
            Link::Worker { packets, .. } => {
                let received = self.recv(packets)?;
                if discriminant(&received) != discriminant(packet) {
                    return Err(CollectiveError::Mismatch {
                        rank: self.rank,
                        expected: packet.kind(),
                        found: received.kind(),
                    });
                }
                *packet = received;
                Ok(())
            }
        }
    }

    fn gather(&self, result: RankResult) -> Result<Option<Vec<RankResult>>, CollectiveError> {
        match &self.link {
            Link::Worker { results, .. } => {
                results
                    .send(result.to_wire())
                    .map_err(|_| CollectiveError::Disconnected { rank: self.rank })?;
                Ok(None)
            }
            Link::Root { results, .. } => {
                let mut gathered = Vec::with_capacity(self.size);
                gathered.push(result);
                for rx in results {
                    gathered.push(RankResult::from_wire(self.recv(rx)?));
                }
                Ok(Some(gathered))
            }
        }
    }
}
