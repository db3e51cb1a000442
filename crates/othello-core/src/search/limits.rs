//! 探索制限

use std::time::Duration;

/// 既定の探索深さ
pub const DEFAULT_DEPTH: u32 = 5;

/// 既定の1手あたり持ち時間
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// 持ち時間から差し引く安全マージン
pub const DEFAULT_TIME_OFFSET: Duration = Duration::from_millis(300);

/// 探索制限条件
///
/// 時間制限はルート手1つごとに適用される。複数のルート手を担当する
/// プロセスは合計で `time_limit` を超えうる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// ルート手を指した後の局面から読む深さ
    pub depth: u32,
    /// レフェリーから与えられた1手あたりの持ち時間
    pub time_limit: Duration,
    /// 安全マージン
    pub time_offset: Duration,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_limit: DEFAULT_TIME_LIMIT,
            time_offset: DEFAULT_TIME_OFFSET,
        }
    }
}

impl SearchLimits {
    pub fn new(depth: u32, time_limit: Duration) -> Self {
        Self { depth, time_limit, ..Self::default() }
    }

    pub fn with_time_offset(mut self, time_offset: Duration) -> Self {
        self.time_offset = time_offset;
        self
    }

    /// 打ち切り時刻（ルート手の探索開始からの経過時間）
    #[inline]
    pub fn cutoff(&self) -> Duration {
        self.time_limit.saturating_sub(self.time_offset)
    }
}
