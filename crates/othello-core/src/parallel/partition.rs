//! ルート手のラウンドロビン分担

/// 走査順で 1 始まりの `position` 番目のルート手を担当するランク
#[inline]
pub fn owner_of(position: usize, size: usize) -> usize {
    debug_assert!(size >= 1, "process group must not be empty");
    position % size.max(1)
}

/// `len` 個のルート手のうち `rank` が担当する位置（1 始まり、昇順）
pub fn owned_positions(len: usize, rank: usize, size: usize) -> impl Iterator<Item = usize> {
    (1..=len).filter(move |&position| owner_of(position, size) == rank)
}
