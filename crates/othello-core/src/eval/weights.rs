//! 評価関数の定数
//!
//! 係数はチューニング済みの経験値。変更すると指し手が変わる。

use crate::types::Square;

/// 安定度評価の隅マス倍率
pub const CORNER_WEIGHT: i32 = 4;
/// 安定度評価の辺マス倍率
pub const EDGE_WEIGHT: i32 = 2;
/// 安定度評価の内部マス倍率
pub const INTERIOR_WEIGHT: i32 = 1;

/// 隅1マスあたりの点数
pub const CORNER_VALUE: i32 = 11;
/// 辺1マスあたりの点数（隅を除く）
pub const EDGE_VALUE: i32 = 6;

/// マスごとの静的重み（番兵付き 10x10、番兵は 0）
#[rustfmt::skip]
pub const STABILITY_WEIGHTS: [i32; Square::PADDED_LEN] = [
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
    0,  4, -3,  2,  2,  2,  2, -3,  4,  0,
    0, -3, -4, -1, -1, -1, -1, -4, -3,  0,
    0,  2, -1,  1,  0,  0,  1, -1,  2,  0,
    0,  2, -1,  0,  1,  1,  0, -1,  2,  0,
    0,  2, -1,  0,  1,  1,  0, -1,  2,  0,
    0,  2, -1,  1,  0,  0,  1, -1,  2,  0,
    0, -3, -4, -1, -1, -1, -1, -4, -3,  0,
    0,  4, -3,  2,  2,  2,  2, -3,  4,  0,
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
];

/// マスの分類に応じた安定度倍率
#[inline]
pub const fn class_weight(sq: Square) -> i32 {
    if sq.is_corner() {
        CORNER_WEIGHT
    } else if sq.is_edge() {
        EDGE_WEIGHT
    } else {
        INTERIOR_WEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_symmetric() {
        for sq in Square::ALL {
            let mirrored = Square::from_row_col(sq.col(), sq.row()).unwrap();
            let flipped = Square::from_row_col(7 - sq.row(), 7 - sq.col()).unwrap();
            assert_eq!(STABILITY_WEIGHTS[sq.index()], STABILITY_WEIGHTS[mirrored.index()]);
            assert_eq!(STABILITY_WEIGHTS[sq.index()], STABILITY_WEIGHTS[flipped.index()]);
        }
    }

    #[test]
    fn test_sentinel_ring_has_zero_weight() {
        for index in 0..Square::PADDED_LEN {
            if Square::new(index).is_none() {
                assert_eq!(STABILITY_WEIGHTS[index], 0, "sentinel {index}");
            }
        }
    }

    #[test]
    fn test_class_weight() {
        assert_eq!(class_weight(Square::new(11).unwrap()), CORNER_WEIGHT);
        assert_eq!(class_weight(Square::new(14).unwrap()), EDGE_WEIGHT);
        assert_eq!(class_weight(Square::new(51).unwrap()), EDGE_WEIGHT);
        assert_eq!(class_weight(Square::new(44).unwrap()), INTERIOR_WEIGHT);
    }
}
