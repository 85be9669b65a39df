//! 五子棋测试局面库
//!
//! 提供命名的记谱局面，方便测试和调试
//!
//! 命名规范:
//! - EMPTY_n: 空棋盘
//! - OPENING_n: 开局后 1-3 步
//! - MID_n: 中局
//! - FOUR_n: 一方已有四连
//! - SMALL_n: 小棋盘，用于深度搜索测试

use crate::board::Board;
use crate::error::Result;
use crate::notation::board_from_notation;

// =============================================================================
// 空棋盘 (EMPTY)
// =============================================================================

pub const EMPTY_9: &str = "9 - - w";
pub const EMPTY_15: &str = "15 - - w";

// =============================================================================
// 开局 (OPENING)
// =============================================================================

/// 白方天元，黑方应手
pub const OPENING_1: &str = "9 5,5 - b";

/// 白方天元，黑方斜贴，白方应手
pub const OPENING_2: &str = "9 5,5 6,6 w";

/// 白方两子横连
pub const OPENING_3: &str = "9 5,5;6,5 4,4 b";

// =============================================================================
// 中局 (MID)
// =============================================================================

/// 双方各有活二
pub const MID_1: &str = "9 4,4;5,5;5,4 4,5;6,6;3,3 b";

/// 白方活三，黑方需要应对
pub const MID_2: &str = "9 3,5;4,5;5,5 4,4;5,6;2,2 b";

// =============================================================================
// 四连 (FOUR)
// =============================================================================

/// 黑方横向四连，两端皆空，黑方行棋可直接成五
pub const FOUR_1: &str = "9 3,7;4,7;8,8 2,4;3,4;4,4;5,4 b";

/// 白方四连一端被边界挡住，黑方必须堵另一端
pub const FOUR_2: &str = "9 1,3;2,3;3,3;4,3 4,5;6,6;7,7 b";

// =============================================================================
// 小棋盘 (SMALL)
// =============================================================================

pub const SMALL_1: &str = "7 4,4;5,4 4,5 b";
pub const SMALL_2: &str = "7 3,3;4,4 4,3;5,5 w";

/// 所有命名局面
pub const ALL: &[(&str, &str)] = &[
    ("EMPTY_9", EMPTY_9),
    ("EMPTY_15", EMPTY_15),
    ("OPENING_1", OPENING_1),
    ("OPENING_2", OPENING_2),
    ("OPENING_3", OPENING_3),
    ("MID_1", MID_1),
    ("MID_2", MID_2),
    ("FOUR_1", FOUR_1),
    ("FOUR_2", FOUR_2),
    ("SMALL_1", SMALL_1),
    ("SMALL_2", SMALL_2),
];

/// 按记谱建盘（忽略行棋方）
pub fn board(notation: &str) -> Result<Board> {
    board_from_notation(notation).map(|(board, _)| board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_positions_parse() {
        for (name, notation) in ALL {
            assert!(board(notation).is_ok(), "{} failed to parse", name);
        }
    }
}
