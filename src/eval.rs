//! 棋型评估
//!
//! 以候选点为中心，沿四个方向各取 9 格窗口统计连子，
//! 按权重表折算成分数。越界格子视为无子。

use crate::board::Board;
use crate::types::{Color, PatternTally, Position, DIRECTIONS, WINDOW_RADIUS};
use serde::{Deserialize, Serialize};

/// 棋型权重表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternWeights {
    pub two_in_row: i64,
    pub three_in_row: i64,
    pub four_in_row: i64,
    pub five_in_row: i64,
    pub open_end: i64,
    pub double_threat: i64,
}

impl Default for PatternWeights {
    fn default() -> Self {
        PatternWeights {
            two_in_row: 10,
            three_in_row: 100,
            four_in_row: 1_000,
            five_in_row: 10_000_000,
            open_end: 5,
            double_threat: 50,
        }
    }
}

/// 沿 (dx, dy) 扫描以 `cell` 为中心的 9 格窗口，统计 `color` 的连子
///
/// 每段连子在遇到非本方格子（含越界）或窗口结束时计入对应桶。
pub fn pattern_scan(board: &Board, cell: Position, dx: i32, dy: i32, color: Color) -> PatternTally {
    let mut tally = PatternTally::default();
    let mut run = 0;

    for k in -WINDOW_RADIUS..=WINDOW_RADIUS {
        if board.stone_at(cell.offset(dx * k, dy * k)) == Some(color) {
            run += 1;
        } else {
            tally.record_run(run);
            run = 0;
        }
    }
    tally.record_run(run);

    tally
}

/// 按权重折算棋型计数
#[inline]
pub fn score_tally(tally: &PatternTally, weights: &PatternWeights) -> i64 {
    tally.two_in_row as i64 * weights.two_in_row
        + tally.three_in_row as i64 * weights.three_in_row
        + tally.four_in_row as i64 * weights.four_in_row
        + tally.five_in_row as i64 * weights.five_in_row
        + tally.open_end as i64 * weights.open_end
        + tally.double_threat as i64 * weights.double_threat
}

/// 估计在 `cell` 落 `color` 子的价值（不修改棋盘）
///
/// 四个方向上本方棋型分减去对方棋型分。
pub fn appraise(board: &Board, cell: Position, color: Color, weights: &PatternWeights) -> i64 {
    let opponent = color.opposite();
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| {
            score_tally(&pattern_scan(board, cell, dx, dy, color), weights)
                - score_tally(&pattern_scan(board, cell, dx, dy, opponent), weights)
        })
        .sum()
}

/// 局面静态评估（`color` 视角）
///
/// 对所有空格累加双方估值之差，作为定深搜索的叶子评估。
pub fn evaluate_position(board: &Board, color: Color, weights: &PatternWeights) -> i64 {
    let opponent = color.opposite();
    let size = board.size();
    let mut score = 0;
    for y in 0..size {
        for x in 0..size {
            let cell = Position::new(x, y);
            if board.is_empty(cell) {
                score += appraise(board, cell, color, weights) - appraise(board, cell, opponent, weights);
            }
        }
    }
    score
}
