//! Minimax AI 策略

use super::{count_node, sort_and_truncate, terminal_score, AIConfig, AIStrategy, ScoredMove};
use crate::board::Board;
use crate::eval::{evaluate_position, PatternWeights};
use crate::movegen::generate_local;
use crate::types::{Color, GameResult};
use log::trace;

/// Minimax AI - 定深极大极小搜索，不剪枝
pub struct MinimaxAI {
    depth: u32,
    weights: PatternWeights,
}

impl MinimaxAI {
    pub fn new(config: &AIConfig) -> Self {
        MinimaxAI {
            depth: config.depth.max(1),
            weights: config.weights,
        }
    }

    /// 递归搜索，返回 `root` 视角的分数
    ///
    /// `to_move` 为当前行棋方，与 `root` 相同时取最大，否则取最小。
    fn minimax(&self, board: &mut Board, depth: u32, to_move: Color, root: Color) -> i64 {
        count_node();

        if depth == 0 {
            return evaluate_position(board, root, &self.weights);
        }
        let candidates = generate_local(board);
        if candidates.is_empty() {
            return evaluate_position(board, root, &self.weights);
        }

        let maximizing = to_move == root;
        let mut best = if maximizing { i64::MIN } else { i64::MAX };

        for mv in candidates {
            if !board.make_move(mv, to_move) {
                continue;
            }
            let score = match board.check_win_at(mv) {
                GameResult::Ongoing => self.minimax(board, depth - 1, to_move.opposite(), root),
                result => terminal_score(result, root, depth),
            };
            board.undo_move();

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

impl AIStrategy for MinimaxAI {
    fn select_moves(&self, board: &Board, color: Color, n: usize) -> Vec<ScoredMove> {
        let mut work = board.search_copy(self.depth as usize);
        let candidates = generate_local(&work);

        let mut scored = Vec::with_capacity(candidates.len());
        for mv in candidates {
            if !work.make_move(mv, color) {
                continue;
            }
            let score = match work.check_win_at(mv) {
                GameResult::Ongoing => self.minimax(&mut work, self.depth - 1, color.opposite(), color),
                result => terminal_score(result, color, self.depth),
            };
            work.undo_move();

            trace!("minimax {} -> {}", mv, score);
            scored.push(ScoredMove { mv, score });
        }

        sort_and_truncate(&mut scored, n);
        scored
    }
}
