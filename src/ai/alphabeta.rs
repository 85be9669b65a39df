//! Alpha-Beta AI 策略
//!
//! 与 Minimax 搜索同样的树，带 alpha/beta 窗口剪枝。
//! 每层候选先按单层估值排序（极大层降序、极小层升序）以提高剪枝效率。
//! 返回的前 n 个走法，分数都与同深度 Minimax 完全一致。

use super::{count_node, sort_and_truncate, terminal_score, AIConfig, AIStrategy, ScoredMove};
use crate::board::Board;
use crate::eval::{appraise, evaluate_position, PatternWeights};
use crate::movegen::generate_local;
use crate::types::{Color, GameResult, Position};
use log::trace;

/// Alpha-Beta AI
pub struct AlphaBetaAI {
    depth: u32,
    weights: PatternWeights,
}

impl AlphaBetaAI {
    pub fn new(config: &AIConfig) -> Self {
        AlphaBetaAI {
            depth: config.depth.max(1),
            weights: config.weights,
        }
    }

    /// 按 `root` 视角的单层估值排序（稳定排序，同分保持生成顺序）
    fn order_moves(
        &self,
        board: &Board,
        moves: Vec<Position>,
        root: Color,
        maximizing: bool,
    ) -> Vec<Position> {
        let mut keyed: Vec<(i64, Position)> = moves
            .into_iter()
            .map(|mv| (appraise(board, mv, root, &self.weights), mv))
            .collect();
        if maximizing {
            keyed.sort_by(|a, b| b.0.cmp(&a.0));
        } else {
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
        }
        keyed.into_iter().map(|(_, mv)| mv).collect()
    }

    fn alphabeta(
        &self,
        board: &mut Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        to_move: Color,
        root: Color,
    ) -> i64 {
        count_node();

        if depth == 0 {
            return evaluate_position(board, root, &self.weights);
        }
        let candidates = generate_local(board);
        if candidates.is_empty() {
            return evaluate_position(board, root, &self.weights);
        }

        let maximizing = to_move == root;
        let candidates = self.order_moves(board, candidates, root, maximizing);
        let mut best = if maximizing { i64::MIN } else { i64::MAX };

        for mv in candidates {
            if !board.make_move(mv, to_move) {
                continue;
            }
            let score = match board.check_win_at(mv) {
                GameResult::Ongoing => {
                    self.alphabeta(board, depth - 1, alpha, beta, to_move.opposite(), root)
                }
                result => terminal_score(result, root, depth),
            };
            board.undo_move();

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

impl AIStrategy for AlphaBetaAI {
    /// 根节点只用当前第 n 名的分数作为 alpha
    ///
    /// 进入前 n 的走法都在 (alpha, +inf) 窗口内得到精确分；
    /// 低于窗口的走法只有上界，但一定排在前 n 名之后被截掉。
    fn select_moves(&self, board: &Board, color: Color, n: usize) -> Vec<ScoredMove> {
        if n == 0 {
            return Vec::new();
        }
        let mut work = board.search_copy(self.depth as usize);
        let candidates = self.order_moves(&work, generate_local(&work), color, true);

        // 目前最好的 n 个精确分，降序
        let mut top: Vec<i64> = Vec::with_capacity(n.min(candidates.len()));
        let mut scored = Vec::with_capacity(candidates.len());
        for mv in candidates {
            if !work.make_move(mv, color) {
                continue;
            }
            let alpha = if top.len() == n { top[n - 1] } else { i64::MIN };
            let score = match work.check_win_at(mv) {
                GameResult::Ongoing => self.alphabeta(
                    &mut work,
                    self.depth - 1,
                    alpha,
                    i64::MAX,
                    color.opposite(),
                    color,
                ),
                result => terminal_score(result, color, self.depth),
            };
            work.undo_move();

            trace!("alphabeta {} -> {} (alpha {})", mv, score, alpha);
            if score > alpha {
                let at = top.partition_point(|&s| s >= score);
                top.insert(at, score);
                top.truncate(n);
            }
            scored.push(ScoredMove { mv, score });
        }

        sort_and_truncate(&mut scored, n);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MinimaxAI;

    fn config(depth: u32) -> AIConfig {
        AIConfig {
            depth,
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_minimax_score() {
        let board = Board::from_template(
            7,
            &[Position::new(3, 3), Position::new(4, 3)],
            &[Position::new(3, 4)],
        )
        .unwrap();

        for depth in 1..=2 {
            let ab = AlphaBetaAI::new(&config(depth)).select_moves(&board, Color::Black, 1);
            let mm = MinimaxAI::new(&config(depth)).select_moves(&board, Color::Black, 1);
            assert_eq!(ab[0].score, mm[0].score, "depth {}", depth);
        }
    }

    #[test]
    fn test_ranked_scores_are_exact() {
        let board = Board::from_template(
            7,
            &[Position::new(3, 3), Position::new(4, 3)],
            &[Position::new(3, 4)],
        )
        .unwrap();

        let exact = MinimaxAI::new(&config(2)).select_moves(&board, Color::Black, usize::MAX);
        let ab = AlphaBetaAI::new(&config(2));
        for n in [1, 3, 5, usize::MAX] {
            let ranked = ab.select_moves(&board, Color::Black, n);
            assert_eq!(ranked.len(), n.min(exact.len()));
            for sm in &ranked {
                let truth = exact.iter().find(|e| e.mv == sm.mv).unwrap();
                assert_eq!(sm.score, truth.score, "{} with n={}", sm.mv, n);
            }
            let scores: Vec<i64> = ranked.iter().map(|sm| sm.score).collect();
            let expected: Vec<i64> = exact.iter().take(n).map(|sm| sm.score).collect();
            assert_eq!(scores, expected, "n={}", n);
        }
        assert!(ab.select_moves(&board, Color::Black, 0).is_empty());
    }

    #[test]
    fn test_order_moves_direction() {
        let board = Board::from_template(
            9,
            &[Position::new(3, 4), Position::new(4, 4), Position::new(5, 4)],
            &[Position::new(0, 0)],
        )
        .unwrap();
        let ai = AlphaBetaAI::new(&config(1));
        let moves = generate_local(&board);
        let w = PatternWeights::default();

        let desc = ai.order_moves(&board, moves.clone(), Color::White, true);
        assert!(desc.windows(2).all(|p| {
            appraise(&board, p[0], Color::White, &w) >= appraise(&board, p[1], Color::White, &w)
        }));

        let asc = ai.order_moves(&board, moves, Color::White, false);
        assert!(asc.windows(2).all(|p| {
            appraise(&board, p[0], Color::White, &w) <= appraise(&board, p[1], Color::White, &w)
        }));
    }

    #[test]
    fn test_blocks_four_threat() {
        let white: Vec<Position> = (0..=3).map(|x| Position::new(x, 2)).collect();
        let black = [Position::new(3, 4), Position::new(5, 5)];
        let board = Board::from_template(7, &white, &black).unwrap();

        let ai = AlphaBetaAI::new(&config(2));
        assert_eq!(
            ai.select_best_move(&board, Color::Black),
            Some(Position::new(4, 2))
        );
    }
}
