//! 单层启发式 AI 策略

use super::{count_node, sort_and_truncate, AIConfig, AIStrategy, ScoredMove};
use crate::board::Board;
use crate::eval::{appraise, PatternWeights};
use crate::movegen::generate_local;
use crate::types::Color;

/// 启发式 AI - 不搜索，只按落点估值排序
pub struct HeuristicAI {
    weights: PatternWeights,
}

impl HeuristicAI {
    pub fn new(config: &AIConfig) -> Self {
        HeuristicAI {
            weights: config.weights,
        }
    }
}

impl AIStrategy for HeuristicAI {
    fn select_moves(&self, board: &Board, color: Color, n: usize) -> Vec<ScoredMove> {
        let opponent = color.opposite();

        let mut scored: Vec<ScoredMove> = generate_local(board)
            .into_iter()
            .map(|mv| {
                count_node();
                ScoredMove {
                    mv,
                    score: appraise(board, mv, color, &self.weights)
                        - appraise(board, mv, opponent, &self.weights),
                }
            })
            .collect();

        sort_and_truncate(&mut scored, n);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn test_reply_near_first_stone() {
        let mut board = Board::new(9).unwrap();
        let first = Position::from_human(5, 5);
        assert!(board.make_move(first, Color::White));

        let ai = HeuristicAI::new(&AIConfig::default());
        let mv = ai.select_best_move(&board, Color::Black).unwrap();
        assert!(mv.chebyshev(first) <= 2);
        assert!(board.is_empty(mv));
    }

    #[test]
    fn test_empty_board_takes_center() {
        let board = Board::new(9).unwrap();
        let ai = HeuristicAI::new(&AIConfig::default());
        assert_eq!(
            ai.select_best_move(&board, Color::White),
            Some(Position::new(4, 4))
        );
    }

    #[test]
    fn test_extends_own_line() {
        // 黑方三连 (3..=5, 4)，白子离得较远
        let black: Vec<Position> = (3..=5).map(|x| Position::new(x, 4)).collect();
        let board = Board::from_template(9, &[Position::new(0, 8)], &black).unwrap();
        let ai = HeuristicAI::new(&AIConfig::default());
        let mv = ai.select_best_move(&board, Color::Black).unwrap();
        // 窗口内能看到完整三连的点同分，取生成顺序最靠前的
        assert_eq!(mv, Position::new(1, 4));
        let top = ai.select_moves(&board, Color::Black, 4);
        let xs: Vec<i32> = top.iter().map(|sm| sm.mv.x).collect();
        assert!(top.iter().all(|sm| sm.mv.y == 4));
        assert_eq!(xs, vec![1, 2, 6, 7]);
    }

    #[test]
    fn test_ranked_output() {
        let mut board = Board::new(9).unwrap();
        board.make_move(Position::new(4, 4), Color::White);
        let ai = HeuristicAI::new(&AIConfig::default());
        let moves = ai.select_moves(&board, Color::Black, 5);
        assert_eq!(moves.len(), 5);
        assert!(moves.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
