//! 随机 AI 策略

use super::{count_node, sort_and_truncate, AIStrategy, ScoredMove};
use crate::board::Board;
use crate::movegen::generate_exhaustive;
use crate::types::Color;
use rand::prelude::*;
use std::cell::RefCell;

/// 随机 AI - 在所有空格中随机落子
///
/// 未指定种子时用系统熵初始化，是唯一的非确定性策略。
pub struct RandomAI {
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        RandomAI {
            rng: RefCell::new(rng),
        }
    }
}

impl AIStrategy for RandomAI {
    fn select_moves(&self, board: &Board, _color: Color, n: usize) -> Vec<ScoredMove> {
        let mut rng = self.rng.borrow_mut();

        let mut scored: Vec<ScoredMove> = generate_exhaustive(board)
            .into_iter()
            .map(|mv| {
                count_node();
                ScoredMove {
                    mv,
                    score: rng.gen::<u32>() as i64,
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

    #[test]
    fn test_random_ai() {
        let board = Board::new(9).unwrap();
        let ai = RandomAI::new(Some(42));
        let moves = ai.select_moves(&board, Color::White, 5);
        assert_eq!(moves.len(), 5);
        assert!(moves.iter().all(|sm| board.is_empty(sm.mv)));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let board = Board::new(9).unwrap();
        let a = RandomAI::new(Some(7)).select_best_move(&board, Color::Black);
        let b = RandomAI::new(Some(7)).select_best_move(&board, Color::Black);
        assert_eq!(a, b);
    }

    #[test]
    fn test_only_empty_cells() {
        let mut board = Board::new(3).unwrap();
        for x in 0..3 {
            for y in 0..3 {
                if (x, y) != (1, 2) {
                    board.make_move(crate::types::Position::new(x, y), Color::White);
                }
            }
        }
        let ai = RandomAI::new(None);
        assert_eq!(
            ai.select_best_move(&board, Color::Black),
            Some(crate::types::Position::new(1, 2))
        );
    }
}
