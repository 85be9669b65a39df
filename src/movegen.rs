//! 候选着法生成
//!
//! - 全盘生成：所有空格
//! - 局部生成：已有棋子周围两格内的空格
//!
//! 两种生成都按行优先 (y, x) 顺序输出，保证搜索结果可复现。

use crate::board::Board;
use crate::types::Position;

/// 局部生成的邻域半径（切比雪夫距离）
pub const LOCAL_RADIUS: i32 = 2;

/// 所有空格，按行优先顺序
pub fn generate_exhaustive(board: &Board) -> Vec<Position> {
    let size = board.size();
    let mut moves = Vec::with_capacity(board.empty_count());
    for y in 0..size {
        for x in 0..size {
            let pos = Position::new(x, y);
            if board.is_empty(pos) {
                moves.push(pos);
            }
        }
    }
    moves
}

/// 已有棋子周围 `LOCAL_RADIUS` 格内的空格，按行优先顺序
///
/// 空棋盘只返回中心点。
pub fn generate_local(board: &Board) -> Vec<Position> {
    let size = board.size();
    if board.is_board_empty() {
        return vec![Position::new(size / 2, size / 2)];
    }

    // 用标记数组去重，再按行优先扫描输出
    let mut marked = vec![false; (size * size) as usize];
    for (stone, _) in board.stones() {
        for dy in -LOCAL_RADIUS..=LOCAL_RADIUS {
            for dx in -LOCAL_RADIUS..=LOCAL_RADIUS {
                let pos = stone.offset(dx, dy);
                if board.is_empty(pos) {
                    marked[(pos.y * size + pos.x) as usize] = true;
                }
            }
        }
    }

    marked
        .iter()
        .enumerate()
        .filter(|(_, &m)| m)
        .map(|(i, _)| Position::new(i as i32 % size, i as i32 / size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_exhaustive_all_empty() {
        let board = Board::new(5).unwrap();
        let moves = generate_exhaustive(&board);
        assert_eq!(moves.len(), 25);
        assert_eq!(moves[0], Position::new(0, 0));
        assert_eq!(moves[1], Position::new(1, 0));
        assert_eq!(moves[24], Position::new(4, 4));
    }

    #[test]
    fn test_exhaustive_skips_stones() {
        let mut board = Board::new(5).unwrap();
        board.make_move(Position::new(1, 0), Color::White);
        let moves = generate_exhaustive(&board);
        assert_eq!(moves.len(), 24);
        assert!(!moves.contains(&Position::new(1, 0)));
    }

    #[test]
    fn test_local_empty_board_center() {
        assert_eq!(generate_local(&Board::new(9).unwrap()), vec![Position::new(4, 4)]);
        assert_eq!(generate_local(&Board::new(10).unwrap()), vec![Position::new(5, 5)]);
    }

    #[test]
    fn test_local_neighborhood() {
        let mut board = Board::new(9).unwrap();
        let stone = Position::new(4, 4);
        board.make_move(stone, Color::White);
        let moves = generate_local(&board);
        // 5x5 邻域减去棋子本身
        assert_eq!(moves.len(), 24);
        assert!(moves.iter().all(|m| m.chebyshev(stone) <= 2));
        assert!(!moves.contains(&stone));
    }

    #[test]
    fn test_local_clipped_at_corner() {
        let mut board = Board::new(9).unwrap();
        board.make_move(Position::new(0, 0), Color::Black);
        let moves = generate_local(&board);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_local_deduplicated_and_sorted() {
        let mut board = Board::new(9).unwrap();
        board.make_move(Position::new(3, 4), Color::White);
        board.make_move(Position::new(4, 4), Color::Black);
        let moves = generate_local(&board);

        let mut sorted = moves.clone();
        sorted.sort_by_key(|p| (p.y, p.x));
        sorted.dedup();
        assert_eq!(moves, sorted);
        // 6x5 的并集减去两颗棋子
        assert_eq!(moves.len(), 28);
    }
}
