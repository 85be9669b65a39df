//! 局面记谱解析和生成
//!
//! 格式: `<边长> <白子> <黑子> <行棋方>`
//!
//! - 棋子坐标从 1 开始，写作 `x,y`，多个坐标用 `;` 分隔
//! - 没有棋子时写 `-`
//! - 行棋方：`w` 或 `b`
//!
//! 例如 `9 5,5;6,5 4,4 b`

use crate::board::{Board, MAX_BOARD_SIZE};
use crate::config::MIN_BOARD_SIZE;
use crate::error::{GomokuError, Result};
use crate::types::{Color, Position};

/// 记谱解析后的状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationState {
    pub size: usize,
    pub white: Vec<Position>,
    pub black: Vec<Position>,
    pub turn: Color,
}

impl NotationState {
    /// 按初始局面规则建盘
    pub fn to_board(&self) -> Result<Board> {
        Board::from_template(self.size, &self.white, &self.black)
    }
}

/// 解析记谱字符串
pub fn parse_notation(s: &str) -> Result<NotationState> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 4 {
        return Err(GomokuError::Notation(format!(
            "expected '<size> <white> <black> <turn>', got: {}",
            s
        )));
    }

    let size = parts[0]
        .parse::<usize>()
        .map_err(|_| GomokuError::Notation(format!("invalid size: {}", parts[0])))?;
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(GomokuError::Notation(format!(
            "size {} out of range {}..={}",
            size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
        )));
    }
    let white = parse_stones(parts[1])?;
    let black = parse_stones(parts[2])?;
    let turn = match parts[3].chars().collect::<Vec<_>>().as_slice() {
        [c] => Color::from_char(*c),
        _ => None,
    }
    .ok_or_else(|| GomokuError::Notation(format!("invalid turn: {}", parts[3])))?;

    Ok(NotationState {
        size,
        white,
        black,
        turn,
    })
}

fn parse_stones(s: &str) -> Result<Vec<Position>> {
    if s == "-" {
        return Ok(Vec::new());
    }
    s.split(';')
        .map(|coord| {
            Position::from_human_str(coord)
                .ok_or_else(|| GomokuError::Notation(format!("invalid coordinate: {}", coord)))
        })
        .collect()
}

fn stones_to_str(stones: &[Position]) -> String {
    if stones.is_empty() {
        return "-".to_string();
    }
    stones
        .iter()
        .map(|p| p.to_human_str())
        .collect::<Vec<_>>()
        .join(";")
}

/// 从记谱建盘，返回棋盘与行棋方
pub fn board_from_notation(s: &str) -> Result<(Board, Color)> {
    let state = parse_notation(s)?;
    Ok((state.to_board()?, state.turn))
}

/// 生成记谱字符串
pub fn board_to_notation(board: &Board, turn: Color) -> String {
    let turn_char = match turn {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!(
        "{} {} {} {}",
        board.size(),
        stones_to_str(&board.stones_of(Color::White)),
        stones_to_str(&board.stones_of(Color::Black)),
        turn_char
    )
}
