//! 错误类型

use crate::types::Position;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GomokuError {
    /// 坐标越界或格子已被占用
    #[error("invalid move at {pos}: out of bounds or occupied")]
    InvalidMove { pos: Position },

    /// 棋盘边长超出支持范围
    #[error("unsupported board size: {0}")]
    BoardSize(usize),

    /// 历史为空时悔棋
    #[error("nothing to undo")]
    UndoUnderflow,

    /// 初始局面非法（越界坐标或局面已经结束）
    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    #[error("invalid notation: {0}")]
    Notation(String),

    #[error("invalid config: {0}")]
    Config(String),

    /// 对局已结束
    #[error("game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, GomokuError>;
