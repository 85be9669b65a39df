//! 五子棋核心类型定义
//!
//! 定义棋盘、搜索和评估共用的基础数据类型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 棋子颜色/阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// 获取对方阵营
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// 从字符解析（'w' / 'b'）
    pub fn from_char(c: char) -> Option<Color> {
        match c.to_ascii_lowercase() {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    /// 棋盘上显示的符号
    pub fn symbol(&self) -> char {
        match self {
            Color::White => 'X',
            Color::Black => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// 棋盘位置 (x, y)
///
/// x: 列，y: 行，内部均从 0 开始。
/// 对外（命令行、记谱）使用从 1 开始的坐标。
/// 使用有符号整数，越界位置也可以表示，由棋盘负责判断。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// 从 1 起始的人类坐标创建
    pub fn from_human(x: i32, y: i32) -> Self {
        Position { x: x - 1, y: y - 1 }
    }

    /// 转换为 1 起始的人类坐标
    pub fn to_human(&self) -> (i32, i32) {
        (self.x + 1, self.y + 1)
    }

    /// 位置加偏移量
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// 切比雪夫距离
    pub fn chebyshev(&self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// 从人类坐标字符串解析（如 "5,5" 或 "5 5"）
    pub fn from_human_str(s: &str) -> Option<Position> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty());
        let x = parts.next()?.parse::<i32>().ok()?;
        let y = parts.next()?.parse::<i32>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Position::from_human(x, y))
    }

    /// 转换为人类坐标字符串（如 "5,5"）
    pub fn to_human_str(&self) -> String {
        let (x, y) = self.to_human();
        format!("{},{}", x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_human_str())
    }
}

/// 游戏结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Win(Color),
    Draw,
}

impl GameResult {
    /// 是否已经结束
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Ongoing => write!(f, "ongoing"),
            GameResult::Win(color) => write!(f, "{} wins", color),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// 单条直线上的棋型计数
///
/// `open_end` 与 `double_threat` 有权重但扫描器目前不统计。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternTally {
    pub two_in_row: u32,
    pub three_in_row: u32,
    pub four_in_row: u32,
    pub five_in_row: u32,
    pub open_end: u32,
    pub double_threat: u32,
}

impl PatternTally {
    /// 按连子长度累加一次
    #[inline]
    pub fn record_run(&mut self, len: u32) {
        match len {
            0 | 1 => {}
            2 => self.two_in_row += 1,
            3 => self.three_in_row += 1,
            4 => self.four_in_row += 1,
            _ => self.five_in_row += 1,
        }
    }
}

/// 四个扫描方向：横、竖、两条对角线
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// 扫描窗口半径（窗口为 -4..=+4 共 9 格）
pub const WINDOW_RADIUS: i32 = 4;

/// 获胜所需连子数
pub const WIN_LENGTH: u32 = 5;
