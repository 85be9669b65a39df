//! 五子棋棋盘
//!
//! 使用一维数组按行存储格子，支持增量落子、按顺序悔棋，
//! 以及局部（过最后一子的四条线）和全局的五连检测。

use crate::error::{GomokuError, Result};
use crate::types::{Color, GameResult, Position, DIRECTIONS, WINDOW_RADIUS, WIN_LENGTH};
use std::collections::VecDeque;
use std::fmt;

/// 棋盘最大边长
pub const MAX_BOARD_SIZE: usize = 25;

/// 棋盘状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: i32,
    /// size * size 个格子，`squares[y * size + x]`
    squares: Vec<Option<Color>>,
    /// 空格数，每次落子/悔棋增量维护
    empty_count: usize,
    /// 已落子坐标，最近的在队尾
    history: VecDeque<Position>,
    /// 历史容量，超出时丢弃最早的记录
    history_capacity: usize,
}

impl Board {
    /// 创建空棋盘，历史容量为整盘格子数（对局中不会丢弃记录）
    ///
    /// 边长必须在 `1..=MAX_BOARD_SIZE` 之内。
    pub fn new(size: usize) -> Result<Self> {
        Self::with_history_capacity(size, size.saturating_mul(size))
    }

    /// 创建空棋盘并指定历史容量
    pub fn with_history_capacity(size: usize, history_capacity: usize) -> Result<Self> {
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GomokuError::BoardSize(size));
        }
        let cells = size * size;
        Ok(Board {
            size: size as i32,
            squares: vec![None; cells],
            empty_count: cells,
            history: VecDeque::with_capacity(history_capacity.min(cells)),
            history_capacity,
        })
    }

    /// 从初始局面创建棋盘
    ///
    /// 坐标越界、重复，或摆好后局面已经结束（有五连或下满）都会被拒绝。
    /// 摆放的棋子不进入悔棋历史。
    pub fn from_template(size: usize, white: &[Position], black: &[Position]) -> Result<Board> {
        let mut board = Board::new(size)?;

        let stones = white
            .iter()
            .map(|p| (*p, Color::White))
            .chain(black.iter().map(|p| (*p, Color::Black)));

        for (pos, color) in stones {
            if !board.is_within_bounds(pos) {
                return Err(GomokuError::InvalidTemplate(format!(
                    "{} stone at {} is outside a {}x{} board",
                    color, pos, size, size
                )));
            }
            if !board.is_empty(pos) {
                return Err(GomokuError::InvalidTemplate(format!(
                    "duplicate stone at {}",
                    pos
                )));
            }
            board.place(pos, Some(color));
            board.empty_count -= 1;
        }

        if let GameResult::Win(color) = board.check_win() {
            return Err(GomokuError::InvalidTemplate(format!(
                "{} already has five in a row",
                color
            )));
        }
        if board.empty_count == 0 {
            return Err(GomokuError::InvalidTemplate("board is already full".to_string()));
        }

        Ok(board)
    }

    /// 复制一份供搜索使用的棋盘，保证历史容量不小于搜索深度
    pub fn search_copy(&self, depth: usize) -> Board {
        let mut copy = self.clone();
        copy.history_capacity = copy.history_capacity.max(depth);
        copy
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// 棋盘上的棋子数
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.squares.len() - self.empty_count
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.empty_count == self.squares.len()
    }

    #[inline]
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    /// 悔棋历史（最早的在前）
    pub fn history(&self) -> impl Iterator<Item = Position> + '_ {
        self.history.iter().copied()
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// 最后一手
    #[inline]
    pub fn last_move(&self) -> Option<Position> {
        self.history.back().copied()
    }

    #[inline]
    pub fn is_within_bounds(&self, pos: Position) -> bool {
        (0..self.size).contains(&pos.x) && (0..self.size).contains(&pos.y)
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        (pos.y * self.size + pos.x) as usize
    }

    #[inline]
    fn place(&mut self, pos: Position, cell: Option<Color>) {
        let idx = self.index(pos);
        self.squares[idx] = cell;
    }

    /// 获取某位置的棋子颜色，空格或越界都返回 None
    #[inline]
    pub fn stone_at(&self, pos: Position) -> Option<Color> {
        if !self.is_within_bounds(pos) {
            return None;
        }
        self.squares[self.index(pos)]
    }

    /// 位置在棋盘内且没有棋子
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.is_within_bounds(pos) && self.squares[self.index(pos)].is_none()
    }

    /// 所有棋子，按行优先顺序
    pub fn stones(&self) -> impl Iterator<Item = (Position, Color)> + '_ {
        let size = self.size;
        self.squares.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|c| (Position::new(i as i32 % size, i as i32 / size), c))
        })
    }

    /// 某方的所有棋子
    pub fn stones_of(&self, color: Color) -> Vec<Position> {
        self.stones()
            .filter(|(_, c)| *c == color)
            .map(|(p, _)| p)
            .collect()
    }

    /// 落子
    ///
    /// 越界或已有棋子时返回 false，棋盘不变。
    pub fn make_move(&mut self, pos: Position, color: Color) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.place(pos, Some(color));
        self.empty_count -= 1;

        if self.history_capacity == 0 {
            return true;
        }
        if self.history.len() == self.history_capacity {
            self.history.pop_front();
        }
        self.history.push_back(pos);
        true
    }

    /// 撤销最近一手
    ///
    /// 必须与 `make_move` 严格逆序配对。历史为空时返回 false。
    pub fn undo_move(&mut self) -> bool {
        self.pop_move().is_some()
    }

    fn pop_move(&mut self) -> Option<Position> {
        let pos = self.history.pop_back()?;
        self.place(pos, None);
        self.empty_count += 1;
        Some(pos)
    }

    /// 落子（返回错误类型）
    pub fn try_move(&mut self, pos: Position, color: Color) -> Result<()> {
        if self.make_move(pos, color) {
            Ok(())
        } else {
            Err(GomokuError::InvalidMove { pos })
        }
    }

    /// 悔棋（返回被撤销的位置）
    pub fn try_undo(&mut self) -> Result<Position> {
        self.pop_move().ok_or(GomokuError::UndoUnderflow)
    }

    /// 检查刚落在 `pos` 的棋子是否形成五连
    ///
    /// 只看过该点的四条线，每条线取 -4..=+4 的 9 格窗口。
    /// 无五连且棋盘已满时为和棋。
    pub fn check_win_at(&self, pos: Position) -> GameResult {
        if let Some(color) = self.stone_at(pos) {
            for (dx, dy) in DIRECTIONS {
                let mut run = 0;
                for k in -WINDOW_RADIUS..=WINDOW_RADIUS {
                    if self.stone_at(pos.offset(dx * k, dy * k)) == Some(color) {
                        run += 1;
                        if run >= WIN_LENGTH {
                            return GameResult::Win(color);
                        }
                    } else {
                        run = 0;
                    }
                }
            }
        }

        if self.empty_count == 0 {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    /// 全盘扫描五连，只返回 Ongoing 或 Win
    pub fn check_win(&self) -> GameResult {
        for (pos, color) in self.stones() {
            for (dx, dy) in DIRECTIONS {
                // 只从一段连子的起点开始数
                if self.stone_at(pos.offset(-dx, -dy)) == Some(color) {
                    continue;
                }
                let run = (0..)
                    .take_while(|&k| self.stone_at(pos.offset(dx * k, dy * k)) == Some(color))
                    .count() as u32;
                if run >= WIN_LENGTH {
                    return GameResult::Win(color);
                }
            }
        }
        GameResult::Ongoing
    }
}

impl fmt::Display for Board {
    /// 控制台渲染：X 为白，O 为黑，_ 为空，坐标从 1 开始
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.size {
            write!(f, "{:>3}", x + 1)?;
        }
        writeln!(f)?;
        for y in 0..self.size {
            write!(f, "{:>3}", y + 1)?;
            for x in 0..self.size {
                let symbol = self
                    .stone_at(Position::new(x, y))
                    .map_or('_', |c| c.symbol());
                write!(f, "{:>3}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
