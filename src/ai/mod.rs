//! AI 策略模块
//!
//! 提供多种 AI 策略实现：单层启发式、Minimax、Alpha-Beta 以及随机

mod alphabeta;
mod heuristic;
mod minimax;
mod random;

pub use alphabeta::AlphaBetaAI;
pub use heuristic::HeuristicAI;
pub use minimax::MinimaxAI;
pub use random::RandomAI;

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// 全局节点计数器
pub static NODE_COUNT: AtomicU64 = AtomicU64::new(0);

/// 重置节点计数器
pub fn reset_node_count() {
    NODE_COUNT.store(0, AtomicOrdering::Relaxed);
}

/// 获取当前节点计数
pub fn get_node_count() -> u64 {
    NODE_COUNT.load(AtomicOrdering::Relaxed)
}

#[inline]
pub(crate) fn count_node() {
    NODE_COUNT.fetch_add(1, AtomicOrdering::Relaxed);
}

use crate::board::Board;
use crate::error::{GomokuError, Result};
use crate::eval::PatternWeights;
use crate::types::{Color, GameResult, Position};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// 五连得分，远大于任何静态评估
pub const WIN_SCORE: i64 = 1_000_000_000_000;

/// 可用策略名称
pub const AVAILABLE_STRATEGIES: &[&str] = &["heuristic", "minimax", "alphabeta", "random"];

/// 默认策略
pub const DEFAULT_STRATEGY: &str = "alphabeta";

/// 策略种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Heuristic,
    Minimax,
    AlphaBeta,
    Random,
}

impl StrategyKind {
    /// 从策略名称解析（不区分大小写）
    pub fn from_name(name: &str) -> Option<StrategyKind> {
        match name.to_lowercase().as_str() {
            "heuristic" | "heur" => Some(StrategyKind::Heuristic),
            "minimax" => Some(StrategyKind::Minimax),
            "alphabeta" | "alpha_beta" | "ab" => Some(StrategyKind::AlphaBeta),
            "random" => Some(StrategyKind::Random),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Minimax => "minimax",
            StrategyKind::AlphaBeta => "alphabeta",
            StrategyKind::Random => "random",
        }
    }

    /// 是否需要搜索深度
    pub fn uses_depth(&self) -> bool {
        matches!(self, StrategyKind::Minimax | StrategyKind::AlphaBeta)
    }
}

impl FromStr for StrategyKind {
    type Err = GomokuError;

    fn from_str(s: &str) -> Result<Self> {
        StrategyKind::from_name(s).ok_or_else(|| {
            GomokuError::Config(format!(
                "Unknown strategy: {}. Available: {}",
                s,
                AVAILABLE_STRATEGIES.join(", ")
            ))
        })
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 策略帮助文本
pub fn strategies_help() -> String {
    format!(
        "Available strategies: {} (default: {})",
        AVAILABLE_STRATEGIES.join(", "),
        DEFAULT_STRATEGY
    )
}

/// AI 配置
#[derive(Debug, Clone)]
pub struct AIConfig {
    /// 搜索深度（总层数，含根节点这一手）
    pub depth: u32,
    /// 随机种子
    pub seed: Option<u64>,
    /// 棋型权重
    pub weights: PatternWeights,
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            depth: 3,
            seed: None,
            weights: PatternWeights::default(),
        }
    }
}

/// 走法评分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Position,
    pub score: i64,
}

/// AI 策略接口
pub trait AIStrategy {
    /// 选择走法（返回带评分的走法列表，`color` 为行棋方）
    fn select_moves(&self, board: &Board, color: Color, n: usize) -> Vec<ScoredMove>;

    /// 选择最佳走法
    fn select_best_move(&self, board: &Board, color: Color) -> Option<Position> {
        self.select_moves(board, color, 1).first().map(|sm| sm.mv)
    }
}

/// 排序辅助函数
///
/// 稳定排序，同分时保留生成顺序靠前的走法。
pub(crate) fn sort_and_truncate(scored: &mut Vec<ScoredMove>, n: usize) {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(n);
}

/// 终局得分（`root` 视角），剩余深度越大说明赢得越快
#[inline]
pub(crate) fn terminal_score(result: GameResult, root: Color, depth: u32) -> i64 {
    match result {
        GameResult::Win(winner) if winner == root => WIN_SCORE + depth as i64,
        GameResult::Win(_) => -(WIN_SCORE + depth as i64),
        GameResult::Draw | GameResult::Ongoing => 0,
    }
}

/// AI 引擎 - 统一的 AI 接口
pub struct AIEngine {
    kind: StrategyKind,
    strategy: Box<dyn AIStrategy>,
}

impl AIEngine {
    /// 按策略种类创建
    pub fn new(kind: StrategyKind, config: &AIConfig) -> Self {
        let strategy: Box<dyn AIStrategy> = match kind {
            StrategyKind::Heuristic => Box::new(HeuristicAI::new(config)),
            StrategyKind::Minimax => Box::new(MinimaxAI::new(config)),
            StrategyKind::AlphaBeta => Box::new(AlphaBetaAI::new(config)),
            StrategyKind::Random => Box::new(RandomAI::new(config.seed)),
        };
        AIEngine { kind, strategy }
    }

    /// 从策略名称创建
    pub fn from_strategy(name: &str, config: &AIConfig) -> Result<Self> {
        let kind = name.parse::<StrategyKind>()?;
        Ok(Self::new(kind, config))
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// 选择前 n 个走法
    pub fn select_moves(&self, board: &Board, color: Color, n: usize) -> Vec<ScoredMove> {
        let start = Instant::now();
        let nodes_before = get_node_count();
        let moves = self.strategy.select_moves(board, color, n);
        debug!(
            "strategy={} color={} stones={} nodes={} elapsed={:.3}s best={:?}",
            self.kind,
            color,
            board.stone_count(),
            get_node_count() - nodes_before,
            start.elapsed().as_secs_f64(),
            moves.first()
        );
        moves
    }

    /// 选择最佳走法，棋盘已满时返回 None
    pub fn get_move(&self, board: &Board, color: Color) -> Option<Position> {
        self.select_moves(board, color, 1).first().map(|sm| sm.mv)
    }
}
