//! Gomoku AI Engine
//!
//! 五子棋 AI 引擎 - 支持启发式、Minimax、Alpha-Beta 搜索

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod test_positions;
pub mod types;

pub use ai::{
    get_node_count, reset_node_count, strategies_help, AIConfig, AIEngine, AIStrategy,
    AlphaBetaAI, HeuristicAI, MinimaxAI, RandomAI, ScoredMove, StrategyKind,
    AVAILABLE_STRATEGIES, DEFAULT_STRATEGY, WIN_SCORE,
};
pub use board::{Board, MAX_BOARD_SIZE};
pub use config::{GameConfig, MIN_BOARD_SIZE};
pub use error::GomokuError;
pub use eval::{appraise, evaluate_position, pattern_scan, score_tally, PatternWeights};
pub use game::{Game, GameMode};
pub use movegen::{generate_exhaustive, generate_local};
pub use notation::{board_from_notation, board_to_notation, parse_notation, NotationState};
pub use types::{Color, GameResult, PatternTally, Position};
