//! 对局配置
//!
//! 棋盘大小、搜索深度、策略和权重表都通过配置显式传入，
//! 可以从 JSON 文件加载，缺省字段取默认值。

use crate::ai::{AIConfig, StrategyKind};
use crate::board::MAX_BOARD_SIZE;
use crate::error::{GomokuError, Result};
use crate::eval::PatternWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 最小边长（放不下五连的棋盘没有意义）
pub const MIN_BOARD_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub depth: u32,
    pub strategy: StrategyKind,
    pub weights: PatternWeights,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 9,
            depth: 3,
            strategy: StrategyKind::AlphaBeta,
            weights: PatternWeights::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(s).map_err(|e| GomokuError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GomokuError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(GomokuError::Config(format!(
                "board_size must be in {}..={}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.strategy.uses_depth() && self.depth == 0 {
            return Err(GomokuError::Config(format!(
                "strategy {} needs depth >= 1",
                self.strategy
            )));
        }
        Ok(())
    }

    /// 提取搜索相关配置
    pub fn ai_config(&self) -> AIConfig {
        AIConfig {
            depth: self.depth,
            seed: self.seed,
            weights: self.weights,
        }
    }
}
