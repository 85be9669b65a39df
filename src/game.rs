//! 对局控制
//!
//! 负责轮流行棋、把落子交给棋盘、记录胜负。
//! 支持三种模式：人人（pvp）、人机（pve）、机机（eve）。
//! 白方先行。

use crate::ai::AIEngine;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{GomokuError, Result};
use crate::notation::parse_notation;
use crate::types::{Color, GameResult, Position};
use log::{info, warn};
use std::fmt;
use std::str::FromStr;

/// 对局模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PvP,
    PvE,
    EvE,
}

impl FromStr for GameMode {
    type Err = GomokuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pvp" => Ok(GameMode::PvP),
            "pve" => Ok(GameMode::PvE),
            "eve" => Ok(GameMode::EvE),
            _ => Err(GomokuError::Config(format!(
                "Unknown mode: {}. Available: pvp, pve, eve",
                s
            ))),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::PvP => "pvp",
            GameMode::PvE => "pve",
            GameMode::EvE => "eve",
        };
        write!(f, "{}", name)
    }
}

/// 一局棋
pub struct Game {
    board: Board,
    turn: Color,
    mode: GameMode,
    /// 人机模式下人类执的颜色
    human: Color,
    engine: AIEngine,
    result: GameResult,
}

impl Game {
    /// 空棋盘开局
    pub fn new(config: &GameConfig, mode: GameMode, human: Color) -> Result<Self> {
        config.validate()?;
        Ok(Game {
            board: Board::new(config.board_size)?,
            turn: Color::White,
            mode,
            human,
            engine: AIEngine::new(config.strategy, &config.ai_config()),
            result: GameResult::Ongoing,
        })
    }

    /// 从记谱局面开局，棋盘大小以记谱为准
    pub fn from_notation(
        config: &GameConfig,
        mode: GameMode,
        human: Color,
        notation: &str,
    ) -> Result<Self> {
        let state = parse_notation(notation)?;
        let config = GameConfig {
            board_size: state.size,
            ..config.clone()
        };
        let mut game = Game::new(&config, mode, human)?;
        game.board = state.to_board()?;
        game.turn = state.turn;
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    /// 当前是否轮到 AI
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvP => false,
            GameMode::PvE => self.turn != self.human,
            GameMode::EvE => true,
        }
    }

    /// 当前行棋方在 (0 起始) `pos` 落子
    pub fn play(&mut self, pos: Position) -> Result<GameResult> {
        if self.is_over() {
            return Err(GomokuError::GameOver);
        }
        if let Err(e) = self.board.try_move(pos, self.turn) {
            warn!("{} rejected: {}", self.turn, e);
            return Err(e);
        }
        info!("{} plays {}", self.turn, pos);

        self.result = self.board.check_win_at(pos);
        self.turn = self.turn.opposite();

        if self.result.is_terminal() {
            info!("game over: {}", self.result);
        }
        Ok(self.result)
    }

    /// 人类输入的 1 起始坐标
    pub fn play_human(&mut self, x: i32, y: i32) -> Result<GameResult> {
        self.play(Position::from_human(x, y))
    }

    /// 让 AI 为当前行棋方落子
    pub fn play_ai(&mut self) -> Result<(Position, GameResult)> {
        if self.is_over() {
            return Err(GomokuError::GameOver);
        }
        let pos = self
            .engine
            .get_move(&self.board, self.turn)
            .ok_or(GomokuError::GameOver)?;
        let result = self.play(pos)?;
        Ok((pos, result))
    }

    /// 悔一步棋
    pub fn undo(&mut self) -> Result<Position> {
        let pos = self.board.try_undo()?;
        self.turn = self.turn.opposite();
        self.result = GameResult::Ongoing;
        info!("undo {}", pos);
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::StrategyKind;

    fn heuristic_config() -> GameConfig {
        GameConfig {
            strategy: StrategyKind::Heuristic,
            ..Default::default()
        }
    }

    #[test]
    fn test_white_moves_first_and_turns_alternate() {
        let mut game = Game::new(&GameConfig::default(), GameMode::PvP, Color::White).unwrap();
        assert_eq!(game.turn(), Color::White);
        game.play_human(5, 5).unwrap();
        assert_eq!(game.board().stone_at(Position::new(4, 4)), Some(Color::White));
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(&GameConfig::default(), GameMode::PvP, Color::White).unwrap();
        game.play_human(5, 5).unwrap();
        assert_eq!(
            game.play_human(5, 5),
            Err(GomokuError::InvalidMove {
                pos: Position::new(4, 4)
            })
        );
        assert!(game.play_human(0, 3).is_err());
        assert!(game.play_human(10, 3).is_err());
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new(&GameConfig::default(), GameMode::PvP, Color::White).unwrap();
        for x in 1..=4 {
            game.play_human(x, 1).unwrap();
            game.play_human(x, 3).unwrap();
        }
        assert_eq!(game.play_human(5, 1), Ok(GameResult::Win(Color::White)));
        assert!(game.is_over());
        assert_eq!(game.play_human(5, 3), Err(GomokuError::GameOver));
        assert!(matches!(game.play_ai(), Err(GomokuError::GameOver)));
    }

    #[test]
    fn test_undo_reopens_game() {
        let mut game = Game::new(&GameConfig::default(), GameMode::PvP, Color::White).unwrap();
        for x in 1..=4 {
            game.play_human(x, 1).unwrap();
            game.play_human(x, 3).unwrap();
        }
        game.play_human(5, 1).unwrap();
        assert_eq!(game.undo(), Ok(Position::new(4, 0)));
        assert_eq!(game.result(), GameResult::Ongoing);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_pve_ai_replies_near_stone() {
        let mut game = Game::new(&heuristic_config(), GameMode::PvE, Color::White).unwrap();
        assert!(!game.is_ai_turn());
        game.play_human(5, 5).unwrap();
        assert!(game.is_ai_turn());
        let (pos, result) = game.play_ai().unwrap();
        assert_eq!(result, GameResult::Ongoing);
        assert!(pos.chebyshev(Position::new(4, 4)) <= 2);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_eve_runs_to_completion() {
        let config = GameConfig {
            board_size: 7,
            ..heuristic_config()
        };
        let mut game = Game::new(&config, GameMode::EvE, Color::White).unwrap();
        let mut plies = 0;
        while !game.is_over() {
            assert!(game.is_ai_turn());
            game.play_ai().unwrap();
            plies += 1;
            assert!(plies <= 49);
        }
        assert!(game.result().is_terminal());
    }

    #[test]
    fn test_from_notation() {
        let game = Game::from_notation(
            &GameConfig::default(),
            GameMode::PvE,
            Color::White,
            "7 4,4 - b",
        )
        .unwrap();
        assert_eq!(game.board().size(), 7);
        assert_eq!(game.turn(), Color::Black);
        assert!(game.is_ai_turn());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("PvE".parse::<GameMode>(), Ok(GameMode::PvE));
        assert!("cvc".parse::<GameMode>().is_err());
    }
}
