//! Gomoku AI CLI
//!
//! 命令行界面，用于对局和测试 AI
//!
//! 支持三种用法：
//! 1. 控制台对局：`play`
//! 2. 单次命令模式：`best` / `score` / `moves`
//! 3. Server 模式：长驻进程，通过 stdin/stdout 逐行 JSON 通信

use clap::{Parser, Subcommand};
use gomoku_ai::{
    board_from_notation, evaluate_position, generate_exhaustive, generate_local, get_node_count,
    reset_node_count, strategies_help, AIEngine, Color, Game, GameConfig, GameMode,
    GomokuError, Position, StrategyKind,
};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gomoku-ai")]
#[command(about = "Gomoku (five-in-a-row) AI Engine", long_about = None)]
struct Cli {
    /// JSON 配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 控制台对局
    Play {
        /// 对局模式 (pvp, pve, eve)
        #[arg(long, default_value = "pve")]
        mode: String,

        /// 人机模式下人类执的颜色 (w, b)
        #[arg(long, default_value = "w")]
        human: char,

        /// 棋盘边长
        #[arg(long)]
        size: Option<usize>,

        /// AI 策略 (heuristic, minimax, alphabeta, random)
        #[arg(long)]
        strategy: Option<String>,

        /// 搜索深度
        #[arg(long)]
        depth: Option<u32>,

        /// 起始局面记谱，如 "9 5,5 4,4 w"
        #[arg(long)]
        position: Option<String>,
    },

    /// 选择最佳走法
    Best {
        /// 局面记谱
        #[arg(long)]
        position: String,

        /// AI 策略
        #[arg(long)]
        strategy: Option<String>,

        /// 搜索深度
        #[arg(long)]
        depth: Option<u32>,

        /// 返回的走法数量
        #[arg(long, default_value = "1")]
        n: usize,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 评估局面分数（行棋方视角）
    Score {
        /// 局面记谱
        #[arg(long)]
        position: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 列出候选走法
    Moves {
        /// 局面记谱
        #[arg(long)]
        position: String,

        /// 列出所有空格而不是棋子附近的点
        #[arg(long)]
        all: bool,
    },

    /// 启动 server 模式（stdin/stdout 通信）
    Server,
}

#[derive(Serialize, Deserialize)]
struct MoveResult {
    #[serde(rename = "move")]
    mv: String,
    score: i64,
}

#[derive(Serialize, Deserialize)]
struct MovesResponse {
    moves: Vec<MoveResult>,
    total: usize,
}

// Server 模式的请求和响应结构
#[derive(Serialize, Deserialize)]
struct ServerRequest {
    cmd: String,
    #[serde(default)]
    position: String,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    depth: Option<u32>,
    #[serde(default)]
    n: Option<usize>,
}

#[derive(Serialize, Deserialize, Default)]
struct ServerResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<MoveResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServerResponse {
    fn success_moves(moves: Vec<MoveResult>, nodes: u64, elapsed_ms: f64) -> Self {
        Self {
            ok: true,
            moves: Some(moves),
            nodes: Some(nodes),
            elapsed_ms: Some(elapsed_ms),
            ..Default::default()
        }
    }

    fn success_candidates(candidates: Vec<String>) -> Self {
        Self {
            ok: true,
            candidates: Some(candidates),
            ..Default::default()
        }
    }

    fn success_eval(eval_score: i64, color: Color) -> Self {
        Self {
            ok: true,
            eval: Some(eval_score),
            color: Some(color_to_str(color).to_string()),
            ..Default::default()
        }
    }

    fn error(msg: &str) -> Self {
        Self {
            ok: false,
            error: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

fn color_to_str(color: Color) -> &'static str {
    if color == Color::White {
        "white"
    } else {
        "black"
    }
}

fn exit_with(e: GomokuError) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}

/// 读取配置文件（如有）并用命令行参数覆盖
fn build_config(
    path: Option<&PathBuf>,
    strategy: Option<&str>,
    depth: Option<u32>,
    size: Option<usize>,
) -> Result<GameConfig, GomokuError> {
    let mut config = match path {
        Some(p) => GameConfig::from_file(p)?,
        None => GameConfig::default(),
    };
    if let Some(name) = strategy {
        config.strategy = name.parse::<StrategyKind>()?;
    }
    if let Some(d) = depth {
        config.depth = d;
    }
    if let Some(s) = size {
        config.board_size = s;
    }
    config.validate()?;
    Ok(config)
}

/// 搜索给定局面，返回评分走法与节点数
fn run_search(
    config: &GameConfig,
    position: &str,
    n: usize,
) -> Result<(Vec<MoveResult>, u64, f64), GomokuError> {
    let (board, turn) = board_from_notation(position)?;
    let ai = AIEngine::new(config.strategy, &config.ai_config());

    reset_node_count();
    let start = Instant::now();
    let moves = ai.select_moves(&board, turn, n);
    let elapsed = start.elapsed().as_secs_f64();

    let results = moves
        .into_iter()
        .map(|sm| MoveResult {
            mv: sm.mv.to_human_str(),
            score: sm.score,
        })
        .collect();
    Ok((results, get_node_count(), elapsed))
}

fn candidates(position: &str, all: bool) -> Result<Vec<String>, GomokuError> {
    let (board, _) = board_from_notation(position)?;
    let moves = if all {
        generate_exhaustive(&board)
    } else {
        generate_local(&board)
    };
    Ok(moves.iter().map(Position::to_human_str).collect())
}

fn score(config: &GameConfig, position: &str) -> Result<(i64, Color), GomokuError> {
    let (board, turn) = board_from_notation(position)?;
    Ok((evaluate_position(&board, turn, &config.weights), turn))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = cli.config.as_ref();

    match cli.command {
        Commands::Play {
            mode,
            human,
            size,
            strategy,
            depth,
            position,
        } => {
            let config = build_config(config_path, strategy.as_deref(), depth, size)
                .unwrap_or_else(|e| exit_with(e));
            let mode = mode.parse::<GameMode>().unwrap_or_else(|e| exit_with(e));
            let human = Color::from_char(human).unwrap_or_else(|| {
                exit_with(GomokuError::Config(format!("invalid color: {}", human)))
            });
            let game = match position {
                Some(p) => Game::from_notation(&config, mode, human, &p),
                None => Game::new(&config, mode, human),
            };
            let game = game.unwrap_or_else(|e| exit_with(e));
            run_console(game);
        }

        Commands::Best {
            position,
            strategy,
            depth,
            n,
            json,
        } => {
            let config = build_config(config_path, strategy.as_deref(), depth, None)
                .unwrap_or_else(|e| exit_with(e));
            match run_search(&config, &position, n) {
                Ok((moves, nodes, elapsed)) => {
                    if json {
                        let response = MovesResponse {
                            total: moves.len(),
                            moves,
                        };
                        match serde_json::to_string_pretty(&response) {
                            Ok(text) => println!("{}", text),
                            Err(e) => exit_with(GomokuError::Config(e.to_string())),
                        }
                        eprintln!("Stats: nodes={}, time={:.3}s", nodes, elapsed);
                    } else {
                        println!("Best moves (strategy={}):", config.strategy);
                        for mv in moves {
                            println!("  {} (score: {})", mv.mv, mv.score);
                        }
                        println!("\nStats: nodes={}, time={:.3}s", nodes, elapsed);
                    }
                }
                Err(e) => exit_with(e),
            }
        }

        Commands::Score { position, json } => {
            let config =
                build_config(config_path, None, None, None).unwrap_or_else(|e| exit_with(e));
            match score(&config, &position) {
                Ok((value, color)) => {
                    if json {
                        let response = serde_json::json!({
                            "position": position,
                            "color": color_to_str(color),
                            "score": value,
                        });
                        println!("{}", response);
                    } else {
                        println!("Evaluation ({} to move): {}", color, value);
                    }
                }
                Err(e) => exit_with(e),
            }
        }

        Commands::Moves { position, all } => match candidates(&position, all) {
            Ok(moves) => {
                println!("Candidate moves ({}):", moves.len());
                for mv in &moves {
                    println!("  {}", mv);
                }
            }
            Err(e) => exit_with(e),
        },

        Commands::Server => {
            let config =
                build_config(config_path, None, None, None).unwrap_or_else(|e| exit_with(e));
            run_server(&config);
        }
    }
}

/// 控制台对局主循环
fn run_console(mut game: Game) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    println!("{}", strategies_help());

    loop {
        println!("\n{}", game.board());

        if game.is_over() {
            println!("Game over: {}", game.result());
            break;
        }

        if game.is_ai_turn() {
            match game.play_ai() {
                Ok((pos, _)) => println!("{} (AI) plays {}", game.turn().opposite(), pos),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    break;
                }
            }
            continue;
        }

        print!("{} to move (x y), 'undo' or 'quit': ", game.turn());
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(l)) => l,
            _ => break,
        };
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "undo" => {
                if let Err(e) = game.undo() {
                    println!("{}", e);
                }
                // 人机模式下连同 AI 的一手一起撤回
                if game.mode() == GameMode::PvE && game.is_ai_turn() {
                    if let Err(e) = game.undo() {
                        println!("{}", e);
                    }
                }
            }
            _ => match Position::from_human_str(input) {
                Some(pos) => {
                    if let Err(e) = game.play(pos) {
                        println!("{}", e);
                    }
                }
                None => println!("Please enter two numbers, e.g. 5 5"),
            },
        }
    }
}

/// Server 模式主循环
/// 从 stdin 读取 JSON 请求，返回 JSON 响应到 stdout
fn run_server(config: &GameConfig) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        // 空行跳过
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ServerRequest>(&line) {
            Ok(request) => match request.cmd.as_str() {
                "best" => handle_best_request(config, &request),
                "moves" => match candidates(&request.position, false) {
                    Ok(moves) => ServerResponse::success_candidates(moves),
                    Err(e) => ServerResponse::error(&e.to_string()),
                },
                "eval" => match score(config, &request.position) {
                    Ok((value, color)) => ServerResponse::success_eval(value, color),
                    Err(e) => ServerResponse::error(&e.to_string()),
                },
                "quit" => break,
                _ => ServerResponse::error(&format!("Unknown command: {}", request.cmd)),
            },
            Err(e) => ServerResponse::error(&format!("Invalid JSON: {}", e)),
        };

        match serde_json::to_string(&response) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: {}", e),
        }
        let _ = stdout.flush();
    }
}

/// 处理 best 命令
fn handle_best_request(config: &GameConfig, request: &ServerRequest) -> ServerResponse {
    let mut config = config.clone();
    if let Some(name) = &request.strategy {
        match name.parse::<StrategyKind>() {
            Ok(kind) => config.strategy = kind,
            Err(e) => return ServerResponse::error(&e.to_string()),
        }
    }
    if let Some(depth) = request.depth {
        config.depth = depth;
    }
    if let Err(e) = config.validate() {
        return ServerResponse::error(&e.to_string());
    }

    match run_search(&config, &request.position, request.n.unwrap_or(5)) {
        Ok((moves, nodes, elapsed)) => ServerResponse::success_moves(moves, nodes, elapsed * 1000.0),
        Err(e) => ServerResponse::error(&format!("AI error: {}", e)),
    }
}
