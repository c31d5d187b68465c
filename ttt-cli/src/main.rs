//! 井字棋自动对弈驱动
//!
//! 用法: `ttt-cli <随机种子> [alphabeta|minimax|negascout|mcts]`
//!
//! 驱动回合循环：为当前走子方枚举所有合法后继局面，
//! 用所选引擎对每个后继打分（由对方接着走子），
//! 洗牌打破平分后取极值着法，直到终局并报告结果。

use std::env;

use anyhow::{bail, Context, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttt_ai::{AiEngine, RolloutEvaluator, SearchConfig};
use ttt_core::{Board, GameState, Side};

/// 引擎选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineKind {
    /// Alpha-Beta + 杀手着法（默认）
    AlphaBeta,
    /// 记忆化 minimax（Alpha-Beta + 置换表缓存）
    Minimax,
    /// NegaScout 零窗口搜索
    NegaScout,
    /// 蒙特卡洛随机模拟
    Mcts,
}

impl EngineKind {
    fn parse(name: &str) -> Result<Self> {
        match name {
            "alphabeta" => Ok(EngineKind::AlphaBeta),
            "minimax" => Ok(EngineKind::Minimax),
            "negascout" => Ok(EngineKind::NegaScout),
            "mcts" => Ok(EngineKind::Mcts),
            other => bail!("未知引擎: {other}（可选 alphabeta|minimax|negascout|mcts）"),
        }
    }

    fn search_config(&self) -> SearchConfig {
        match self {
            EngineKind::AlphaBeta => SearchConfig::killer(),
            EngineKind::Minimax => SearchConfig::cached(),
            EngineKind::NegaScout | EngineKind::Mcts => SearchConfig::plain(),
        }
    }
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ttt_cli=info".parse()?),
        )
        .init();

    let mut args = env::args().skip(1);
    let seed: i64 = args
        .next()
        .context("用法: ttt-cli <随机种子> [alphabeta|minimax|negascout|mcts]")?
        .parse()
        .context("随机种子必须是整数")?;
    let kind = match args.next() {
        Some(name) => EngineKind::parse(&name)?,
        None => EngineKind::AlphaBeta,
    };

    info!(seed, engine = ?kind, "自动对弈开始");

    // 全进程唯一的可播种随机数生成器：用于洗牌和随机模拟
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    play(kind, &mut rng);

    Ok(())
}

/// 自动对弈至终局
fn play(kind: EngineKind, rng: &mut ChaCha8Rng) {
    let mut engine = AiEngine::new(kind.search_config());
    let rollout = RolloutEvaluator::new();
    // 极小方 O 先行
    let mut state = GameState::new_game();

    while state.board.winner().is_none() {
        let player = state.current_turn;
        let opponent = player.opponent();
        engine.reset_nodes();

        // 枚举后继局面并打分（由对方接着走子）
        let mut candidates: Vec<(Board, f64)> = state
            .legal_successors()
            .collect::<Vec<Board>>()
            .into_iter()
            .map(|board| {
                let score = match kind {
                    EngineKind::AlphaBeta | EngineKind::Minimax => {
                        engine.search(&board, opponent) as f64
                    }
                    EngineKind::NegaScout => engine.negascout(&board, opponent) as f64,
                    EngineKind::Mcts => rollout.estimate(&board, opponent, rng),
                };
                (board, score)
            })
            .collect();
        if candidates.is_empty() {
            break;
        }

        // 洗牌打破平分
        candidates.shuffle(rng);

        // 取极值着法：
        // 搜索引擎按走子方取 max/min；
        // 随机模拟评估的是对方胜率，无论哪方走子都取最小值
        let chosen = match kind {
            EngineKind::Mcts => candidates
                .iter()
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .copied(),
            _ => match player {
                Side::X => candidates
                    .iter()
                    .max_by(|a, b| a.1.total_cmp(&b.1))
                    .copied(),
                Side::O => candidates
                    .iter()
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .copied(),
            },
        };
        let (board, score) = match chosen {
            Some(pair) => pair,
            None => break,
        };

        state.board = board;
        state.switch_turn();

        match kind {
            EngineKind::Mcts => println!("\n{} move on score {:.6}:", player, score),
            _ => println!("\n{} move after {} search steps:", player, engine.nodes_searched()),
        }
        println!("{}", state.board);
    }

    match state.board.winner() {
        None => println!("\nTied"),
        Some(winner) => println!("\n{} has won", winner),
    }
    info!(cache = ?engine.cache_stats(), "对弈结束");
}
