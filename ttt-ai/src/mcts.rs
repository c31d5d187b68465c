//! 蒙特卡洛随机模拟评估
//!
//! 用固定次数的随机对局估计某方从给定局面获胜的概率，
//! 替代穷举搜索的随机化评估器。估计值不是精确对局值，
//! 不可用于 Alpha-Beta 剪枝。

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use ttt_core::{Board, Side};

/// 默认模拟局数
pub const DEFAULT_ROLLOUT_ROUNDS: u32 = 500;

/// 模拟评估配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutConfig {
    /// 每次估值运行的随机对局数
    pub rounds: u32,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROLLOUT_ROUNDS,
        }
    }
}

/// 模拟评估器
///
/// 随机数生成器由调用方传入：全进程只用一个可播种的生成器
pub struct RolloutEvaluator {
    config: RolloutConfig,
}

impl RolloutEvaluator {
    /// 创建默认局数（500）的评估器
    pub fn new() -> Self {
        Self {
            config: RolloutConfig::default(),
        }
    }

    /// 创建指定配置的评估器
    pub fn with_config(config: RolloutConfig) -> Self {
        Self { config }
    }

    /// 估计 side 从该局面最终获胜的概率（[0, 1] 区间的分数）
    ///
    /// 从局面出发运行固定次数的独立随机对局，双方从 side 开始
    /// 交替走均匀随机的合法着法，出现胜者或棋盘填满即停。
    /// 已被 side 获胜的局面估计值恒为 1.0，已被对方获胜恒为 0.0。
    pub fn estimate<R: Rng>(&self, board: &Board, side: Side, rng: &mut R) -> f64 {
        let mut wins = 0u32;
        for _ in 0..self.config.rounds {
            if Self::playout(board, side, rng) == Some(side) {
                wins += 1;
            }
        }
        wins as f64 / self.config.rounds as f64
    }

    /// 单次随机对局：返回终局胜者（和棋为 None）
    fn playout<R: Rng>(board: &Board, side: Side, rng: &mut R) -> Option<Side> {
        let mut current = *board;
        let mut who = side;
        loop {
            if let Some(winner) = current.winner() {
                return Some(winner);
            }
            if current.is_full() {
                return None;
            }
            let masks: Vec<u32> = current
                .legal_moves()
                .filter_map(|cell| current.check(cell, who))
                .collect();
            // 非终局必有合法着法
            let mask = match masks.choose(rng) {
                Some(&mask) => mask,
                None => return None,
            };
            current = current.with_mask(mask);
            who = who.opponent();
        }
    }
}

impl Default for RolloutEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
