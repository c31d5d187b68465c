//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评估和启发式评估函数
//! - Minimax + Alpha-Beta 剪枝搜索
//! - 杀手着法排序和启发式排序
//! - 置换表（记忆化缓存）
//! - NegaScout（零窗口主变例搜索）
//! - 蒙特卡洛随机模拟评估

mod evaluate;
mod killer;
mod mcts;
mod search;
mod transposition;

pub use evaluate::Evaluator;
pub use killer::KillerTable;
pub use mcts::{RolloutConfig, RolloutEvaluator};
pub use search::{AiEngine, SearchConfig, NEG_INFINITY, POS_INFINITY};
pub use transposition::{TranspositionTable, TtStats};
