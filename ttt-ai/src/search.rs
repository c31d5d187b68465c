//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝，可选置换表缓存、
//! 启发式排序和杀手着法排序，另提供 NegaScout 变体

use serde::{Deserialize, Serialize};

use ttt_core::{Board, Side};

use crate::evaluate::Evaluator;
use crate::killer::{KillerTable, DEFAULT_KILLER_CAPACITY};
use crate::transposition::{TranspositionTable, TtStats};

/// Alpha 初始下界（中性负无穷）
pub const NEG_INFINITY: i32 = i32::MIN;

/// Beta 初始上界（中性正无穷）
pub const POS_INFINITY: i32 = i32::MAX;

/// 搜索配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 启用置换表缓存
    ///
    /// 缓存命中会整体跳过节点，因此不会产生杀手条目；
    /// 两者同时启用时杀手表会被缓存"饿死"，默认关闭缓存
    pub enable_cache: bool,
    /// 启用启发式排序（按启发分降序全排序，在杀手层之前）
    pub enable_heuristic_ordering: bool,
    /// 杀手表容量（0 禁用杀手排序）
    pub killer_capacity: usize,
}

impl SearchConfig {
    /// 杀手着法配置（缓存关、启发关、杀手容量 4）
    pub fn killer() -> Self {
        Self {
            enable_cache: false,
            enable_heuristic_ordering: false,
            killer_capacity: DEFAULT_KILLER_CAPACITY,
        }
    }

    /// 朴素 Alpha-Beta 配置（全部关闭）
    pub fn plain() -> Self {
        Self {
            enable_cache: false,
            enable_heuristic_ordering: false,
            killer_capacity: 0,
        }
    }

    /// 带缓存配置（记忆化 minimax 形态）
    pub fn cached() -> Self {
        Self {
            enable_cache: true,
            enable_heuristic_ordering: false,
            killer_capacity: 0,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::killer()
    }
}

/// AI 引擎
///
/// 缓存和杀手表是引擎实例状态（依赖注入，无全局变量），
/// 同一引擎在整局游戏中复用以跨着法共享记忆
pub struct AiEngine {
    config: SearchConfig,
    cache: TranspositionTable,
    killers: KillerTable,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: SearchConfig) -> Self {
        let killers = KillerTable::new(config.killer_capacity);
        Self {
            config,
            cache: TranspositionTable::new(),
            killers,
            nodes_searched: 0,
        }
    }

    /// 获取搜索配置
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 搜索局面的精确 minimax 值（side 为即将走子的一方）
    pub fn search(&mut self, board: &Board, side: Side) -> i32 {
        let value = self.alpha_beta(board, side, NEG_INFINITY, POS_INFINITY);
        tracing::debug!(
            side = %side,
            value,
            nodes = self.nodes_searched,
            cache_entries = self.cache.stats().entries,
            "alpha-beta 搜索完成"
        );
        value
    }

    /// Alpha-Beta 搜索
    ///
    /// alpha/beta 是双方在树的其他分支已各自保证的最好值，
    /// 按值传递（非终局局面必有至少一个合法走法，由调用方保证）
    fn alpha_beta(&mut self, board: &Board, side: Side, mut alpha: i32, mut beta: i32) -> i32 {
        // 查缓存：命中则整体跳过节点
        if self.config.enable_cache {
            if let Some(value) = self.cache.probe(board, side) {
                return value;
            }
        }
        self.nodes_searched += 1;

        // 终局直接返回精确分值（叶子便宜，不入缓存）
        if let Some(value) = Evaluator::terminal(board) {
            return value;
        }

        let children = self.ordered_children(board, side);
        let opponent = side.opponent();

        let value = match side {
            Side::X => {
                // 极大方
                let mut value = NEG_INFINITY;
                for (mask, child) in children {
                    value = value.max(self.alpha_beta(&child, opponent, alpha, beta));
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        // beta 截断：记录杀手着法（仅在极大方层记录）
                        self.killers.record(mask);
                        break;
                    }
                }
                value
            }
            Side::O => {
                // 极小方
                let mut value = POS_INFINITY;
                for (_, child) in children {
                    value = value.min(self.alpha_beta(&child, opponent, alpha, beta));
                    beta = beta.min(value);
                    if alpha >= beta {
                        break; // alpha 截断
                    }
                }
                value
            }
        };

        if self.config.enable_cache {
            self.cache.store(board, side, value);
        }
        value
    }

    /// NegaScout（零窗口主变例搜索）
    ///
    /// 第一个子节点用全窗口确定界值，其余子节点先用零窗口试探，
    /// 试探失败（fail-high / fail-low）时以真实窗口重搜。
    /// 返回值与 `search` 对任何局面都一致。
    pub fn negascout(&mut self, board: &Board, side: Side) -> i32 {
        let value = self.negascout_inner(board, side, NEG_INFINITY, POS_INFINITY);
        tracing::debug!(
            side = %side,
            value,
            nodes = self.nodes_searched,
            "negascout 搜索完成"
        );
        value
    }

    fn negascout_inner(&mut self, board: &Board, side: Side, alpha: i32, beta: i32) -> i32 {
        self.nodes_searched += 1;

        if let Some(value) = Evaluator::terminal(board) {
            return value;
        }

        let children = self.legal_children(board, side);
        let opponent = side.opponent();

        // 第一个子节点：全窗口搜索确定界值
        let mut bound = self.negascout_inner(&children[0].1, opponent, alpha, beta);
        match side {
            Side::X => {
                // 极大方：bound 是下界
                if bound >= beta {
                    return bound; // beta 截断
                }
                for (_, child) in &children[1..] {
                    let probe = self.negascout_inner(child, opponent, bound, bound + 1);
                    if probe > bound {
                        // fail-high：找到更紧的下界
                        if probe >= beta {
                            bound = probe;
                        } else {
                            bound = self.negascout_inner(child, opponent, probe, beta);
                        }
                    }
                    if bound >= beta {
                        return bound;
                    }
                }
            }
            Side::O => {
                // 极小方：bound 是上界
                if bound <= alpha {
                    return bound; // alpha 截断
                }
                for (_, child) in &children[1..] {
                    let probe = self.negascout_inner(child, opponent, bound - 1, bound);
                    if probe < bound {
                        // fail-low：找到更紧的上界
                        if probe <= alpha {
                            bound = probe;
                        } else {
                            bound = self.negascout_inner(child, opponent, alpha, probe);
                        }
                    }
                    if bound <= alpha {
                        return bound;
                    }
                }
            }
        }
        bound
    }

    /// 枚举合法子节点（行主序的稳定基准顺序）
    fn legal_children(&self, board: &Board, side: Side) -> Vec<(u32, Board)> {
        board
            .legal_moves()
            .filter_map(|cell| board.check(cell, side))
            .map(|mask| (mask, board.with_mask(mask)))
            .collect()
    }

    /// 枚举并排序合法子节点
    ///
    /// 先按启发分降序全排序（若启用），再把杀手着法稳定地提到最前。
    /// 排序只影响访问节点数，绝不改变最终搜索值。
    fn ordered_children(&self, board: &Board, side: Side) -> Vec<(u32, Board)> {
        let mut children = self.legal_children(board, side);
        if self.config.enable_heuristic_ordering {
            children.sort_by_key(|(_, child)| std::cmp::Reverse(Evaluator::heuristic(child)));
        }
        self.killers.promote(&mut children);
        children
    }

    /// 获取已搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 重置节点计数（每步棋前调用）
    pub fn reset_nodes(&mut self) {
        self.nodes_searched = 0;
    }

    /// 获取置换表统计信息
    pub fn cache_stats(&self) -> TtStats {
        self.cache.stats()
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
