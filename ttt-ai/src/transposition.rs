//! 置换表
//!
//! 以 (棋盘, 走子方) 为键缓存已算出的 minimax 值，避免重复搜索。
//! 每个键只写入一次（首个算出的值生效），进程内常驻、永不失效。
//! 整个状态空间不足 2 万个 (局面, 走子方) 对，无需容量上限或替换策略。

use std::collections::HashMap;

use ttt_core::{Board, Side};

/// 置换表
#[derive(Debug, Default)]
pub struct TranspositionTable {
    /// 键 = 18 位棋盘向量 | 走子方位 << 18
    entries: HashMap<u32, i32>,
    /// 命中次数
    hits: u64,
    /// 查询次数
    probes: u64,
}

impl TranspositionTable {
    /// 创建空置换表
    pub fn new() -> Self {
        Self::default()
    }

    /// 计算键值
    #[inline]
    fn key(board: &Board, side: Side) -> u32 {
        let side_bit = match side {
            Side::X => 0,
            Side::O => 1,
        };
        board.bits() | (side_bit << 18)
    }

    /// 查询条目（纯查找）
    pub fn probe(&mut self, board: &Board, side: Side) -> Option<i32> {
        self.probes += 1;
        let value = self.entries.get(&Self::key(board, side)).copied();
        if value.is_some() {
            self.hits += 1;
        }
        value
    }

    /// 存储条目
    ///
    /// 键已存在时跳过：首个算出的值生效
    pub fn store(&mut self, board: &Board, side: Side, value: i32) {
        self.entries.entry(Self::key(board, side)).or_insert(value);
    }

    /// 已缓存的条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 表是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 清空表
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.probes = 0;
    }

    /// 获取命中率
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }

    /// 获取统计信息
    pub fn stats(&self) -> TtStats {
        TtStats {
            entries: self.entries.len(),
            hits: self.hits,
            probes: self.probes,
        }
    }
}

/// 置换表统计信息
#[derive(Debug, Clone)]
pub struct TtStats {
    pub entries: usize,
    pub hits: u64,
    pub probes: u64,
}

impl TtStats {
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }
}
