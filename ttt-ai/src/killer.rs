//! 杀手着法表
//!
//! 记录最近在极大方层引发 beta 截断的着法掩码，在后续兄弟节点中
//! 把这些着法排到前面以期更早剪枝。FIFO 淘汰，默认容量 4。
//!
//! 这是纯排序提示：过期或被淘汰的杀手着法最多降低剪枝效率，
//! 绝不会改变搜索结果。

use std::collections::VecDeque;

use ttt_core::Board;

/// 默认容量
pub const DEFAULT_KILLER_CAPACITY: usize = 4;

/// 杀手着法表
#[derive(Debug)]
pub struct KillerTable {
    /// 最近引发截断的着法掩码（队首最旧）
    masks: VecDeque<u32>,
    /// 容量（0 表示禁用）
    capacity: usize,
}

impl KillerTable {
    /// 创建指定容量的杀手表
    pub fn new(capacity: usize) -> Self {
        Self {
            masks: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// 是否禁用（容量为 0）
    pub fn is_disabled(&self) -> bool {
        self.capacity == 0
    }

    /// 记录引发截断的着法，超出容量时淘汰最旧条目
    pub fn record(&mut self, mask: u32) {
        if self.capacity == 0 {
            return;
        }
        self.masks.push_back(mask);
        if self.masks.len() > self.capacity {
            self.masks.pop_front();
        }
    }

    /// 检查着法是否在表中
    pub fn contains(&self, mask: u32) -> bool {
        self.masks.contains(&mask)
    }

    /// 把表中的着法稳定地排到子节点列表前面
    ///
    /// 非杀手着法之间保持原有顺序
    pub fn promote(&self, children: &mut [(u32, Board)]) {
        if self.masks.is_empty() {
            return;
        }
        // 稳定排序：杀手在前，其余保持原序
        children.sort_by_key(|(mask, _)| !self.contains(*mask));
    }

    /// 当前条目数
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// 表是否为空
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new(DEFAULT_KILLER_CAPACITY)
    }
}
