//! 阵营和格子定义

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// 阵营
///
/// X 是极大方（先求最高分），O 是极小方（先求最低分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 极大方
    X,
    /// 极小方
    O,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// 获取显示符号
    pub fn symbol(&self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }

    /// 从显示符号解析
    pub fn from_symbol(c: char) -> Option<Side> {
        match c {
            'X' | 'x' => Some(Side::X),
            'O' | 'o' => Some(Side::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 棋盘格子坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// 行 (0-2)
    pub row: u8,
    /// 列 (0-2)
    pub col: u8,
}

impl Cell {
    /// 创建新格子坐标
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新格子坐标（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查坐标是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 该格子在单侧 9 位向量中的位偏移
    ///
    /// 行主序，(0,0) 在最高位（第 8 位），(2,2) 在最低位
    pub const fn bit_offset(&self) -> u32 {
        (3 * (2 - self.row) + (2 - self.col)) as u32
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
