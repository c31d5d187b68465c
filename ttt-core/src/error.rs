//! 错误类型定义

use thiserror::Error;

/// 井字棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 坐标超出棋盘范围
    #[error("Cell out of range: ({row}, {col})")]
    CellOutOfRange { row: u8, col: u8 },

    /// 无效的记谱字符串
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },
}
