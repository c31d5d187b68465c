//! 井字棋核心数据结构库
//!
//! 包含:
//! - 阵营、格子、棋盘等核心数据结构
//! - 位棋盘（18 位向量）表示和胜负判定
//! - 落子合法性检查和走法枚举
//! - 棋盘记谱格式（渲染 + 解析）

mod board;
mod constants;
mod error;
mod notation;
mod side;

pub use board::{Board, GameState};
pub use constants::*;
pub use error::GameError;
pub use notation::Notation;
pub use side::{Cell, Side};
