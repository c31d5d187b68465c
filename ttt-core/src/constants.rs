//! 核心常量定义

/// 棋盘边长
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = 9;

/// 胜利分值（X 获胜 +10，O 获胜 -10）
pub const WIN_SCORE: i32 = 10;

/// 8 条胜利线的位掩码（单侧 9 位，行主序，(0,0) 在最高位）
pub const LINE_MASKS: [u32; 8] = [
    0b000000111, // 第 2 行
    0b000111000, // 第 1 行
    0b111000000, // 第 0 行
    0b001001001, // 第 2 列
    0b010010010, // 第 1 列
    0b100100100, // 第 0 列
    0b100010001, // 主对角线
    0b001010100, // 副对角线
];

/// 单侧占位掩码（低 9 位）
pub const HALF_MASK: u32 = 0b111111111;
