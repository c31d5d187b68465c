//! 位棋盘表示
//!
//! 18 位向量，行主序：
//! - 高 9 位（第 9-17 位）记录 X（极大方）的落子
//! - 低 9 位（第 0-8 位）记录 O（极小方）的落子
//! - 每侧内 (0,0) 在最高位
//!
//! 不变式：两侧永远不会在同一相对位上同时置位（一个格子只能被一方占据）

use serde::{Deserialize, Serialize};

use crate::constants::{CELL_COUNT, HALF_MASK, LINE_MASKS};
use crate::side::{Cell, Side};

/// 位棋盘
///
/// 不可变值类型：落子产生新的棋盘，不修改原值。零值即空棋盘。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board(u32);

impl Board {
    /// 创建空棋盘
    pub const fn empty() -> Self {
        Self(0)
    }

    /// 从原始位向量创建（测试和记谱解析使用）
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// 获取原始位向量
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// 计算指定格子、指定阵营的位掩码
    pub fn mask(cell: Cell, side: Side) -> u32 {
        let offset = match side {
            Side::X => cell.bit_offset() + 9,
            Side::O => cell.bit_offset(),
        };
        1 << offset
    }

    /// 检查格子是否为空
    ///
    /// 为空时返回该阵营在此格子的位掩码，已被任一方占据时返回 None
    pub fn check(&self, cell: Cell, side: Side) -> Option<u32> {
        let mask = Self::mask(cell, side);
        let other = Self::mask(cell, side.opponent());
        if (mask | other) & self.0 != 0 {
            return None; // 格子已被占据
        }
        Some(mask)
    }

    /// 落子，产生新棋盘
    ///
    /// 格子已被任一方占据时返回 None（可恢复条件，调用方过滤）
    pub fn place(&self, cell: Cell, side: Side) -> Option<Board> {
        self.check(cell, side).map(|mask| Board(self.0 | mask))
    }

    /// 按预先校验过的位掩码落子（搜索热路径配合 `check` 使用）
    pub const fn with_mask(&self, mask: u32) -> Board {
        Board(self.0 | mask)
    }

    /// 枚举所有空格子（行主序，建立走法排序的稳定基准顺序）
    pub fn legal_moves(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..3u8)
            .flat_map(|row| (0..3u8).map(move |col| Cell::new_unchecked(row, col)))
            .filter(|cell| self.occupant(*cell).is_none())
    }

    /// 空格子数量
    pub fn empty_count(&self) -> u32 {
        CELL_COUNT as u32 - self.0.count_ones()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// 获取指定阵营的单侧 9 位占位向量
    pub fn half(&self, side: Side) -> u32 {
        match side {
            Side::X => (self.0 >> 9) & HALF_MASK,
            Side::O => self.0 & HALF_MASK,
        }
    }

    /// 检查胜者
    ///
    /// 依次检查 8 条胜利线（3 行、3 列、2 对角线），某阵营占满一条线即获胜。
    /// 合法对局中最多一方获胜；畸形棋盘按枚举顺序返回第一条命中的线。
    pub fn winner(&self) -> Option<Side> {
        let o_half = self.half(Side::O);
        let x_half = self.half(Side::X);
        for mask in LINE_MASKS {
            if o_half & mask == mask {
                return Some(Side::O);
            }
            if x_half & mask == mask {
                return Some(Side::X);
            }
        }
        None
    }

    /// 查询格子的占据方
    pub fn occupant(&self, cell: Cell) -> Option<Side> {
        if self.0 & Self::mask(cell, Side::X) != 0 {
            Some(Side::X)
        } else if self.0 & Self::mask(cell, Side::O) != 0 {
            Some(Side::O)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::notation::Notation::render(self))
    }
}

/// 完整的对局状态（棋盘 + 当前走子方）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Side,
}

impl GameState {
    /// 创建新对局（空棋盘，极小方 O 先行）
    pub fn new_game() -> Self {
        Self {
            board: Board::empty(),
            current_turn: Side::O,
        }
    }

    /// 切换走子方
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// 枚举当前走子方的所有合法后继棋盘（行主序）
    pub fn legal_successors(&self) -> impl Iterator<Item = Board> + '_ {
        let side = self.current_turn;
        self.board
            .legal_moves()
            .map(move |cell| self.board.with_mask(Board::mask(cell, side)))
    }

    /// 对局是否结束（有人获胜或棋盘已满）
    pub fn is_over(&self) -> bool {
        self.board.winner().is_some() || self.board.is_full()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.bits(), 0);
        assert_eq!(board.empty_count(), 9);
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_mask_layout() {
        // X 半区在高 9 位，(0,0) 在各自半区的最高位
        assert_eq!(Board::mask(Cell::new_unchecked(0, 0), Side::X), 1 << 17);
        assert_eq!(Board::mask(Cell::new_unchecked(0, 0), Side::O), 1 << 8);
        assert_eq!(Board::mask(Cell::new_unchecked(2, 2), Side::X), 1 << 9);
        assert_eq!(Board::mask(Cell::new_unchecked(2, 2), Side::O), 1 << 0);
    }

    #[test]
    fn test_place() {
        let board = Board::empty();
        let board = board.place(Cell::new_unchecked(1, 1), Side::X).unwrap();
        assert_eq!(board.occupant(Cell::new_unchecked(1, 1)), Some(Side::X));
        assert_eq!(board.empty_count(), 8);
    }

    #[test]
    fn test_place_occupied_rejected() {
        // 同一格子重复落子无论哪一方都必须被拒绝
        let board = Board::empty();
        let board = board.place(Cell::new_unchecked(0, 0), Side::X).unwrap();
        assert!(board.place(Cell::new_unchecked(0, 0), Side::X).is_none());
        assert!(board.place(Cell::new_unchecked(0, 0), Side::O).is_none());
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::empty()
            .place(Cell::new_unchecked(0, 1), Side::X)
            .unwrap();
        let moves: Vec<Cell> = board.legal_moves().collect();
        assert_eq!(moves.len(), 8);
        assert_eq!(moves[0], Cell::new_unchecked(0, 0));
        assert_eq!(moves[1], Cell::new_unchecked(0, 2)); // (0,1) 被跳过
        assert_eq!(moves[7], Cell::new_unchecked(2, 2));
        // 迭代器可重启
        assert_eq!(board.legal_moves().count(), 8);
    }

    #[test]
    fn test_winner_all_lines() {
        // 8 条胜利线，双方都要能检出
        let lines: [[(u8, u8); 3]; 8] = [
            [(0, 0), (0, 1), (0, 2)],
            [(1, 0), (1, 1), (1, 2)],
            [(2, 0), (2, 1), (2, 2)],
            [(0, 0), (1, 0), (2, 0)],
            [(0, 1), (1, 1), (2, 1)],
            [(0, 2), (1, 2), (2, 2)],
            [(0, 0), (1, 1), (2, 2)],
            [(0, 2), (1, 1), (2, 0)],
        ];
        for line in lines {
            for side in [Side::X, Side::O] {
                let mut board = Board::empty();
                for (row, col) in line {
                    board = board.place(Cell::new_unchecked(row, col), side).unwrap();
                }
                assert_eq!(board.winner(), Some(side), "线 {:?} 应判 {} 胜", line, side);
            }
        }
    }

    #[test]
    fn test_winner_none_when_open() {
        // 有空格且无整线被占满时必须返回 None
        let board = Board::empty()
            .place(Cell::new_unchecked(0, 0), Side::X)
            .unwrap()
            .place(Cell::new_unchecked(1, 1), Side::O)
            .unwrap()
            .place(Cell::new_unchecked(0, 1), Side::X)
            .unwrap();
        assert!(board.empty_count() > 0);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_full_board_draw() {
        // X O X / O X O / O X O：满盘无胜者
        let mut board = Board::empty();
        let placements = [
            (0, 0, Side::X),
            (0, 1, Side::O),
            (0, 2, Side::X),
            (1, 0, Side::O),
            (1, 1, Side::X),
            (1, 2, Side::O),
            (2, 0, Side::O),
            (2, 1, Side::X),
            (2, 2, Side::O),
        ];
        for (row, col, side) in placements {
            board = board.place(Cell::new_unchecked(row, col), side).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_halves_never_overlap() {
        let board = Board::empty()
            .place(Cell::new_unchecked(0, 0), Side::X)
            .unwrap()
            .place(Cell::new_unchecked(2, 2), Side::O)
            .unwrap();
        assert_eq!(board.half(Side::X) & board.half(Side::O), 0);
    }

    #[test]
    fn test_game_state_successors() {
        let state = GameState::new_game();
        assert_eq!(state.current_turn, Side::O);
        let successors: Vec<Board> = state.legal_successors().collect();
        assert_eq!(successors.len(), 9);
        // 第一个后继是 O 落在 (0,0)
        assert_eq!(
            successors[0].occupant(Cell::new_unchecked(0, 0)),
            Some(Side::O)
        );
    }

    #[test]
    fn test_state_serde_roundtrip() {
        let mut state = GameState::new_game();
        state.board = state
            .board
            .place(Cell::new_unchecked(1, 1), Side::O)
            .unwrap();
        state.switch_turn();

        let json = serde_json::to_string(&state).unwrap();
        let parsed: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_switch_turn() {
        let mut state = GameState::new_game();
        state.switch_turn();
        assert_eq!(state.current_turn, Side::X);
        state.switch_turn();
        assert_eq!(state.current_turn, Side::O);
    }
}
