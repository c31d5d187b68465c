//! 棋盘记谱格式（渲染和解析）
//!
//! 渲染格式示例：
//! ```text
//!  X | O |
//! ---+---+---
//!    | X |
//! ---+---+---
//!  O |   |
//! ```
//!
//! 解析从渲染结果重建占位，往返必须还原完全相同的位向量

use crate::board::Board;
use crate::error::GameError;
use crate::side::{Cell, Side};

/// 行间分隔线
const SEPARATOR: &str = "---+---+---";

/// 记谱格式处理
pub struct Notation;

impl Notation {
    /// 将棋盘渲染为网格字符串
    pub fn render(board: &Board) -> String {
        let mut rows = Vec::with_capacity(3);
        for row in 0..3u8 {
            let cells: Vec<char> = (0..3u8)
                .map(|col| {
                    board
                        .occupant(Cell::new_unchecked(row, col))
                        .map(|side| side.symbol())
                        .unwrap_or(' ')
                })
                .collect();
            rows.push(format!(" {} | {} | {}", cells[0], cells[1], cells[2]));
        }
        rows.join(&format!("\n{}\n", SEPARATOR))
    }

    /// 从网格字符串解析棋盘
    pub fn parse(text: &str) -> Result<Board, GameError> {
        let rows: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim().starts_with("---"))
            .collect();

        if rows.len() != 3 {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected 3 rows, got {}", rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            // 格子符号位于第 1、5、9 个字符（" X | O | X " 布局）
            let chars: Vec<char> = row.chars().collect();
            for (col_idx, &pos) in [1usize, 5, 9].iter().enumerate() {
                let c = chars.get(pos).copied().unwrap_or(' ');
                if c == ' ' {
                    continue;
                }
                let side = Side::from_symbol(c).ok_or_else(|| GameError::InvalidNotation {
                    reason: format!("Invalid cell symbol: {:?}", c),
                })?;
                let cell = Cell::new_unchecked(row_idx as u8, col_idx as u8);
                board = board
                    .place(cell, side)
                    .expect("parse visits each cell once");
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board::empty()
            .place(Cell::new_unchecked(0, 0), Side::X)
            .unwrap()
            .place(Cell::new_unchecked(0, 1), Side::O)
            .unwrap()
            .place(Cell::new_unchecked(1, 1), Side::X)
            .unwrap()
            .place(Cell::new_unchecked(2, 0), Side::O)
            .unwrap()
    }

    #[test]
    fn test_render_layout() {
        let board = sample_board();
        let text = Notation::render(&board);
        let expected = " X | O |  \n---+---+---\n   | X |  \n---+---+---\n O |   |  ";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_roundtrip_identical_bits() {
        // 渲染后解析必须还原完全相同的位向量
        let board = sample_board();
        let parsed = Notation::parse(&Notation::render(&board)).unwrap();
        assert_eq!(parsed.bits(), board.bits());
    }

    #[test]
    fn test_roundtrip_empty_and_full() {
        let empty = Board::empty();
        let parsed = Notation::parse(&Notation::render(&empty)).unwrap();
        assert_eq!(parsed.bits(), 0);

        let mut full = Board::empty();
        let sides = [
            Side::X,
            Side::O,
            Side::X,
            Side::O,
            Side::X,
            Side::O,
            Side::O,
            Side::X,
            Side::O,
        ];
        for (i, side) in sides.into_iter().enumerate() {
            full = full
                .place(Cell::new_unchecked((i / 3) as u8, (i % 3) as u8), side)
                .unwrap();
        }
        let parsed = Notation::parse(&Notation::render(&full)).unwrap();
        assert_eq!(parsed.bits(), full.bits());
    }

    #[test]
    fn test_parse_invalid_row_count() {
        let result = Notation::parse(" X | O |  ");
        assert!(matches!(
            result,
            Err(GameError::InvalidNotation { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_symbol() {
        let text = " Z | O |  \n---+---+---\n   | X |  \n---+---+---\n O |   |  ";
        let result = Notation::parse(text);
        assert!(matches!(
            result,
            Err(GameError::InvalidNotation { .. })
        ));
    }

    #[test]
    fn test_display_matches_render() {
        let board = sample_board();
        assert_eq!(format!("{}", board), Notation::render(&board));
    }
}
