//! 棋局评估函数

use ttt_core::{Board, Side, LINE_MASKS, WIN_SCORE};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 终局评估
    ///
    /// X 获胜返回 +10，O 获胜返回 -10，满盘和棋返回 0，
    /// 未终局返回 None。这是唯一可以作为精确对局分值的评估。
    pub fn terminal(board: &Board) -> Option<i32> {
        match board.winner() {
            Some(Side::X) => Some(WIN_SCORE),
            Some(Side::O) => Some(-WIN_SCORE),
            None => {
                if board.is_full() {
                    Some(0)
                } else {
                    None
                }
            }
        }
    }

    /// 启发式评估（仅用于走法排序，绝不作为最终分值）
    ///
    /// 对 8 条线逐条计分：
    /// - 一条线仅被一方占据 c 个格子（另一方为空）时贡献 ±10^(c-1)
    /// - 混合线或空线贡献 0
    /// - X 为正方向
    ///
    /// 该值与真实 minimax 值没有保证关系，只用来让 Alpha-Beta
    /// 更早遇到强着法从而更早剪枝。
    pub fn heuristic(board: &Board) -> i32 {
        let x_half = board.half(Side::X);
        let o_half = board.half(Side::O);
        let mut score = 0;
        for mask in LINE_MASKS {
            let count_x = (x_half & mask).count_ones();
            let count_o = (o_half & mask).count_ones();
            if count_x == 0 && count_o > 0 {
                score -= 10i32.pow(count_o - 1);
            } else if count_o == 0 && count_x > 0 {
                score += 10i32.pow(count_x - 1);
            }
        }
        score
    }
}
