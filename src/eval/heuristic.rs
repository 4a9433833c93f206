//! Heuristic evaluation function for tic-tac-toe positions
//!
//! Sums the per-line score over all eight winning lines. Positive totals
//! favor the computer, negative totals favor the human. The function is a
//! pure read of the board: it never looks at the last-move marker and is
//! valid for any position, terminal or not.

use crate::board::{Board, Mark, Pos};

use super::patterns::line_score;

/// The eight winning lines: three rows, three columns, two diagonals
pub const LINES: [[Pos; 3]; 8] = [
    // Rows
    [
        Pos { row: 0, col: 0 },
        Pos { row: 0, col: 1 },
        Pos { row: 0, col: 2 },
    ],
    [
        Pos { row: 1, col: 0 },
        Pos { row: 1, col: 1 },
        Pos { row: 1, col: 2 },
    ],
    [
        Pos { row: 2, col: 0 },
        Pos { row: 2, col: 1 },
        Pos { row: 2, col: 2 },
    ],
    // Columns
    [
        Pos { row: 0, col: 0 },
        Pos { row: 1, col: 0 },
        Pos { row: 2, col: 0 },
    ],
    [
        Pos { row: 0, col: 1 },
        Pos { row: 1, col: 1 },
        Pos { row: 2, col: 1 },
    ],
    [
        Pos { row: 0, col: 2 },
        Pos { row: 1, col: 2 },
        Pos { row: 2, col: 2 },
    ],
    // Diagonals
    [
        Pos { row: 0, col: 0 },
        Pos { row: 1, col: 1 },
        Pos { row: 2, col: 2 },
    ],
    [
        Pos { row: 0, col: 2 },
        Pos { row: 1, col: 1 },
        Pos { row: 2, col: 0 },
    ],
];

/// Evaluate the board from the perspective of `computer`.
///
/// Returns the summed line scores: `100` per completed computer line,
/// `-100` per completed human line, `±10` per open two-in-a-row, `±1` per
/// lone mark on an open line, `0` for blocked lines.
#[must_use]
pub fn evaluate(board: &Board, computer: Mark) -> i32 {
    debug_assert!(computer != Mark::Empty);
    let human = computer.opponent();

    let mut total = 0;
    for line in &LINES {
        let mut ours = 0u8;
        let mut theirs = 0u8;
        for &pos in line {
            let mark = board.get(pos);
            if mark == computer {
                ours += 1;
            } else if mark == human {
                theirs += 1;
            }
        }
        total += line_score(ours, theirs);
    }
    total
}
