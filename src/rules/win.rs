//! Win condition checking
//!
//! A player wins by owning [`WIN_LENGTH`] consecutive cells along a row,
//! column or diagonal. Detection only looks at lines through the cell that
//! was just played.

use crate::board::{Board, Player, Pos};

/// Marks in a row needed to win
pub const WIN_LENGTH: usize = 4;

/// Axis pairs scanned from the placed cell, each as (first, second) direction.
/// Order matters: it decides which line is reported when several complete at once.
const AXES: [[(i32, i32); 2]; 4] = [
    [(0, 1), (0, -1)],  // Horizontal: east, west
    [(1, 0), (-1, 0)],  // Vertical: south, north
    [(1, 1), (-1, -1)], // Diagonal: southeast, northwest
    [(1, -1), (-1, 1)], // Anti-diagonal: southwest, northeast
];

/// Find a winning line through `pos` for `player`.
///
/// The line is collected as the placed cell first, then cells along the
/// first direction of the axis, then along the second. Scanning stops as
/// soon as [`WIN_LENGTH`] cells are collected, so a longer run is reported
/// as exactly [`WIN_LENGTH`] cells.
pub fn find_winning_line(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    let mark = player.mark();

    for axis in AXES {
        let mut line = Vec::with_capacity(WIN_LENGTH);
        line.push(pos);

        for (dr, dc) in axis {
            let mut r = pos.row as i32 + dr;
            let mut c = pos.col as i32 + dc;
            while let Some(next) = Pos::checked(r, c) {
                if board.get(next) != mark {
                    break;
                }
                line.push(next);
                if line.len() == WIN_LENGTH {
                    return Some(line);
                }
                r += dr;
                c += dc;
            }
        }
    }

    None
}
