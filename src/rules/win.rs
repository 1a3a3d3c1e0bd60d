//! Win detection for a just-placed mark
//!
//! A move wins when the placed cell sits on a run of at least
//! [`WIN_LENGTH`] same-mark cells along one of the four axes. Only the
//! four axes through the placed cell are examined, so the scan is
//! bounded by `2 * (WIN_LENGTH - 1)` neighbor lookups per axis no
//! matter the board size.

use crate::board::{Axis, Board, Mark, Pos, WIN_LENGTH};

/// Find the winning run completed by placing `mark` at `pos`, if any.
///
/// For each axis the run counter starts at 1 for the origin cell, then
/// the scan walks outward cell by cell in the positive direction and
/// then the negative direction, extending while the neighbor exists and
/// carries the same mark. The scan exits the moment the counter reaches
/// [`WIN_LENGTH`]; remaining axes are not visited.
///
/// The returned run is in collection order: origin first, then the
/// positive-direction cells, then the negative-direction cells.
pub fn find_winning_run(board: &Board, pos: Pos, mark: Mark) -> Option<[Pos; WIN_LENGTH]> {
    if mark == Mark::Empty {
        return None;
    }

    for axis in Axis::ALL {
        let (dx, dy) = axis.offset();
        let mut run = [pos; WIN_LENGTH];
        let mut count = 1;

        for dir in [(dx, dy), (-dx, -dy)] {
            let mut next = board.neighbor(pos, dir);
            while let Some(cell) = next {
                if board.get(cell) != mark {
                    break;
                }
                run[count] = cell;
                count += 1;
                if count >= WIN_LENGTH {
                    return Some(run);
                }
                next = board.neighbor(cell, dir);
            }
        }
    }

    None
}

/// Check whether placing `mark` at `pos` completed a win
#[inline]
pub fn is_winning_move(board: &Board, pos: Pos, mark: Mark) -> bool {
    find_winning_run(board, pos, mark).is_some()
}
