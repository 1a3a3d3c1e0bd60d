//! Directional scoring heuristic for the automated opponent
//!
//! A single-ply greedy heuristic: every available cell gets a weight
//! built from per-axis scores, and the highest weight wins. Per axis the
//! scan covers up to `WIN_LENGTH - 1` cells on each side of the
//! candidate, so the whole pass is O(cells * axes * WIN_LENGTH) with no
//! lookahead.
//!
//! Axis scoring, in evaluation order:
//! 1. A window too short to ever reach `WIN_LENGTH` excludes the axis.
//! 2. An all-empty window is neutral: score 0, still included.
//! 3. An unbroken human run of `WIN_LENGTH - 2` or more touching the
//!    candidate forces the block score.
//! 4. A window with no human marks scores the automated opponent's own
//!    mark count, rewarding extension of unblocked lines.
//! 5. Anything else is contested and excludes the axis.
//!
//! The contested-axis exclusion means a line where both sides already
//! hold marks contributes nothing unless the human threat is imminent.

use crate::board::{Axis, Board, Mark, Pos, WIN_LENGTH};

/// Axis score when the human is one move short of an open run,
/// prioritizing the block over everything else
pub const BLOCK_SCORE: i32 = 1000;

/// Aggregated counts over one scanning range.
///
/// `human_leading_run` is the length of the unbroken human-mark run
/// starting at the cell nearest the candidate, before any gap or
/// non-human cell. Profiles from opposite scan directions combine by
/// field-wise addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreProfile {
    pub own: i32,
    pub human: i32,
    pub empty: i32,
    pub human_leading_run: i32,
}

impl std::ops::Add for ScoreProfile {
    type Output = ScoreProfile;

    fn add(self, other: ScoreProfile) -> ScoreProfile {
        ScoreProfile {
            own: self.own + other.own,
            human: self.human + other.human,
            empty: self.empty + other.empty,
            human_leading_run: self.human_leading_run + other.human_leading_run,
        }
    }
}

/// One side of an axis scan: how far the walk got and what it saw
struct SideScan {
    len: i32,
    profile: ScoreProfile,
}

/// Walk outward from `origin` along `dir`, visiting at most
/// `WIN_LENGTH - 1` cells and stopping at the board edge.
fn scan_side(board: &Board, origin: Pos, dir: (i32, i32), human: Mark) -> SideScan {
    let mut len = 0;
    let mut profile = ScoreProfile::default();
    let mut leading = true;

    let mut next = board.neighbor(origin, dir);
    while let Some(cell) = next {
        if len >= WIN_LENGTH as i32 - 1 {
            break;
        }
        len += 1;

        let mark = board.get(cell);
        if mark == Mark::Empty {
            profile.empty += 1;
        } else if mark == human {
            profile.human += 1;
        } else {
            profile.own += 1;
        }

        // Leading run: contiguous human marks from the near end only
        if leading && mark == human {
            profile.human_leading_run += 1;
        } else {
            leading = false;
        }

        next = board.neighbor(cell, dir);
    }

    SideScan { len, profile }
}

/// Score one axis through a candidate cell for the automated opponent.
///
/// Returns `None` when the axis is excluded: the window cannot reach
/// `WIN_LENGTH`, or the line is contested without an imminent threat.
pub fn axis_score(board: &Board, pos: Pos, axis: Axis, automated: Mark) -> Option<i32> {
    let human = automated.opponent();
    let (dx, dy) = axis.offset();

    let right = scan_side(board, pos, (dx, dy), human);
    let left = scan_side(board, pos, (-dx, -dy), human);

    // Not enough cells to ever make a winning run through here
    if right.len + left.len + 1 < WIN_LENGTH as i32 {
        return None;
    }

    // Neutral axis: nothing placed on either side
    if right.profile.empty == right.len && left.profile.empty == left.len {
        return Some(0);
    }

    let combined = right.profile + left.profile;

    if combined.human_leading_run >= WIN_LENGTH as i32 - 2 {
        return Some(BLOCK_SCORE);
    }
    if combined.human == 0 {
        return Some(combined.own);
    }

    None
}

/// Aggregate weight for a candidate cell: the sum of all included axis
/// scores plus one participation point per included axis. A cell with
/// no included axes weighs 0.
pub fn cell_weight(board: &Board, pos: Pos, automated: Mark) -> i32 {
    let mut scores: [Option<i32>; 4] = [None; 4];
    for axis in Axis::ALL {
        scores[axis.index()] = axis_score(board, pos, axis, automated);
    }

    let mut weight = 0;
    for score in scores.into_iter().flatten() {
        weight += score + 1;
    }
    weight
}

/// Pick the automated opponent's move: the available cell with the
/// strictly highest weight, ties resolved to the lowest cell index.
/// Returns `None` only when no cell is available.
pub fn select_move(board: &Board, automated: Mark) -> Option<Pos> {
    let mut best: Option<(Pos, i32)> = None;

    for pos in board.empty_positions() {
        let weight = cell_weight(board, pos, automated);
        match best {
            Some((_, best_weight)) if weight <= best_weight => {}
            _ => best = Some((pos, weight)),
        }
    }

    best.map(|(pos, _)| pos)
}
