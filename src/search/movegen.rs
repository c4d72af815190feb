//! Candidate move generation
//!
//! Minimax does not search every empty cell. It only looks at a small,
//! ordered neighbourhood of plausible moves:
//!
//! - early game (fewer than 3 marks): the first empty cells of the center
//! - otherwise: empty cells touching an existing mark (8-neighbourhood)
//! - topped up from the center, then from anywhere, when that finds too few
//!
//! The list is truncated to a cap, which bounds the branching factor.

use crate::board::{Board, Pos, CENTER_MAX, CENTER_MIN};

/// Minimum number of candidates the generator tries to produce
pub const MIN_CANDIDATES: usize = 5;

/// Default cap on the candidate list
pub const DEFAULT_CANDIDATE_CAP: usize = 10;

/// Boards with fewer marks than this get center-only candidates
const OPENING_MARKS: u32 = 3;

/// Empty cells of the central 4x4 region in row-major order
fn central_empties(board: &Board) -> impl Iterator<Item = Pos> + '_ {
    (CENTER_MIN..=CENTER_MAX)
        .flat_map(|row| (CENTER_MIN..=CENTER_MAX).map(move |col| Pos::new(row, col)))
        .filter(|&pos| board.is_empty_cell(pos))
}

/// Generate the ordered candidate list for `board`.
///
/// The order is row-major within each tier (adjacent, center, rest) and is
/// the order the search explores moves in, so it also decides ties.
#[must_use]
pub fn candidate_moves(board: &Board, cap: usize) -> Vec<Pos> {
    if board.marked_count() < OPENING_MARKS {
        let mut moves: Vec<Pos> = central_empties(board).take(MIN_CANDIDATES).collect();
        moves.truncate(cap);
        return moves;
    }

    let empties = board.empty_cells();

    let mut moves: Vec<Pos> = empties
        .iter()
        .copied()
        .filter(|pos| pos.neighbours().any(|n| !board.is_empty_cell(n)))
        .collect();

    if moves.len() < MIN_CANDIDATES {
        let center: Vec<Pos> = central_empties(board)
            .filter(|pos| !moves.contains(pos))
            .take(MIN_CANDIDATES)
            .collect();
        moves.extend(center);

        if moves.len() < MIN_CANDIDATES {
            let rest: Vec<Pos> = empties
                .iter()
                .copied()
                .filter(|pos| !moves.contains(pos))
                .take(MIN_CANDIDATES)
                .collect();
            moves.extend(rest);
        }
    }

    moves.truncate(cap);
    moves
}
