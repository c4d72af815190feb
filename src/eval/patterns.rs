//! Window scores for Caro evaluation
//!
//! Every 5-cell window is scored from the counts of own marks, opponent
//! marks and empty cells it holds.

use serde::{Deserialize, Serialize};

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Decided game (terminal position)
    pub const WIN: i32 = 10_000;

    /// Five in one window
    pub const FIVE: i32 = 1_000;
    /// Four plus one empty: one move from a five
    pub const FOUR: i32 = 500;
    /// Three plus two empties
    pub const THREE: i32 = 50;
    /// Two plus three empties
    pub const TWO: i32 = 10;

    /// Per-mark bonus inside the central 4x4 region
    pub const CENTER: i32 = 3;
}

/// How windows holding marks of both sides are scored.
///
/// With the window table above the two policies score every window the
/// same: each scoring row needs `own + empty == 5` (or `opp + empty == 5`),
/// which a mixed window can never satisfy. `Skip` short-circuits those
/// windows; `Score` runs them through the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadWindowPolicy {
    /// Mixed windows contribute 0 without consulting the table
    #[default]
    Skip,
    /// Mixed windows go through the table like any other
    Score,
}

/// Score one window from the evaluating side's perspective.
///
/// `own`, `opp` and `empty` always sum to 5.
pub fn window_score(own: u8, opp: u8, empty: u8, policy: DeadWindowPolicy) -> i32 {
    if policy == DeadWindowPolicy::Skip && own > 0 && opp > 0 {
        return 0;
    }

    if own == 5 {
        return PatternScore::FIVE;
    }

    let mut score = match (own, empty) {
        (4, 1) => PatternScore::FOUR,
        (3, 2) => PatternScore::THREE,
        (2, 3) => PatternScore::TWO,
        _ => 0,
    };

    // Checked on its own rather than as a negation of the branch above;
    // a window cannot hold five of both sides.
    if opp == 5 {
        return -PatternScore::FIVE;
    }

    score -= match (opp, empty) {
        (4, 1) => PatternScore::FOUR,
        (3, 2) => PatternScore::THREE,
        (2, 3) => PatternScore::TWO,
        _ => 0,
    };

    score
}
