//! Depth-limited minimax with alpha-beta pruning
//!
//! This is the search the engine falls back to once the one-ply shortcuts
//! (immediate win, forced block) have found nothing. It is a plain
//! maximizing/minimizing minimax rather than negamax: every leaf is scored
//! from the AI side's perspective, and the minimizing layers play its
//! opponent.
//!
//! Each branch works on its own copy of the board, so there is no undo step.
//!
//! # Example
//!
//! ```
//! use caro::board::{Board, Mark, Pos};
//! use caro::search::Searcher;
//!
//! let mut board = Board::new();
//! board.mark_cell(Pos::new(4, 4), Mark::Cross);
//! board.mark_cell(Pos::new(4, 5), Mark::Circle);
//! board.mark_cell(Pos::new(5, 5), Mark::Cross);
//!
//! let mut searcher = Searcher::default();
//! let result = searcher.search(&board, Mark::Circle, 2);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Mark, Pos};
use crate::eval::{evaluate, DeadWindowPolicy, PatternScore};
use crate::rules::TerminalState;

use super::movegen::{candidate_moves, DEFAULT_CANDIDATE_CAP};

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total cutoffs (either side)
    pub cutoffs: u64,
    /// Cutoffs on the first candidate tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the root, from the AI side's perspective
    pub score: i32,
    /// Depth limit the search ran with
    pub depth: u8,
    /// Total nodes visited, root included
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Minimax searcher.
///
/// Holds the knobs that shape the tree (candidate cap, dead-window policy)
/// and the counters of the last search. Nothing carries over between
/// searches, so results depend only on the board, the side and the depth.
#[derive(Debug, Clone)]
pub struct Searcher {
    candidate_cap: usize,
    policy: DeadWindowPolicy,
    // Per-search state
    ai: Mark,
    max_depth: u8,
    nodes: u64,
    stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATE_CAP, DeadWindowPolicy::default())
    }
}

impl Searcher {
    /// Create a searcher exploring at most `candidate_cap` moves per node.
    #[must_use]
    pub fn new(candidate_cap: usize, policy: DeadWindowPolicy) -> Self {
        Self {
            candidate_cap,
            policy,
            ai: Mark::Cross,
            max_depth: 0,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Candidate cap per node
    #[must_use]
    pub fn candidate_cap(&self) -> usize {
        self.candidate_cap
    }

    /// Search `board` for the best move of `ai`, `max_depth` plies deep.
    ///
    /// `best_move` is `None` only when the root has no candidates or is
    /// already terminal. The caller's board is never modified.
    #[must_use]
    pub fn search(&mut self, board: &Board, ai: Mark, max_depth: u8) -> SearchResult {
        self.ai = ai;
        self.max_depth = max_depth;
        self.nodes = 0;
        self.stats = SearchStats::default();

        let (score, best_move) = self.minimax(board, true, 0, i32::MIN, i32::MAX);

        SearchResult {
            best_move,
            score,
            depth: max_depth,
            nodes: self.nodes,
            stats: self.stats,
        }
    }

    fn minimax(
        &mut self,
        board: &Board,
        maximizing: bool,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if depth >= self.max_depth {
            return (evaluate(board, self.ai, self.policy), None);
        }

        let plies = i32::from(depth);
        match board.terminal_state() {
            TerminalState::Wins(winner) if winner == self.ai => {
                return (PatternScore::WIN - plies, None)
            }
            TerminalState::Wins(_) => return (-PatternScore::WIN + plies, None),
            TerminalState::NoWin if board.is_full() => return (0, None),
            TerminalState::NoWin => {}
        }

        let moves = candidate_moves(board, self.candidate_cap);
        let Some(&first) = moves.first() else {
            return (0, None);
        };

        let mover = if maximizing { self.ai } else { self.ai.opponent() };
        let mut best_move = first;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for (i, &mv) in moves.iter().enumerate() {
            let child = board.with_mark(mv, mover);
            let (score, _) = self.minimax(&child, !maximizing, depth + 1, alpha, beta);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = mv;
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        (best_score, Some(best_move))
    }
}
