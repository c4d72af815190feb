//! Heuristic evaluation function for Caro board positions
//!
//! This module provides the leaf evaluation for the minimax search.
//! It evaluates board positions based on:
//! - Win/loss/draw detection
//! - Window scoring over every 5-cell line segment
//! - Positional bonus for the central 4x4 region

use crate::board::{Board, Mark, Pos, CENTER_MAX, CENTER_MIN};
use crate::rules::{windows, TerminalState};

use super::patterns::{window_score, DeadWindowPolicy, PatternScore};

/// Evaluate the board from the perspective of the given side.
///
/// Returns a score where:
/// - Positive values indicate advantage for `mark`
/// - Negative values indicate disadvantage for `mark`
/// - `PatternScore::WIN` / `-PatternScore::WIN` for a decided game
/// - `0` for a full board without a winner
#[must_use]
pub fn evaluate(board: &Board, mark: Mark, policy: DeadWindowPolicy) -> i32 {
    match board.terminal_state() {
        TerminalState::Wins(winner) if winner == mark => return PatternScore::WIN,
        TerminalState::Wins(_) => return -PatternScore::WIN,
        TerminalState::NoWin if board.is_full() => return 0,
        TerminalState::NoWin => {}
    }

    evaluate_windows(board, mark, policy) + evaluate_positions(board, mark)
}

/// Sum of window scores over every window on the board.
pub fn evaluate_windows(board: &Board, mark: Mark, policy: DeadWindowPolicy) -> i32 {
    let opponent = mark.opponent();

    windows()
        .map(|window| {
            let (mut own, mut opp, mut empty) = (0u8, 0u8, 0u8);
            for pos in window.cells() {
                match board.get(pos) {
                    m if m == mark => own += 1,
                    m if m == opponent => opp += 1,
                    _ => empty += 1,
                }
            }
            window_score(own, opp, empty, policy)
        })
        .sum()
}

/// Positional bonus: marks in the central 4x4 region.
fn evaluate_positions(board: &Board, mark: Mark) -> i32 {
    let opponent = mark.opponent();
    let mut score = 0;

    for row in CENTER_MIN..=CENTER_MAX {
        for col in CENTER_MIN..=CENTER_MAX {
            match board.get(Pos::new(row, col)) {
                m if m == mark => score += PatternScore::CENTER,
                m if m == opponent => score -= PatternScore::CENTER,
                _ => {}
            }
        }
    }

    score
}
