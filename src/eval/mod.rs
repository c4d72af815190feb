//! Evaluation module for Caro positions
//!
//! The evaluation considers:
//! - Terminal positions (win, loss, draw)
//! - Window patterns (twos, threes, fours, fives) for both sides
//! - Positional bonuses (center control)

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{window_score, DeadWindowPolicy, PatternScore};
