//! Search module for the Caro AI
//!
//! Contains:
//! - Candidate move generation (neighbourhood of existing marks)
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use movegen::candidate_moves;
