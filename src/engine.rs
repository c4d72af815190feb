//! Main AI engine tying the search components together
//!
//! The engine picks a move with a short priority list:
//!
//! 1. **Opening**: on an empty board, a random cell of the central 4x4 region
//! 2. **Immediate win**: any empty cell that completes a five for the AI
//! 3. **Block**: any empty cell where the opponent would complete a five
//! 4. **Minimax**: depth-limited alpha-beta search over candidate moves
//! 5. **Fallback**: a random empty cell if the search produced nothing usable
//!
//! The `Random` level keeps the opening and then plays a random empty cell.
//!
//! # Example
//!
//! ```
//! use caro::{AIEngine, Board, Mark, Pos};
//!
//! let mut engine = AIEngine::with_seed(Default::default(), 7);
//! let mut board = Board::new();
//! board.mark_cell(Pos::new(4, 4), Mark::Cross);
//!
//! let result = engine.get_move_with_stats(&board, Mark::Circle, Mark::Cross, 2);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::board::{Board, Mark, Pos, CENTER_MAX, CENTER_MIN};
use crate::config::{AiLevel, EngineConfig};
use crate::eval::PatternScore;
use crate::rules::wins_with;
use crate::search::{SearchResult, Searcher};

/// Which step of the priority list produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Random central cell on an empty board
    Opening,
    /// Completes a five right away
    ImmediateWin,
    /// Takes the cell where the opponent would complete a five
    Block,
    /// Minimax with alpha-beta
    Minimax,
    /// `Random` level
    Random,
    /// Random empty cell after the search gave no usable move
    Fallback,
}

impl SearchType {
    pub fn label(self) -> &'static str {
        match self {
            SearchType::Opening => "opening",
            SearchType::ImmediateWin => "immediate win",
            SearchType::Block => "block",
            SearchType::Minimax => "minimax",
            SearchType::Random => "random",
            SearchType::Fallback => "fallback",
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move; `None` only when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Minimax score for searched moves, `PatternScore::WIN` for an immediate win, else 0
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of search nodes visited
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn shortcut(pos: Option<Pos>, score: i32, search_type: SearchType, start: Instant) -> Self {
        Self {
            best_move: pos,
            score,
            search_type,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: 0,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, best_move: Pos, start: Instant) -> Self {
        Self {
            best_move: Some(best_move),
            score: result.score,
            search_type: SearchType::Minimax,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: result.nodes,
        }
    }
}

/// AI engine for Caro.
///
/// Owns its configuration, a minimax [`Searcher`] and the random number
/// generator used for openings, the `Random` level and fallbacks. The
/// generator never influences the search itself, so for a fixed board and
/// depth the searched move is always the same.
///
/// # Example
///
/// ```
/// use caro::{AIEngine, Board, Mark};
///
/// let mut engine = AIEngine::new();
/// let board = Board::new();
/// let pos = engine.choose_move(&board, Mark::Cross, Mark::Circle, 2).unwrap();
/// assert!(pos.is_central());
/// ```
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
    rng: StdRng,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine seeded from system entropy.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose random choices are reproducible.
    #[must_use]
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> Self {
        Self {
            searcher: Searcher::new(config.candidate_cap, config.dead_window),
            config,
            rng,
        }
    }

    /// Choose a move for `ai` against `opponent`, searching `max_depth` plies.
    ///
    /// Returns `None` only when the board has no empty cell. The board is
    /// never modified.
    #[must_use]
    pub fn choose_move(
        &mut self,
        board: &Board,
        ai: Mark,
        opponent: Mark,
        max_depth: u8,
    ) -> Option<Pos> {
        self.get_move_with_stats(board, ai, opponent, max_depth).best_move
    }

    /// Choose a move for `ai` at the configured depth.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, ai: Mark) -> Option<Pos> {
        let depth = self.config.max_depth;
        self.choose_move(board, ai, ai.opponent(), depth)
    }

    /// Choose a move and report how it was found.
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        ai: Mark,
        opponent: Mark,
        max_depth: u8,
    ) -> MoveResult {
        debug_assert_eq!(opponent, ai.opponent());
        let start = Instant::now();

        if board.is_full() {
            warn!("no empty cell left for {:?}", ai);
            return MoveResult::shortcut(None, 0, SearchType::Fallback, start);
        }

        // 0. Opening: any central cell, no search, at every level
        if board.is_board_empty() {
            let pos = Pos::new(
                self.rng.gen_range(CENTER_MIN..=CENTER_MAX),
                self.rng.gen_range(CENTER_MIN..=CENTER_MAX),
            );
            debug!(?ai, %pos, "opening move");
            return MoveResult::shortcut(Some(pos), 0, SearchType::Opening, start);
        }

        if self.config.level == AiLevel::Random {
            let pos = self.random_empty(board);
            debug!(?ai, ?pos, "random level move");
            return MoveResult::shortcut(pos, 0, SearchType::Random, start);
        }

        let empties = board.empty_cells();

        // 1. Our own five beats everything else
        if let Some(&pos) = empties.iter().find(|&&pos| wins_with(board, pos, ai)) {
            debug!(?ai, %pos, "immediate win");
            return MoveResult::shortcut(
                Some(pos),
                PatternScore::WIN,
                SearchType::ImmediateWin,
                start,
            );
        }

        // 2. Opponent would win next move: take that cell
        if let Some(&pos) = empties.iter().find(|&&pos| wins_with(board, pos, opponent)) {
            debug!(?ai, %pos, "blocking opponent five");
            return MoveResult::shortcut(Some(pos), 0, SearchType::Block, start);
        }

        // 3. Minimax
        let result = self.searcher.search(board, ai, max_depth);
        match result.best_move {
            Some(pos) if board.is_empty_cell(pos) => {
                let cutoffs = result.stats.cutoffs;
                let result = MoveResult::from_search(result, pos, start);
                debug!(
                    ?ai,
                    %pos,
                    score = result.score,
                    nodes = result.nodes,
                    cutoffs,
                    time_ms = result.time_ms,
                    "minimax move"
                );
                result
            }
            other => {
                warn!(
                    ?ai,
                    returned = ?other,
                    depth = max_depth,
                    "search gave no usable move, playing random"
                );
                let pos = self.random_empty(board);
                MoveResult {
                    best_move: pos,
                    score: result.score,
                    search_type: SearchType::Fallback,
                    time_ms: start.elapsed().as_millis() as u64,
                    nodes: result.nodes,
                }
            }
        }
    }

    fn random_empty(&mut self, board: &Board) -> Option<Pos> {
        board.empty_cells().choose(&mut self.rng).copied()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the configuration; the random generator keeps its state.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.searcher = Searcher::new(config.candidate_cap, config.dead_window);
        self.config = config;
    }

    pub fn set_level(&mut self, level: AiLevel) {
        self.config.level = level;
    }

    #[must_use]
    pub fn level(&self) -> AiLevel {
        self.config.level
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.max_depth = depth;
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.config.max_depth
    }
}
