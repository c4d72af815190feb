//! Caro: five in a row on a 10x10 board, with a minimax AI
//!
//! Rules:
//! - 10x10 board, empty at the start
//! - Cross (X) always moves first, then the sides alternate
//! - Five or more identical marks in a row, column or diagonal win
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Window enumeration and win detection
//! - [`eval`]: Window-based position evaluation
//! - [`search`]: Candidate generation and alpha-beta minimax
//! - [`engine`]: Main AI engine integrating all components
//! - [`config`]: JSON engine configuration
//! - [`ui`]: egui front end and game model
//!
//! # Quick Start
//!
//! ```
//! use caro::{AIEngine, Board, Mark, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//!
//! board.mark_cell(Pos::new(4, 4), Mark::Cross);
//!
//! // AI responds as Circle
//! if let Some(pos) = engine.choose_move(&board, Mark::Circle, Mark::Cross, 2) {
//!     board.mark_cell(pos, Mark::Circle);
//!     println!("AI plays at {pos}");
//! }
//! assert_eq!(board.marked_count(), 2);
//! ```
//!
//! # Move Priority
//!
//! The AI engine follows this priority:
//! 1. Random central cell on an empty board
//! 2. Immediate winning move
//! 3. Block the opponent's immediate win
//! 4. Minimax with alpha-beta pruning
//! 5. Random empty cell if the search gave nothing usable

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE};
pub use config::{AiLevel, ConfigError, EngineConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use rules::{TerminalState, WinLine};
