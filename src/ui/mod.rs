//! GUI module for the Caro game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::CaroApp;
pub use game_state::{AiState, GameMode, GameResult, GameState, MoveError};
