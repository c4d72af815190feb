//! Game rules for Caro
//!
//! Only one rule decides the game: five identical marks in a row, column,
//! or diagonal. A full board without a five is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{
    find_winning_line, windows, wins_with, Direction, TerminalState, WinLine, Window, WINDOW_COUNT,
};
