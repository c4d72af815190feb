//! Board structure with marked-cell tracking

use std::fmt;

use super::bitboard::Bitboard;
use super::{Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::rules::{find_winning_line, TerminalState, WinLine};

/// Game board.
///
/// Small enough to be `Copy`: search branches take their own copy instead
/// of marking and unmarking a shared board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Cross marks bitboard
    cross: Bitboard,
    /// Circle marks bitboard
    circle: Bitboard,
    /// Number of non-empty cells, always the number of set bits in both masks
    marked: u8,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cross: Bitboard::new(),
            circle: Bitboard::new(),
            marked: 0,
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        if self.cross.get(pos) {
            Mark::Cross
        } else if self.circle.get(pos) {
            Mark::Circle
        } else {
            Mark::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty_cell(&self, pos: Pos) -> bool {
        !self.cross.get(pos) && !self.circle.get(pos)
    }

    /// Mark an empty cell.
    ///
    /// The caller must have checked that `pos` is on the board and empty;
    /// only debug builds verify it.
    #[inline]
    pub fn mark_cell(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(self.is_empty_cell(pos), "cell {pos} already marked");
        match mark {
            Mark::Cross => self.cross.set(pos),
            Mark::Circle => self.circle.set(pos),
            Mark::Empty => return,
        }
        self.marked += 1;
    }

    /// Copy of the board with one more mark, used for lookahead
    #[inline]
    #[must_use]
    pub fn with_mark(&self, pos: Pos, mark: Mark) -> Board {
        let mut next = *self;
        next.mark_cell(pos, mark);
        next
    }

    /// Occupied cells of either side
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.cross.union(self.circle)
    }

    /// Total marks on board
    #[inline]
    pub fn marked_count(&self) -> u32 {
        u32::from(self.marked)
    }

    /// Empty cells in row-major order.
    ///
    /// The order is the tie-break order of every scan built on top of it.
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.occupied().complement().iter_ones().collect()
    }

    /// Check if every cell is marked
    #[inline]
    pub fn is_full(&self) -> bool {
        usize::from(self.marked) == TOTAL_CELLS
    }

    /// Check if board has no marks
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.marked == 0
    }

    /// Win detection in the fixed scan order (see [`crate::rules::win`])
    #[inline]
    pub fn terminal_state(&self) -> TerminalState {
        match find_winning_line(self) {
            Some(line) => TerminalState::Wins(line.mark),
            None => TerminalState::NoWin,
        }
    }

    /// The first winning line in scan order, if any
    #[inline]
    pub fn winning_line(&self) -> Option<WinLine> {
        find_winning_line(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                write!(f, "{}", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
