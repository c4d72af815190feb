//! Board representation for Caro

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (10x10)
pub const BOARD_SIZE: usize = 10;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 100

/// Marks in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Central 4x4 region (rows and cols 3..=6), favored by evaluation and openings
pub const CENTER_MIN: u8 = 3;
pub const CENTER_MAX: u8 = 6;

/// Cell contents / side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Mark {
    Empty,
    Cross,
    Circle,
}

impl Mark {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Cross => Mark::Circle,
            Mark::Circle => Mark::Cross,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Single-letter label used by the UI and logs
    pub fn symbol(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Circle => 'O',
            Mark::Empty => '.',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Whether the position lies in the central 4x4 region
    #[inline]
    pub fn is_central(self) -> bool {
        (CENTER_MIN..=CENTER_MAX).contains(&self.row) && (CENTER_MIN..=CENTER_MAX).contains(&self.col)
    }

    /// The 8 neighbours (Chebyshev distance 1) that lie on the board
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn neighbours(self) -> impl Iterator<Item = Pos> {
        let (row, col) = (i32::from(self.row), i32::from(self.col));
        (-1i32..=1)
            .flat_map(move |dr| (-1i32..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(move |(dr, dc)| (row + dr, col + dc))
            .filter(|&(r, c)| Pos::is_valid(r, c))
            .map(|(r, c)| Pos::new(r as u8, c as u8))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
