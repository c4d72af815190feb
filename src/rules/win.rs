//! Win condition checking for Caro
//!
//! A side wins with five identical marks in a contiguous window along a
//! column, row, or either diagonal. Every 5-cell window is enumerated in a
//! fixed order so that, when several lines exist at once, the reported
//! winner and highlighted line are deterministic:
//!
//! 1. vertical (column by column, top to bottom)
//! 2. horizontal (row by row, left to right)
//! 3. diagonal descending (`\`)
//! 4. diagonal ascending (`/`)

use crate::board::{Board, Mark, Pos, BOARD_SIZE, WIN_LENGTH};

/// Number of window start offsets along a full line
const SPAN: usize = BOARD_SIZE - WIN_LENGTH + 1; // 6

/// Scan directions, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row, col) step between consecutive cells of a window
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// One 5-cell window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Pos,
    pub direction: Direction,
}

impl Window {
    /// The five cells of the window, starting from `start`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cells(&self) -> [Pos; WIN_LENGTH] {
        let (dr, dc) = self.direction.step();
        let (row, col) = (i32::from(self.start.row), i32::from(self.start.col));
        std::array::from_fn(|i| {
            let i = i as i32;
            Pos::new((row + dr * i) as u8, (col + dc * i) as u8)
        })
    }
}

/// Number of windows on the board: 60 vertical, 60 horizontal, 36 per diagonal
pub const WINDOW_COUNT: usize = 2 * BOARD_SIZE * SPAN + 2 * SPAN * SPAN;

/// All windows, in scan order, built at compile time
static WINDOWS: [Window; WINDOW_COUNT] = build_windows();

#[allow(clippy::cast_possible_truncation)]
const fn build_windows() -> [Window; WINDOW_COUNT] {
    let mut out = [Window { start: Pos { row: 0, col: 0 }, direction: Direction::Vertical };
        WINDOW_COUNT];
    let mut n = 0;
    let mut d = 0;
    while d < Direction::ALL.len() {
        let direction = Direction::ALL[d];
        let outer = match direction {
            Direction::Vertical | Direction::Horizontal => BOARD_SIZE,
            Direction::DiagonalDown | Direction::DiagonalUp => SPAN,
        };
        let mut a = 0;
        while a < outer {
            let mut b = 0;
            while b < SPAN {
                let start = match direction {
                    // Column-major: the column is the outer loop
                    Direction::Vertical => Pos { row: b as u8, col: a as u8 },
                    Direction::Horizontal | Direction::DiagonalDown => {
                        Pos { row: a as u8, col: b as u8 }
                    }
                    // Anchored on the bottom cell, rising to the right
                    Direction::DiagonalUp => Pos { row: (a + WIN_LENGTH - 1) as u8, col: b as u8 },
                };
                out[n] = Window { start, direction };
                n += 1;
                b += 1;
            }
            a += 1;
        }
        d += 1;
    }
    out
}

/// Every window on the board in scan order
#[inline]
pub fn windows() -> impl Iterator<Item = Window> {
    WINDOWS.iter().copied()
}

/// Result of a terminal-state query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    NoWin,
    Wins(Mark),
}

/// A completed five: who made it and where
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub mark: Mark,
    pub cells: [Pos; WIN_LENGTH],
}

/// Find the first winning window in scan order.
///
/// Returns `None` if no side has five in a row.
pub fn find_winning_line(board: &Board) -> Option<WinLine> {
    windows().find_map(|window| {
        let cells = window.cells();
        let mark = board.get(cells[0]);
        if mark == Mark::Empty {
            return None;
        }
        cells[1..]
            .iter()
            .all(|&p| board.get(p) == mark)
            .then_some(WinLine { mark, cells })
    })
}

/// Whether marking `pos` for `mark` makes `mark` the winner.
///
/// Uses the same first-in-scan-order rule as [`Board::terminal_state`], so
/// a five elsewhere that is found earlier decides the result. Works on a
/// copy; `board` is not modified.
#[inline]
pub fn wins_with(board: &Board, pos: Pos, mark: Mark) -> bool {
    mark != Mark::Empty
        && board.is_empty_cell(pos)
        && board.with_mark(pos, mark).terminal_state() == TerminalState::Wins(mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_count() {
        assert_eq!(windows().count(), 60 + 60 + 36 + 36);
        assert_eq!(WINDOW_COUNT, 192);
    }

    #[test]
    fn test_window_table_order() {
        let all: Vec<Window> = windows().collect();
        assert_eq!(all[0], Window { start: Pos::new(0, 0), direction: Direction::Vertical });
        assert_eq!(all[1], Window { start: Pos::new(1, 0), direction: Direction::Vertical });
        assert_eq!(all[6], Window { start: Pos::new(0, 1), direction: Direction::Vertical });
        assert_eq!(all[60], Window { start: Pos::new(0, 0), direction: Direction::Horizontal });
        assert_eq!(all[120], Window { start: Pos::new(0, 0), direction: Direction::DiagonalDown });
        assert_eq!(all[156], Window { start: Pos::new(4, 0), direction: Direction::DiagonalUp });
        assert_eq!(all[191], Window { start: Pos::new(9, 5), direction: Direction::DiagonalUp });
        for direction in Direction::ALL {
            let count = all.iter().filter(|w| w.direction == direction).count();
            let expected = match direction {
                Direction::Vertical | Direction::Horizontal => 60,
                _ => 36,
            };
            assert_eq!(count, expected);
        }
    }

    #[test]
    fn test_window_cells_stay_on_board() {
        for window in windows() {
            let cells = window.cells();
            assert_eq!(cells.len(), 5);
            for p in cells {
                assert!(usize::from(p.row) < BOARD_SIZE && usize::from(p.col) < BOARD_SIZE);
            }
        }
    }

    #[test]
    fn test_diagonal_up_cells() {
        let window = Window { start: Pos::new(4, 0), direction: Direction::DiagonalUp };
        assert_eq!(
            window.cells(),
            [Pos::new(4, 0), Pos::new(3, 1), Pos::new(2, 2), Pos::new(1, 3), Pos::new(0, 4)]
        );
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.mark_cell(Pos::new(5, i), Mark::Cross);
        }
        assert_eq!(board.terminal_state(), TerminalState::Wins(Mark::Cross));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 5..10 {
            board.mark_cell(Pos::new(i, 9), Mark::Circle);
        }
        assert_eq!(board.terminal_state(), TerminalState::Wins(Mark::Circle));
    }

    #[test]
    fn test_five_in_row_diagonal_down() {
        let mut board = Board::new();
        for i in 0..5 {
            board.mark_cell(Pos::new(i + 1, i + 2), Mark::Circle);
        }
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.mark, Mark::Circle);
        assert_eq!(line.cells[0], Pos::new(1, 2));
        assert_eq!(line.cells[4], Pos::new(5, 6));
    }

    #[test]
    fn test_five_in_row_diagonal_up() {
        let mut board = Board::new();
        // From (9, 5) up to (5, 9)
        for i in 0..5 {
            board.mark_cell(Pos::new(9 - i, 5 + i), Mark::Cross);
        }
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.mark, Mark::Cross);
        assert_eq!(line.cells[0], Pos::new(9, 5));
        assert_eq!(line.cells[4], Pos::new(5, 9));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.mark_cell(Pos::new(2, i), Mark::Cross);
        }
        let line = find_winning_line(&board).unwrap();
        // First horizontal window in scan order starts at col 0
        assert_eq!(line.cells[0], Pos::new(2, 0));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.mark_cell(Pos::new(9, i), Mark::Cross);
        }
        assert_eq!(board.terminal_state(), TerminalState::NoWin);
    }

    #[test]
    fn test_broken_line_not_win() {
        let mut board = Board::new();
        for i in [0, 1, 2, 4, 5] {
            board.mark_cell(Pos::new(3, i), Mark::Circle);
        }
        board.mark_cell(Pos::new(3, 3), Mark::Cross);
        assert_eq!(board.terminal_state(), TerminalState::NoWin);
    }

    #[test]
    fn test_vertical_reported_before_horizontal() {
        let mut board = Board::new();
        // Circle horizontal five on row 0 and cross vertical five in column 9
        for i in 0..5 {
            board.mark_cell(Pos::new(0, i), Mark::Circle);
            board.mark_cell(Pos::new(5 + i, 9), Mark::Cross);
        }
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.mark, Mark::Cross);
        assert_eq!(board.terminal_state(), TerminalState::Wins(Mark::Cross));
    }

    #[test]
    fn test_vertical_scan_is_column_major() {
        let mut board = Board::new();
        // Column 1 rows 5..10 is found before column 2 rows 0..5,
        // even though its top cell comes later in row-major order
        for i in 0..5 {
            board.mark_cell(Pos::new(5 + i, 1), Mark::Cross);
            board.mark_cell(Pos::new(i, 2), Mark::Circle);
        }
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.mark, Mark::Cross);
        assert_eq!(line.cells[0], Pos::new(5, 1));
    }

    #[test]
    fn test_descending_before_ascending() {
        let mut board = Board::new();
        for i in 0..5 {
            board.mark_cell(Pos::new(9 - i, i), Mark::Cross); // ascending
            board.mark_cell(Pos::new(i, 5 + i), Mark::Circle); // descending
        }
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.mark, Mark::Circle);
    }

    #[test]
    fn test_wins_with_does_not_mutate() {
        let mut board = Board::new();
        for i in 0..4 {
            board.mark_cell(Pos::new(7, i), Mark::Circle);
        }
        assert!(wins_with(&board, Pos::new(7, 4), Mark::Circle));
        assert!(!wins_with(&board, Pos::new(7, 4), Mark::Cross));
        assert!(!wins_with(&board, Pos::new(7, 0), Mark::Circle));
        assert_eq!(board.marked_count(), 4);
    }

    #[test]
    fn test_empty_not_five() {
        let board = Board::new();
        assert_eq!(board.terminal_state(), TerminalState::NoWin);
        assert!(find_winning_line(&board).is_none());
    }

    #[test]
    fn test_wins_with_follows_scan_order() {
        let mut board = Board::new();
        // Circle already holds a vertical five, which the scan reports first
        for i in 0..5 {
            board.mark_cell(Pos::new(i, 0), Mark::Circle);
        }
        for col in 1..5 {
            board.mark_cell(Pos::new(9, col), Mark::Cross);
        }
        let next = board.with_mark(Pos::new(9, 5), Mark::Cross);
        assert_eq!(next.terminal_state(), TerminalState::Wins(Mark::Circle));
        assert!(!wins_with(&board, Pos::new(9, 5), Mark::Cross));
        assert!(!wins_with(&board, Pos::new(9, 5), Mark::Empty));
    }
}
