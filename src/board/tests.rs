use super::*;
use crate::rules::TerminalState;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::Cross.opponent(), Mark::Circle);
    assert_eq!(Mark::Circle.opponent(), Mark::Cross);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(5, 4);
    assert_eq!(pos.to_index(), 54);

    let pos2 = Pos::from_index(54);
    assert_eq!(pos2.row, 5);
    assert_eq!(pos2.col, 4);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(9, 9));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(10, 0));
    assert!(!Pos::is_valid(0, 10));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 10);
    assert_eq!(TOTAL_CELLS, 100);
    assert_eq!(WIN_LENGTH, 5);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_central_region() {
    assert!(Pos::new(3, 3).is_central());
    assert!(Pos::new(6, 6).is_central());
    assert!(!Pos::new(2, 4).is_central());
    assert!(!Pos::new(4, 7).is_central());
}

#[test]
fn test_neighbours_corner_and_middle() {
    assert_eq!(Pos::new(0, 0).neighbours().count(), 3);
    assert_eq!(Pos::new(0, 5).neighbours().count(), 5);
    assert_eq!(Pos::new(5, 5).neighbours().count(), 8);
    assert!(Pos::new(5, 5).neighbours().all(|p| p != Pos::new(5, 5)));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.marked_count(), 0);
    assert_eq!(board.empty_cells().len(), 100);
    assert_eq!(board.terminal_state(), TerminalState::NoWin);
}

#[test]
fn test_mark_cell_updates_count() {
    let mut board = Board::new();
    board.mark_cell(Pos::new(2, 3), Mark::Cross);
    board.mark_cell(Pos::new(7, 7), Mark::Circle);

    assert_eq!(board.get(Pos::new(2, 3)), Mark::Cross);
    assert_eq!(board.get(Pos::new(7, 7)), Mark::Circle);
    assert_eq!(board.get(Pos::new(0, 0)), Mark::Empty);
    assert!(!board.is_empty_cell(Pos::new(2, 3)));
    assert!(board.is_empty_cell(Pos::new(0, 0)));
    assert_eq!(board.marked_count(), 2);
    assert!(!board.is_board_empty());
}

#[test]
fn test_marked_count_matches_occupied_cells() {
    let mut board = Board::new();
    let mut mark = Mark::Cross;
    // Walk the board with a stride coprime to 100 so every cell gets visited once
    for step in 0..100usize {
        let pos = Pos::from_index((step * 37) % 100);
        board.mark_cell(pos, mark);
        mark = mark.opponent();

        let occupied = (0..100).filter(|&i| !board.is_empty_cell(Pos::from_index(i))).count();
        assert_eq!(board.marked_count() as usize, occupied);
        assert_eq!(board.is_full(), board.marked_count() == 100);
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new();
    board.mark_cell(Pos::new(0, 0), Mark::Cross);
    board.mark_cell(Pos::new(0, 2), Mark::Circle);

    let empties = board.empty_cells();
    assert_eq!(empties.len(), 98);
    assert_eq!(empties[0], Pos::new(0, 1));
    assert_eq!(empties[1], Pos::new(0, 3));
    assert_eq!(*empties.last().unwrap(), Pos::new(9, 9));
    assert!(empties.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_with_mark_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_mark(Pos::new(4, 4), Mark::Circle);
    assert!(board.is_board_empty());
    assert_eq!(next.get(Pos::new(4, 4)), Mark::Circle);
    assert_eq!(next.marked_count(), 1);
}

#[test]
fn test_display_grid() {
    let mut board = Board::new();
    board.mark_cell(Pos::new(0, 0), Mark::Cross);
    board.mark_cell(Pos::new(0, 1), Mark::Circle);
    let text = board.to_string();
    let first = text.lines().next().unwrap();
    assert_eq!(first, "XO........");
    assert_eq!(text.lines().count(), 10);
}
