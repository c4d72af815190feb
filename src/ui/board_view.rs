//! Board rendering for the Caro GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos, BOARD_SIZE};

use super::theme::*;

/// What the board needs to know about the game to draw itself
pub struct BoardSnapshot<'a> {
    pub board: &'a Board,
    pub current_turn: Mark,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<[Pos; 5]>,
    /// Clicks and hover previews are ignored when false
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Drawing area of the 10x10 cells, margin excluded
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, snapshot: &BoardSnapshot<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(200.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);

        if let Some(pos) = snapshot.suggested_move {
            self.draw_suggestion(&painter, pos);
        }

        for pos in (0..BOARD_SIZE * BOARD_SIZE).map(Pos::from_index) {
            let mark = snapshot.board.get(pos);
            if mark != Mark::Empty {
                self.draw_mark(&painter, pos, mark, 255);
            }
        }

        if let Some(pos) = snapshot.last_move {
            painter.circle_filled(
                self.cell_rect(pos).right_top() + Vec2::new(-8.0, 8.0),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }

        if let Some(line) = snapshot.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !snapshot.accepts_input {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_board(pointer)?;
        let is_empty = snapshot.board.is_empty_cell(pos);

        if is_empty {
            self.draw_mark(&painter, pos, snapshot.current_turn, 110);
        } else {
            painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::ZERO, hover_invalid());
        }

        (response.clicked() && is_empty).then_some(pos)
    }

    /// Draw the inner lines between the 10x10 cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let rect = self.grid_rect;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [Pos2::new(rect.min.x + offset, rect.min.y), Pos2::new(rect.min.x + offset, rect.max.y)],
                stroke,
            );
            painter.line_segment(
                [Pos2::new(rect.min.x, rect.min.y + offset), Pos2::new(rect.max.x, rect.min.y + offset)],
                stroke,
            );
        }
    }

    /// Draw an X or an O; `alpha` < 255 for previews
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, alpha: u8) {
        let cell = self.cell_rect(pos);
        let width = self.cell_size * MARK_WIDTH_RATIO;

        let tint = |color: Color32| if alpha == 255 { color } else { ghost(color) };

        match mark {
            Mark::Cross => {
                let stroke = Stroke::new(width, tint(CROSS_COLOR));
                let inner = cell.shrink(self.cell_size * CROSS_INSET_RATIO);
                painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
                painter.line_segment([inner.left_bottom(), inner.right_top()], stroke);
            }
            Mark::Circle => {
                let stroke = Stroke::new(width * 0.7, tint(CIRCLE_COLOR));
                painter.circle_stroke(cell.center(), self.cell_size * CIRCLE_RADIUS_RATIO, stroke);
            }
            Mark::Empty => {}
        }
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);

        for pos in line {
            painter.rect_stroke(
                self.cell_rect(*pos).shrink(3.0),
                CornerRadius::same(4),
                stroke,
                egui::StrokeKind::Inside,
            );
        }

        let start = self.cell_rect(line[0]).center();
        let end = self.cell_rect(line[4]).center();
        painter.line_segment([start, end], Stroke::new(5.0, WIN_HIGHLIGHT));
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos) {
        let cell = self.cell_rect(pos);
        painter.rect_stroke(
            cell.shrink(5.0),
            CornerRadius::same(6),
            Stroke::new(2.0, HINT_MARKER),
            egui::StrokeKind::Inside,
        );
        painter.text(
            cell.center(),
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(self.cell_size * 0.4),
            HINT_MARKER,
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(f32::from(pos.col) * self.cell_size, f32::from(pos.row) * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }
}
