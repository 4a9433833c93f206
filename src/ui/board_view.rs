//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Mark, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        human_mark: Mark,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 3]>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(board_size, board_size),
            Sense::click(),
        );

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Draw grid lines
        self.draw_grid(&painter);

        // Draw placed marks
        self.draw_marks(&painter, board);

        // Draw last move marker
        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Draw winning line highlight
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if accept_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.is_empty(board_pos);

                    self.draw_hover_preview(&painter, board_pos, human_mark, is_valid);

                    // Check for click
                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the two vertical and two horizontal separators
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let mark = board.get(pos);

                if mark != Mark::Empty {
                    self.draw_mark(painter, pos, mark, 255);
                }
            }
        }
    }

    /// Draw a single mark; `alpha` lets the hover preview reuse the shapes
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, alpha: u8) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;

        match mark {
            Mark::X => {
                let color = fade(X_MARK, alpha);
                let stroke = Stroke::new(MARK_STROKE_WIDTH, color);
                let arm = Vec2::new(radius, radius);
                painter.line_segment([center - arm, center + arm], stroke);
                let arm = Vec2::new(radius, -radius);
                painter.line_segment([center - arm, center + arm], stroke);
            }
            Mark::O => {
                if alpha == 255 {
                    // Soft shadow for depth
                    painter.circle_stroke(
                        center + Vec2::new(1.5, 1.5),
                        radius,
                        Stroke::new(MARK_STROKE_WIDTH, O_MARK_SHADOW),
                    );
                }
                painter.circle_stroke(
                    center,
                    radius,
                    Stroke::new(MARK_STROKE_WIDTH, fade(O_MARK, alpha)),
                );
            }
            Mark::Empty => {}
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let offset = self.cell_size * 0.5 - 10.0;
        painter.circle_filled(
            center + Vec2::new(offset, -offset),
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(5.0, WIN_HIGHLIGHT);
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[2]);
        painter.line_segment([start, end], stroke);

        // Draw circles around the winning cells
        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * MARK_RADIUS_RATIO + 8.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, mark: Mark, is_valid: bool) {
        if is_valid {
            self.draw_mark(painter, pos, mark, 90);
        } else {
            let center = self.board_to_screen(pos);
            let half = self.cell_size * 0.5 - 4.0;
            let rect = Rect::from_center_size(center, Vec2::splat(2.0 * half));
            painter.rect_filled(rect, CornerRadius::same(4), hover_invalid());
        }
    }

    /// Convert screen coordinates to a cell position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert a cell position to the screen coordinates of its center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

fn fade(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
