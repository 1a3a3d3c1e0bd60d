//! Board rendering for the quadline GUI

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Vec2};

use crate::board::{Board, Mark, Pos, BOARD_SIZE, WIN_LENGTH};

use super::theme::*;

/// Board view handles rendering and input for the game grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// When `interactive` is false (not the human's turn, or the game
    /// is over) hover previews are suppressed and clicks are dropped.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        human: Mark,
        last_move: Option<Pos>,
        winning_run: Option<[Pos; WIN_LENGTH]>,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 8.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        self.draw_cells(&painter, winning_run);
        self.draw_glyphs(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        let mut clicked_pos = None;

        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if board.is_empty(board_pos) {
                        self.draw_hover_preview(&painter, board_pos, human);
                        if response.clicked() {
                            clicked_pos = Some(board_pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 6x6 cell backgrounds, winning cells in red
    fn draw_cells(&self, painter: &Painter, winning_run: Option<[Pos; WIN_LENGTH]>) {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let pos = Pos::new(x as u8, y as u8);
                let highlighted = winning_run
                    .map(|run| run.contains(&pos))
                    .unwrap_or(false);
                let fill = if highlighted { WIN_HIGHLIGHT } else { CELL_BG };
                painter.rect_filled(self.cell_rect(pos), CornerRadius::same(4), fill);
            }
        }
    }

    /// Draw all placed marks as text glyphs
    fn draw_glyphs(&self, painter: &Painter, board: &Board) {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let pos = Pos::new(x as u8, y as u8);
                match board.get(pos) {
                    Mark::X => self.draw_glyph(painter, pos, "X", X_GLYPH),
                    Mark::O => self.draw_glyph(painter, pos, "O", O_GLYPH),
                    Mark::Empty => {}
                }
            }
        }
    }

    fn draw_glyph(&self, painter: &Painter, pos: Pos, glyph: &str, color: egui::Color32) {
        painter.text(
            self.cell_rect(pos).center(),
            Align2::CENTER_CENTER,
            glyph,
            FontId::monospace(self.cell_size * GLYPH_SIZE_RATIO),
            color,
        );
    }

    /// Draw last move marker in the cell corner
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let center = rect.min + Vec2::splat(self.cell_size * 0.14);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw a faint glyph preview on the hovered empty cell
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, human: Mark) {
        painter.rect_filled(self.cell_rect(pos), CornerRadius::same(4), CELL_HOVER);

        let (glyph, color) = match human {
            Mark::X => ("X", X_GLYPH.gamma_multiply(0.4)),
            Mark::O => ("O", O_GLYPH.gamma_multiply(0.4)),
            Mark::Empty => return,
        };
        self.draw_glyph(painter, pos, glyph, color);
    }

    /// Screen rectangle of a cell, inset by the grid gap
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.x as f32 * self.cell_size,
                BOARD_MARGIN + pos.y as f32 * self.cell_size,
            );
        Rect::from_min_size(
            Pos2::new(min.x + CELL_GAP * 0.5, min.y + CELL_GAP * 0.5),
            Vec2::splat(self.cell_size - CELL_GAP),
        )
    }

    /// Convert screen coordinates to a board position
    fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let y = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(x, y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }
}
