//! Board rendering for the GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::effects::SkillEffect;
use super::theme::*;
use crate::config::UiConfig;
use crate::game::{GameState, InteractionMode};
use crate::{Player, Pos, BOARD_SIZE};

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
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Validity shown on hover is only a hint; the engine decides.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &GameState,
        effect: Option<&SkillEffect>,
        config: &UiConfig,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, state);

        if let Some(fx) = effect {
            if fx.shows_removed_stone(config.removal_delay) {
                self.draw_stone(&painter, fx.effect.target, fx.owner);
            }
        }

        if let Some(pos) = state.last_move() {
            if state.cell(pos).is_some() {
                self.draw_last_move_marker(&painter, pos);
            }
        }

        if let Some(line) = state.winning_line() {
            self.draw_winning_line(&painter, line);
        }

        if let InteractionMode::SkillTargeting(_) = state.mode() {
            self.draw_targets(&painter, state);
        }

        if let Some(fx) = effect {
            self.draw_burst(&painter, fx, config);
        }

        if state.phase().is_terminal() {
            return None;
        }

        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;
        let player = state.current_player();
        match state.mode() {
            InteractionMode::Normal => {
                let is_valid = state.cell(board_pos).is_none();
                self.draw_hover_preview(&painter, board_pos, player, is_valid);
            }
            InteractionMode::SkillTargeting(_) => {
                let is_target = state.cell(board_pos) == Some(player.opponent());
                self.draw_target_hover(&painter, board_pos, is_target);
            }
        }

        // Let the engine reject invalid clicks so the reason reaches the panel
        response.clicked().then_some(board_pos)
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-O, 1-15)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..BOARD_SIZE {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            let pos = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let pos = Pos2::new(x, self.board_rect.max.y - 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..BOARD_SIZE {
            let num = BOARD_SIZE - row;
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let pos = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), GRID_LINE);

            let pos = Pos2::new(self.board_rect.max.x - 12.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, state: &GameState) {
        for pos in Pos::all() {
            if let Some(player) = state.cell(pos) {
                self.draw_stone(painter, pos, player);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match player {
            Player::First => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Player::Second => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Ring every stone the current player may remove
    fn draw_targets(&self, painter: &Painter, state: &GameState) {
        let opponent = state.current_player().opponent();
        let stroke = Stroke::new(2.0, TARGET_RING);
        for pos in state.board().stones(opponent).iter_ones() {
            let center = self.board_to_screen(pos);
            painter.circle_stroke(center, self.cell_size * STONE_RADIUS_RATIO + 2.0, stroke);
        }
    }

    /// Shock rings, fading core and the skill name above the target
    fn draw_burst(&self, painter: &Painter, fx: &SkillEffect, config: &UiConfig) {
        let t = fx.progress(config.effect_duration);
        let fade = 1.0 - t;
        let center = self.board_to_screen(fx.effect.target);
        let cell = self.cell_size;

        let wave = cell * 1.5 * t;
        painter.circle_stroke(center, wave, Stroke::new(3.0, BURST_OUTER.gamma_multiply(fade)));
        painter.circle_stroke(center, wave * 0.7, Stroke::new(2.0, BURST_MIDDLE.gamma_multiply(fade)));

        painter.circle_filled(center, cell * 0.5 * (1.0 + t * 0.5), BURST_OUTER.gamma_multiply(fade * 0.8));
        painter.circle_filled(center, cell * 0.35 * (1.0 + t * 0.3), BURST_MIDDLE.gamma_multiply(fade * 0.6));
        painter.circle_filled(center, cell * 0.2 * (1.0 + t * 0.2), BURST_CORE.gamma_multiply(fade * 0.9));

        painter.text(
            center - Vec2::new(0.0, cell * 1.5),
            egui::Align2::CENTER_CENTER,
            fx.effect.kind.name(),
            egui::FontId::proportional(14.0 * (1.0 + t * 0.3)),
            Color32::WHITE.gamma_multiply(fade),
        );
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, player: Player, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = match (is_valid, player) {
            (true, Player::First) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            (true, Player::Second) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            (false, _) => hover_invalid(),
        };

        painter.circle_filled(center, radius, color);
    }

    fn draw_target_hover(&self, painter: &Painter, pos: Pos, is_target: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let color = if is_target { target_hover() } else { hover_invalid() };
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        Pos::try_new(y.floor() as i32, x.floor() as i32)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
