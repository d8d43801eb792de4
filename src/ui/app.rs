//! Main application for the GUI
//!
//! The app is a collaborator of [`GameEngine`]: it turns clicks and keys into
//! intents, draws the engine's state and plays the skill animation off the
//! returned events.

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::warn;

use super::board_view::BoardView;
use super::effects::SkillEffect;
use super::theme::*;
use crate::config::UiConfig;
use crate::error::Rejection;
use crate::game::{GameEvent, GamePhase, InteractionMode};
use crate::{GameEngine, Player, SkillKind};

/// Main application
pub struct SkillGomokuApp {
    engine: GameEngine,
    board_view: BoardView,
    config: UiConfig,
    effect: Option<SkillEffect>,
    message: Option<String>,
}

impl SkillGomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: UiConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            board_view: BoardView::default(),
            config,
            effect: None,
            message: None,
        }
    }

    /// Feed an engine result into the presentation state
    fn handle(&mut self, result: Result<Vec<GameEvent>, Rejection>) {
        let events = match result {
            Ok(events) => events,
            Err(rejection) => {
                warn!(%rejection, "intent rejected");
                self.message = Some(rejection.to_string());
                return;
            }
        };

        self.message = None;
        for event in events {
            match event {
                GameEvent::StoneRemoved { owner, .. } => {
                    if let Some(pending) = self.engine.state().pending_effect() {
                        self.effect = Some(SkillEffect::new(pending, owner));
                    }
                }
                GameEvent::GameReset => self.effect = None,
                _ => {}
            }
        }
    }

    fn new_game(&mut self) {
        let result = self.engine.reset();
        self.handle(result);
    }

    fn activate(&mut self, kind: SkillKind) {
        let result = self.engine.activate_skill(kind);
        self.handle(result);
    }

    fn cancel(&mut self) {
        let result = self.engine.cancel_skill();
        self.handle(result);
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Move #{}", self.engine.state().move_count()));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_skills_card(ui);

                if self.engine.state().phase().is_terminal() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("SKILL GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let state = self.engine.state();
        Self::card_frame().show(ui, |ui| {
            let player = state.current_player();
            let (accent, glyph_color) = match player {
                Player::First => (egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                Player::Second => (egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    player.symbol(),
                    egui::FontId::proportional(28.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let color = match state.mode() {
                        InteractionMode::SkillTargeting(_) => STATUS_WARNING,
                        InteractionMode::Normal => STATUS_OK,
                    };
                    ui.label(RichText::new(state.status_line()).size(12.0).color(color));
                });
            });
        });
    }

    fn render_skills_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SKILLS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for player in Player::ALL {
                let charges = self.engine.state().charges(player);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.symbol()).size(16.0).color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!("charges: {}", charges))
                            .size(12.0)
                            .color(if charges > 0 { TEXT_PRIMARY } else { TEXT_MUTED }),
                    );
                });
            }
            ui.add_space(8.0);

            let state = self.engine.state();
            let buttons = [(SkillKind::RemoveStone, "S"), (SkillKind::ExtraTurn, "E")]
                .map(|(kind, key)| (kind, key, state.can_activate_skill(kind)));
            let targeting = matches!(state.mode(), InteractionMode::SkillTargeting(_));

            ui.horizontal(|ui| {
                for (kind, key, can_activate) in buttons {
                    let button = egui::Button::new(RichText::new(format!("{} ({})", kind.name(), key)).size(12.0))
                        .fill(BUTTON_BG);
                    if ui.add_enabled(can_activate, button).clicked() {
                        self.activate(kind);
                    }
                }
            });

            if targeting {
                ui.add_space(4.0);
                if ui.button(RichText::new("Cancel (Esc)").size(12.0)).clicked() {
                    self.cancel();
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.engine.state().phase() {
            GamePhase::Won(winner) => format!("{} {} WINS!", winner.symbol(), winner.name().to_uppercase()),
            GamePhase::Draw => "DRAW".to_string(),
            GamePhase::Playing => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.new_game();
                    }
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let clicked = self.board_view.show(
                ui,
                self.engine.state(),
                self.effect.as_ref(),
                &self.config,
            );

            if let Some(pos) = clicked {
                let result = self.engine.select_cell(pos.row as i32, pos.col as i32);
                self.handle(result);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (reset, remove, extra, cancel) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::E),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if reset {
            self.new_game();
        }
        if remove {
            self.activate(SkillKind::RemoveStone);
        }
        if extra {
            self.activate(SkillKind::ExtraTurn);
        }
        if cancel {
            self.cancel();
        }
    }

    /// Drop a finished animation and let the engine clear its advisory effect
    fn settle_effect(&mut self) {
        let finished = self
            .effect
            .is_some_and(|fx| fx.is_complete(self.config.effect_duration));
        if finished {
            self.effect = None;
            // A move made during the animation may already have cleared it
            if self.engine.state().pending_effect().is_some() {
                let result = self.engine.dismiss_effect();
                self.handle(result);
            }
        }
    }
}

impl eframe::App for SkillGomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.settle_effect();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.effect.is_some() {
            ctx.request_repaint();
        }
    }
}
