//! Main application for the quadline GUI

use eframe::egui;
use egui::{CentralPanel, Context, RichText, TopBottomPanel};

use crate::board::Mark;
use crate::session::{GameSession, Outcome};

use super::board_view::BoardView;
use super::theme::*;

/// Which screen is showing, mirroring the title/game scene split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Title,
    Game,
}

/// Main quadline application
pub struct QuadlineApp {
    screen: Screen,
    automated_first: bool,
    session: GameSession,
    board_view: BoardView,
}

impl Default for QuadlineApp {
    fn default() -> Self {
        Self {
            screen: Screen::Title,
            automated_first: false,
            session: GameSession::new(false),
            board_view: BoardView::default(),
        }
    }
}

impl QuadlineApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn start_game(&mut self) {
        self.session = GameSession::new(self.automated_first);
        self.screen = Screen::Game;
    }

    /// Render the title screen: game name, first-player option, start
    fn render_title(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("QUADLINE").size(42.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("four in a row on a 6x6 board").size(14.0).color(TEXT_MUTED));
                ui.add_space(24.0);

                ui.checkbox(&mut self.automated_first, "Opponent moves first");
                ui.add_space(16.0);

                if ui
                    .button(RichText::new("  Start  ").size(18.0))
                    .clicked()
                {
                    self.start_game();
                }
            });
        });
    }

    /// Render the status line above the board
    fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                match self.session.outcome() {
                    Some(Outcome::HumanWin) => {
                        ui.label(RichText::new("YOU WON").size(20.0).strong().color(BANNER_WIN));
                    }
                    Some(Outcome::HumanLoss) => {
                        ui.label(RichText::new("YOU LOSE").size(20.0).strong().color(BANNER_LOSS));
                    }
                    Some(Outcome::Draw) => {
                        ui.label(RichText::new("DRAW").size(20.0).strong().color(BANNER_DRAW));
                    }
                    None => {
                        let glyph = match self.session.human_mark() {
                            Mark::X => "X",
                            _ => "O",
                        };
                        ui.label(
                            RichText::new(format!("Your turn: you play {}", glyph))
                                .size(16.0)
                                .color(TEXT_PRIMARY),
                        );
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.screen = Screen::Title;
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    /// Render the board and forward gated clicks to the session
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            // Input gating: forward clicks only while the session
            // accepts input and it is the human's turn
            let interactive = self.session.accepts_input()
                && self.session.turn() == self.session.human_mark();

            ui.vertical_centered(|ui| {
                let clicked = self.board_view.show(
                    ui,
                    self.session.board(),
                    self.session.human_mark(),
                    self.session.last_move(),
                    self.session.winning_run(),
                    interactive,
                );

                if let Some(pos) = clicked {
                    let mark = self.session.human_mark();
                    self.session.apply_move(pos, mark);
                }
            });
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - back to the title screen for a new game
            if i.key_pressed(egui::Key::N) {
                self.screen = Screen::Title;
            }
        });
    }
}

impl eframe::App for QuadlineApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::Title => self.render_title(ctx),
            Screen::Game => {
                self.handle_input(ctx);
                self.render_status_bar(ctx);
                self.render_board(ctx);
            }
        }
    }
}
