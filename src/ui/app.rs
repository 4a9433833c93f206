//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::Mark;
use super::board_view::BoardView;
use super::game_state::{GameSession, GameStatus};
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    /// Active game; `None` until the player picks a symbol
    session: Option<GameSession>,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            session: None,
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn start_game(&mut self, human_mark: Mark) {
        self.session = Some(GameSession::new(human_mark));
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play X)").clicked() {
                        self.start_game(Mark::X);
                        ui.close_menu();
                    }
                    if ui.button("New Game (play O)").clicked() {
                        self.start_game(Mark::O);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Choose Symbol...").clicked() {
                        self.session = None;
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(session) = &self.session {
                        ui.label(format!("You: {}", session.human_mark));
                    }
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                let Some(session) = &self.session else {
                    Self::card_frame().show(ui, |ui| {
                        ui.label(
                            RichText::new("Pick your symbol to start")
                                .size(12.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                    return;
                };

                Self::render_turn_card(ui, session);
                ui.add_space(10.0);

                if self.show_debug {
                    Self::render_debug_card(ui, session);
                    ui.add_space(10.0);
                }

                if session.is_over() {
                    Self::render_game_over_card(ui, session);
                    ui.add_space(10.0);
                }

                if let Some(msg) = &session.message {
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X O").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(20.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(ui: &mut egui::Ui, session: &GameSession) {
        Self::card_frame().show(ui, |ui| {
            let mark = session.current_turn;
            let accent = if mark == Mark::X { X_MARK } else { O_MARK };

            ui.horizontal(|ui| {
                // Large symbol indicator
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(
                    rect.center(),
                    22.0,
                    egui::Color32::from_rgb(55, 57, 62),
                );
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    mark.to_string(),
                    egui::FontId::proportional(28.0),
                    accent,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = if mark == session.human_mark { "YOU" } else { "COMPUTER" };
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if session.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if session.is_human_turn() {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("Computer's turn", STATUS_WAIT)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render debug card
    fn render_debug_card(ui: &mut egui::Ui, session: &GameSession) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &session.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("Score: {}", result.score))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });

                    if let Some(pos) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("-> row {}, col {}", pos.row, pos.col))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(ui: &mut egui::Ui, session: &GameSession) {
        let (headline, accent) = match session.status {
            GameStatus::HumanWon => ("You won!", WIN_HIGHLIGHT),
            GameStatus::ComputerWon => ("The computer won!", STATUS_LOST),
            GameStatus::Draw => ("It's a draw!", STATUS_WAIT),
            GameStatus::InProgress => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(accent));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} moves", session.move_history.len()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the symbol chooser shown before a game starts
    fn render_symbol_prompt(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.label(
                    RichText::new("Would you like to play as X's or O's?")
                        .size(20.0)
                        .color(TEXT_PRIMARY),
                );
                ui.add_space(6.0);
                ui.label(
                    RichText::new("X always moves first")
                        .size(12.0)
                        .color(TEXT_MUTED),
                );
                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    ui.add_space(ui.available_width() / 2.0 - 90.0);
                    if ui.add_sized([80.0, 40.0], egui::Button::new(RichText::new("X").size(22.0))).clicked() {
                        self.start_game(Mark::X);
                    }
                    ui.add_space(12.0);
                    if ui.add_sized([80.0, 40.0], egui::Button::new(RichText::new("O").size(22.0))).clicked() {
                        self.start_game(Mark::O);
                    }
                });
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let Some(session) = &mut self.session else {
                return;
            };

            let clicked = self.board_view.show(
                ui,
                &session.board,
                session.human_mark,
                session.board.last_move(),
                session.winning_line,
                session.is_human_turn(),
            );

            // Handle click
            if let Some(pos) = clicked {
                if let Err(msg) = session.try_place(pos) {
                    session.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game with the same symbol
            if i.key_pressed(egui::Key::N) {
                if let Some(session) = &mut self.session {
                    session.reset();
                }
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The computer replies within the same frame; the search is tiny
        if let Some(session) = &mut self.session {
            session.play_computer_move();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);

        if self.session.is_some() {
            self.render_board(ctx);
        } else {
            self.render_symbol_prompt(ctx);
        }
    }
}
