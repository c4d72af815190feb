//! Main application for the Caro GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardSnapshot, BoardView};
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;
use crate::board::Mark;
use crate::config::{AiLevel, EngineConfig};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Playing,
}

/// Key presses collected for one frame
#[derive(Debug, Default)]
struct Shortcuts {
    restart: bool,
    toggle_mode: bool,
    level: Option<AiLevel>,
    piece: Option<Mark>,
    hint: bool,
    debug: bool,
}

/// Main Caro application
pub struct CaroApp {
    state: GameState,
    board_view: BoardView,
    screen: Screen,
    show_debug: bool,
}

impl CaroApp {
    /// Create the app on its start menu
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Self {
        Self {
            state: GameState::new(GameMode::default(), config),
            board_view: BoardView::default(),
            screen: Screen::Menu,
            show_debug: false,
        }
    }

    fn start_game(&mut self, mode: GameMode) {
        let config = *self.state.config();
        self.state = GameState::new(mode, config);
        self.state.reset();
        self.screen = Screen::Playing;
    }

    /// Render the start menu
    fn render_start_menu(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.25);
                    ui.label(RichText::new("CARO").size(48.0).strong().color(CROSS_COLOR));
                    ui.label(RichText::new("Five in a row on a 10x10 board").size(14.0).color(CIRCLE_COLOR));
                    ui.add_space(32.0);

                    let button = |text: &str| {
                        egui::Button::new(RichText::new(text).size(18.0).color(TEXT_PRIMARY))
                            .fill(GRID_LINE)
                            .corner_radius(CornerRadius::same(8))
                            .min_size(Vec2::new(220.0, 44.0))
                    };

                    if ui.add(button("Play vs Human")).clicked() {
                        self.start_game(GameMode::PvP);
                    }
                    ui.add_space(10.0);
                    if ui.add(button("Play vs AI")).clicked() {
                        let human = self.state.human_piece();
                        self.start_game(GameMode::PvE { human });
                    }
                    ui.add_space(10.0);
                    if ui.add(button("Quit")).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (R)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Toggle PvP / PvE (G)").clicked() {
                        self.state.toggle_mode();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Play as X").clicked() {
                        self.state.set_human_piece(Mark::Cross);
                        ui.close_menu();
                    }
                    if ui.button("Play as O").clicked() {
                        self.state.set_human_piece(Mark::Circle);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Main Menu").clicked() {
                        self.screen = Screen::Menu;
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    for level in [AiLevel::Random, AiLevel::Minimax] {
                        let selected = self.state.config().level == level;
                        if ui.radio(selected, level.name()).clicked() {
                            self.state.set_level(level);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {}", human.symbol()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
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
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("CARO").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_ai_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
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

    fn mark_color(mark: Mark) -> egui::Color32 {
        match mark {
            Mark::Cross => CROSS_COLOR,
            Mark::Circle => CIRCLE_COLOR,
            Mark::Empty => TEXT_MUTED,
        }
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let mark = self.state.current_turn;
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(44.0, 44.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, CornerRadius::same(6), BOARD_BG);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    mark.symbol(),
                    egui::FontId::proportional(28.0),
                    Self::mark_color(mark),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("{} to move", mark.symbol()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI's turn", TIMER_WARNING)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Turn {}  -  your moves {}",
                    self.state.turn_count, self.state.human_moves
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render AI card
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let config = self.state.config();
            ui.label(
                RichText::new(format!("{} (depth {})", config.level.name(), config.max_depth))
                    .size(14.0)
                    .color(TEXT_PRIMARY),
            );

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(20.0)
                        .strong()
                        .color(TIMER_WARNING),
                );
            } else if let Some(result) = &self.state.last_ai_result {
                ui.label(
                    RichText::new(format!("Last move: {}ms", result.time_ms))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Restart (R)").clicked() {
                    self.state.reset();
                }
                if self.state.mode == GameMode::PvP && ui.button("Hint (H)").clicked() {
                    self.state.request_hint();
                }
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Play X").clicked() {
                    self.state.set_human_piece(Mark::Cross);
                }
                if ui.button("Play O").clicked() {
                    self.state.set_human_piece(Mark::Circle);
                }
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new("G mode  0/1 level  D debug")
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.label(
                        RichText::new(result.search_type.label())
                            .size(11.0)
                            .strong()
                            .color(TIMER_NORMAL),
                    );
                    ui.label(
                        RichText::new(format!("Score: {}", result.score))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                    if let Some(pos) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("-> {pos}"))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    match result.winner {
                        Some(mark) => {
                            ui.label(
                                RichText::new(format!("{} WINS!", mark.symbol()))
                                    .size(22.0)
                                    .strong()
                                    .color(Self::mark_color(mark)),
                            );
                        }
                        None => {
                            ui.label(RichText::new("DRAW").size(22.0).strong().color(TEXT_PRIMARY));
                        }
                    }

                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
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

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let snapshot = BoardSnapshot {
                board: &self.state.board,
                current_turn: self.state.current_turn,
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                winning_line: self.state.game_over.and_then(|r| r.winning_line),
                accepts_input: self.state.game_over.is_none()
                    && self.state.is_human_turn()
                    && !self.state.is_ai_thinking(),
            };

            let clicked = self.board_view.show(ui, &snapshot);

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place_mark(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let keys = ctx.input(|i| Shortcuts {
            restart: i.key_pressed(egui::Key::R),
            toggle_mode: i.key_pressed(egui::Key::G),
            level: if i.key_pressed(egui::Key::Num0) {
                Some(AiLevel::Random)
            } else if i.key_pressed(egui::Key::Num1) {
                Some(AiLevel::Minimax)
            } else {
                None
            },
            piece: if i.key_pressed(egui::Key::X) {
                Some(Mark::Cross)
            } else if i.key_pressed(egui::Key::O) {
                Some(Mark::Circle)
            } else {
                None
            },
            hint: i.key_pressed(egui::Key::H),
            debug: i.key_pressed(egui::Key::D),
        });

        if keys.restart {
            self.state.reset();
        }
        if keys.toggle_mode {
            self.state.toggle_mode();
        }
        if let Some(level) = keys.level {
            self.state.set_level(level);
        }
        if let Some(mark) = keys.piece {
            self.state.set_human_piece(mark);
        }
        if keys.hint {
            self.state.request_hint();
        }
        if keys.debug {
            self.show_debug = !self.show_debug;
        }
    }
}

impl eframe::App for CaroApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.screen == Screen::Menu {
            self.render_start_menu(ctx);
            return;
        }

        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
