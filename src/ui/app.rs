//! Main application for the connect-five GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Stone;
use crate::config::GameConfig;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Main connect-five application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_config(&GameConfig::default())
    }
}

fn stone_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "BLACK",
        Stone::White => "WHITE",
        Stone::Empty => "-",
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Redo (R)").clicked() {
                        self.state.redo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Save (S)").clicked() {
                        self.state.quick_save();
                        ui.close_menu();
                    }
                    if ui.button("Load (L)").clicked() {
                        self.state.quick_load();
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    let mut vs_ai = self.state.vs_ai;
                    if ui.checkbox(&mut vs_ai, "Play against AI (A)").changed() {
                        self.state.toggle_ai();
                    }
                    if ui.button("Switch AI side (P)").clicked() {
                        self.state.switch_ai_player();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = if self.state.vs_ai {
                        format!(
                            "AI: {} (depth {})",
                            stone_name(self.state.ai_player),
                            self.state.ai_depth()
                        )
                    } else {
                        "Two players".to_string()
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
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

                self.render_ai_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("CONNECT FIVE").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let size = self.state.board.size();
            ui.label(RichText::new(format!("{size} x {size}")).size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_player == Stone::Black;
            let (fill, text_color) = if is_black {
                (BLACK_STONE, TEXT_PRIMARY)
            } else {
                (WHITE_STONE, BLACK_STONE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    if is_black { "X" } else { "O" },
                    egui::FontId::proportional(22.0),
                    text_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(stone_name(self.state.current_player))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        let secs = self.state.ai_thinking_elapsed().map_or(0.0, |d| d.as_secs_f32());
                        (format!("AI thinking... {secs:.1}s"), STATUS_BUSY)
                    } else if self.state.game_over {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        ("To move".to_string(), STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render AI settings card
    fn render_ai_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let mode = if self.state.vs_ai { "On" } else { "Off" };
            ui.label(RichText::new(format!("Mode: {mode}")).size(12.0).color(TEXT_PRIMARY));
            ui.label(
                RichText::new(format!("Plays: {}", stone_name(self.state.ai_player)))
                    .size(12.0)
                    .color(TEXT_SECONDARY),
            );

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Depth: {}", self.state.ai_depth()))
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                );
                if ui.small_button("-").clicked() {
                    self.state.decrease_depth();
                }
                if ui.small_button("+").clicked() {
                    self.state.increase_depth();
                }
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);
            let button = |ui: &mut egui::Ui, text: &str| {
                btn_frame
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    })
                    .inner
            };

            ui.horizontal(|ui| {
                if button(ui, "Undo") {
                    self.state.undo();
                }
                if button(ui, "Redo") {
                    self.state.redo();
                }
                if button(ui, "New") {
                    self.state.new_game();
                }
            });
            ui.horizontal(|ui| {
                if button(ui, "Save") {
                    self.state.quick_save();
                }
                if button(ui, "Load") {
                    self.state.quick_load();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.board.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(format!("{:?}", result.search_type))
                    .size(11.0)
                    .strong()
                    .color(STATUS_OK),
            );
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("{}ms, {} nodes", result.time_ms, result.nodes))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
            if let Some(engine) = self.state.engine() {
                let tt = engine.tt_stats();
                let (evals, killers, history) = engine.cache_sizes();
                ui.label(
                    RichText::new(format!(
                        "TT {} ({:.0}% hits), eval {evals}, killers {killers}, history {history}",
                        tt.used,
                        tt.hit_rate()
                    ))
                    .size(10.0)
                    .color(TEXT_MUTED),
                );
            }
            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("-> ({}, {})", pos.x, pos.y))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match &self.state.winner {
            Some(win) => format!("{} WINS!", stone_name(win.winner)),
            None => "DRAW".to_string(),
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(WIN_HIGHLIGHT));
                    if let Some(line) = self.state.winning_line() {
                        ui.label(
                            RichText::new(format!("{} in a row", line.len()))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    }
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.state.new_game();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG))
            .show(ctx, |ui| {
                let accept_input =
                    !self.state.game_over && !self.state.is_ai_turn() && !self.state.is_ai_thinking();
                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.current_player,
                    self.state.winning_line(),
                    accept_input,
                );

                if let Some(pos) = clicked {
                    if let Err(msg) = self.state.try_place_stone(pos) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let keys = ctx.input(|i| {
            [
                egui::Key::Escape,
                egui::Key::D,
                egui::Key::U,
                egui::Key::R,
                egui::Key::N,
                egui::Key::A,
                egui::Key::P,
                egui::Key::S,
                egui::Key::L,
                egui::Key::Plus,
                egui::Key::Equals,
                egui::Key::Minus,
            ]
            .into_iter()
            .filter(|k| i.key_pressed(*k))
            .collect::<Vec<_>>()
        });

        for key in keys {
            match key {
                egui::Key::Escape => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                egui::Key::D => self.show_debug = !self.show_debug,
                egui::Key::U => self.state.undo(),
                egui::Key::R => self.state.redo(),
                egui::Key::N => self.state.new_game(),
                egui::Key::A => self.state.toggle_ai(),
                egui::Key::P => self.state.switch_ai_player(),
                egui::Key::S => self.state.quick_save(),
                egui::Key::L => self.state.quick_load(),
                egui::Key::Plus | egui::Key::Equals => self.state.increase_depth(),
                egui::Key::Minus => self.state.decrease_depth(),
                _ => {}
            }
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
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
