use common::games::snake::Intent;
use common::leaderboard::{LeaderboardKind, ScoreEntry};
use eframe::egui;

use crate::state::{ClientCommand, SharedState};
use crate::CommandSender;

use super::game::SnakeGameUi;

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    game_ui: SnakeGameUi,
    board_cells: (usize, usize),
    name_input: String,
    leaderboard_tab: LeaderboardKind,
    shutdown_sent: bool,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        player_name: String,
        board_cells: (usize, usize),
        cell_size: f32,
        leaderboard_tab: LeaderboardKind,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            game_ui: SnakeGameUi::new(cell_size),
            board_cells,
            name_input: player_name,
            leaderboard_tab,
            shutdown_sent: false,
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Player");
        ui.add(
            egui::TextEdit::singleline(&mut self.name_input)
                .char_limit(common::player_name::MAX_PLAYER_NAME_CHARS)
                .hint_text("Player"),
        );
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.button("▶ Start").clicked() {
                // Always a fresh game on the ready screen, even mid-run.
                self.command_sender
                    .send(ClientCommand::SetPlayerName(self.name_input.clone()));
                self.command_sender.send(ClientCommand::NewGame);
            }
            if ui.button("⏸ Pause").clicked() {
                self.command_sender.send(ClientCommand::Game(Intent::PauseToggle));
            }
            if ui.button("⟲ Reset").clicked() {
                self.command_sender.send(ClientCommand::Game(Intent::Reset));
            }
        });
        ui.label(
            egui::RichText::new("Arrows/WASD turn · Space start · P pause · Esc reset")
                .small()
                .color(egui::Color32::GRAY),
        );
    }

    fn render_leaderboard(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.heading("Top 10");
        let mut tab_changed = false;
        ui.horizontal(|ui| {
            for kind in LeaderboardKind::ALL {
                tab_changed |= ui
                    .selectable_value(&mut self.leaderboard_tab, kind, kind.title())
                    .changed();
            }
        });
        if tab_changed {
            self.command_sender.send(ClientCommand::RefreshLeaderboard);
        }

        let entries = self.shared_state.get_leaderboard(self.leaderboard_tab);
        if entries.is_empty() {
            ui.label(
                egui::RichText::new("No games yet")
                    .italics()
                    .color(egui::Color32::GRAY),
            );
            return;
        }

        egui::Grid::new("leaderboard_grid")
            .striped(true)
            .num_columns(2)
            .show(ui, |ui| {
                for (index, entry) in entries.iter().enumerate() {
                    ui.monospace(leaderboard_row_label(index, entry));
                    ui.monospace(self.leaderboard_tab.format_value(entry.value));
                    ui.end_row();
                }
            });
    }

    fn render_event_log(&self, ui: &mut egui::Ui) {
        ui.separator();
        ui.heading("Events");
        let events = self.shared_state.get_events();
        if events.is_empty() {
            ui.label(
                egui::RichText::new("Nothing yet...")
                    .italics()
                    .color(egui::Color32::GRAY),
            );
        }
        for event in events {
            ui.label(event);
        }
    }
}

fn leaderboard_row_label(index: usize, entry: &ScoreEntry) -> String {
    format!("{:>2}. {}", index + 1, entry.player)
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.shutdown_sent {
            self.command_sender.send(ClientCommand::Shutdown);
            self.shutdown_sent = true;
        }

        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.shared_state.clear_error();
                    }
                });
        }

        egui::SidePanel::right("side_panel")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                self.render_controls(ui);
                self.render_leaderboard(ui);
                self.render_event_log(ui);
            });

        let frame = self.shared_state.get_frame();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.game_ui.render_game(
                ui,
                ctx,
                frame.as_ref(),
                self.board_cells,
                &self.command_sender,
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_row_label_pads_rank() {
        let entry = ScoreEntry {
            player: "Ann".to_string(),
            value: 12.0,
        };
        assert_eq!(leaderboard_row_label(0, &entry), " 1. Ann");
        assert_eq!(leaderboard_row_label(9, &entry), "10. Ann");
    }
}
