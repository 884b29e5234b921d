use common::games::snake::{
    classify_gesture, Direction, Intent, Point, Rgb, SessionPhase, SnakeFrame, ThemeKind,
};
use common::leaderboard::LeaderboardKind;
use eframe::egui;

use crate::colors::{to_color32, BACKGROUND};
use crate::state::ClientCommand;
use crate::CommandSender;

pub struct SnakeGameUi {
    cell_size: f32,
    drag_delta: egui::Vec2,
}

impl SnakeGameUi {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            drag_delta: egui::Vec2::ZERO,
        }
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        frame: Option<&SnakeFrame>,
        board_cells: (usize, usize),
        command_sender: &CommandSender,
    ) {
        let phase = frame.map(|f| f.phase);
        for intent in self.handle_keyboard(ctx) {
            command_sender.send(ClientCommand::Game(intent));
        }

        ui.vertical_centered(|ui| {
            self.render_hud(ui, frame);
            ui.add_space(6.0);

            let response = self.render_board(ui, frame, board_cells);
            if let Some(intent) = self.handle_gesture(&response) {
                command_sender.send(ClientCommand::Game(intent));
            }

            ui.add_space(8.0);
            for intent in self.render_pad(ui, phase) {
                command_sender.send(ClientCommand::Game(intent));
            }
        });
    }

    fn handle_keyboard(&self, ctx: &egui::Context) -> Vec<Intent> {
        // Typing a name must not steer the snake.
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }
        ctx.input(|i| {
            let mut intents = Vec::new();
            if i.key_pressed(egui::Key::Escape) {
                intents.push(Intent::Reset);
                return intents;
            }
            if i.key_pressed(egui::Key::Space) {
                intents.push(Intent::Start);
            }
            if i.key_pressed(egui::Key::P) {
                intents.push(Intent::PauseToggle);
            }

            let direction = if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(Direction::Right)
            } else {
                None
            };
            if let Some(direction) = direction {
                intents.push(Intent::SetDirection(direction));
            }
            intents
        })
    }

    /// Clicks are taps; drags are classified once released.
    fn handle_gesture(&mut self, response: &egui::Response) -> Option<Intent> {
        if response.drag_started() {
            self.drag_delta = egui::Vec2::ZERO;
        }
        if response.dragged() {
            self.drag_delta += response.drag_delta();
        }
        if response.drag_stopped() {
            let delta = std::mem::replace(&mut self.drag_delta, egui::Vec2::ZERO);
            return Some(classify_gesture(delta.x, delta.y));
        }
        if response.clicked() {
            return Some(Intent::Start);
        }
        None
    }

    fn render_hud(&self, ui: &mut egui::Ui, frame: Option<&SnakeFrame>) {
        let Some(frame) = frame else {
            ui.heading("Grid Snake");
            return;
        };
        let title = to_color32(frame.theme.palette().title);
        ui.heading(egui::RichText::new(format!("{} - level {}", frame.player, frame.level)).color(title));
        ui.label(format!(
            "Score: {}   Food: {}   Time: {:.1}s   Speed: {}",
            frame.score,
            frame.foods_eaten,
            frame.elapsed.as_secs_f64(),
            frame.speed
        ));
    }

    fn render_board(
        &self,
        ui: &mut egui::Ui,
        frame: Option<&SnakeFrame>,
        board_cells: (usize, usize),
    ) -> egui::Response {
        let (columns, rows) = frame
            .map(|f| (f.field_size.width, f.field_size.height))
            .unwrap_or(board_cells);
        let cell = self.cell_size;
        let size = egui::vec2(columns as f32 * cell, rows as f32 * cell);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let rect = response.rect;

        let palette = frame.map(|f| f.theme).unwrap_or(ThemeKind::Classic).palette();
        let grid_stroke = egui::Stroke::new(1.0, to_color32(palette.grid));
        let frame_stroke = egui::Stroke::new(2.0, to_color32(palette.frame));

        painter.rect_filled(rect, 0.0, BACKGROUND);
        for column in 0..=columns {
            let x = rect.min.x + column as f32 * cell;
            painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], grid_stroke);
        }
        for row in 0..=rows {
            let y = rect.min.y + row as f32 * cell;
            painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], grid_stroke);
        }
        painter.rect_stroke(rect.shrink(1.0), 0.0, frame_stroke, egui::StrokeKind::Inside);

        let cell_rect = |point: &Point| {
            egui::Rect::from_min_size(
                rect.min + egui::vec2(point.x as f32 * cell, point.y as f32 * cell),
                egui::vec2(cell, cell),
            )
        };

        let Some(frame) = frame else {
            self.render_overlay(&painter, rect, "Enter your name and press Start", palette.title);
            return response;
        };

        for obstacle in &frame.obstacles {
            painter.rect_stroke(
                cell_rect(obstacle).shrink(2.0),
                0.0,
                frame_stroke,
                egui::StrokeKind::Inside,
            );
        }
        for segment in &frame.snake {
            painter.rect_filled(cell_rect(segment), 0.0, to_color32(palette.snake));
        }
        if let Some(food) = &frame.food {
            painter.rect_filled(cell_rect(food), 0.0, to_color32(palette.food));
        }

        if let Some(text) = overlay_text(frame) {
            self.render_overlay(&painter, rect, &text, palette.title);
        }

        response
    }

    fn render_overlay(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        text: &str,
        color: Rgb,
    ) {
        painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(160));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::monospace(16.0),
            to_color32(color),
        );
    }

    /// On-screen pad. A direction press on the ready screen also starts the game.
    fn render_pad(&self, ui: &mut egui::Ui, phase: Option<SessionPhase>) -> Vec<Intent> {
        let button_size = egui::vec2(44.0, 32.0);
        let indent = |ui: &mut egui::Ui| {
            ui.add_space(((ui.available_width() - button_size.x * 3.0) / 2.0).max(0.0));
        };
        let mut pressed = None;
        let mut pause = false;

        ui.horizontal(|ui| {
            indent(ui);
            ui.add_space(button_size.x);
            if ui.add_sized(button_size, egui::Button::new("▲")).clicked() {
                pressed = Some(Direction::Up);
            }
        });
        ui.horizontal(|ui| {
            indent(ui);
            if ui.add_sized(button_size, egui::Button::new("◀")).clicked() {
                pressed = Some(Direction::Left);
            }
            if ui.add_sized(button_size, egui::Button::new("⏸")).clicked() {
                pause = true;
            }
            if ui.add_sized(button_size, egui::Button::new("▶")).clicked() {
                pressed = Some(Direction::Right);
            }
        });
        ui.horizontal(|ui| {
            indent(ui);
            ui.add_space(button_size.x);
            if ui.add_sized(button_size, egui::Button::new("▼")).clicked() {
                pressed = Some(Direction::Down);
            }
        });

        pad_intents(phase, pressed, pause)
    }
}

fn pad_intents(
    phase: Option<SessionPhase>,
    pressed: Option<Direction>,
    pause: bool,
) -> Vec<Intent> {
    let mut intents = Vec::new();
    if pause {
        intents.push(Intent::PauseToggle);
    }
    if let Some(direction) = pressed {
        if phase == Some(SessionPhase::Ready) {
            intents.push(Intent::Start);
        }
        intents.push(Intent::SetDirection(direction));
    }
    intents
}

fn overlay_text(frame: &SnakeFrame) -> Option<String> {
    match frame.phase {
        SessionPhase::Ready => Some("Press Space to begin".to_string()),
        SessionPhase::Paused => Some("PAUSED (P to continue)".to_string()),
        SessionPhase::Running => None,
        SessionPhase::Over => {
            let summary = frame.summary.as_ref()?;
            Some(format!(
                "GAME OVER\nPlayer: {}\nLevel: {}\nDuration: {} | Points: {}\n\nSpace: play again · Esc: reset",
                summary.player,
                summary.level,
                LeaderboardKind::Durations.format_value(summary.duration.as_secs_f64()),
                summary.score
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_press_on_ready_screen_starts_game() {
        assert_eq!(
            pad_intents(Some(SessionPhase::Ready), Some(Direction::Up), false),
            vec![Intent::Start, Intent::SetDirection(Direction::Up)]
        );
    }

    #[test]
    fn test_pad_press_while_running_only_turns() {
        assert_eq!(
            pad_intents(Some(SessionPhase::Running), Some(Direction::Left), false),
            vec![Intent::SetDirection(Direction::Left)]
        );
        assert_eq!(pad_intents(None, None, true), vec![Intent::PauseToggle]);
    }
}
