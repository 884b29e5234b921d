use std::time::Duration;

use tokio::time::Instant;

use crate::player_name::PlayerName;
use super::levels::ThemeKind;
use super::session::{GameSummary, SessionPhase, SnakeSession};
use super::types::{FieldSize, Point};

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeFrame {
    pub field_size: FieldSize,
    pub theme: ThemeKind,
    /// Tail first, head last.
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub obstacles: Vec<Point>,
    pub score: u32,
    pub level: u32,
    pub foods_eaten: u32,
    pub speed: u32,
    pub elapsed: Duration,
    pub phase: SessionPhase,
    pub player: PlayerName,
    pub summary: Option<GameSummary>,
}

impl SnakeFrame {
    pub fn capture(session: &SnakeSession, now: Instant) -> Self {
        let state = session.state();
        let mut obstacles: Vec<Point> = state.obstacles.iter().copied().collect();
        obstacles.sort();

        Self {
            field_size: state.field_size,
            theme: state.theme,
            snake: state.snake.segments().copied().collect(),
            food: state.food,
            obstacles,
            score: state.score,
            level: state.level,
            foods_eaten: state.foods_eaten,
            speed: state.speed,
            elapsed: session.elapsed(now),
            phase: session.phase(),
            player: session.player().clone(),
            summary: session.summary().cloned(),
        }
    }

    pub fn head(&self) -> Option<Point> {
        self.snake.last().copied()
    }
}
