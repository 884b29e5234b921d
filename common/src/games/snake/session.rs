use std::time::Duration;

use tokio::time::Instant;

use crate::games::SessionRng;
use crate::log;
use crate::player_name::PlayerName;
use super::game_state::{SnakeGameState, TickOutcome};
use super::settings::SnakeSessionSettings;
use super::types::{DeathReason, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Ready,
    Running,
    Paused,
    Over,
}

impl SessionPhase {
    pub fn is_ticking(&self) -> bool {
        *self == SessionPhase::Running
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Start,
    PauseToggle,
    Reset,
    SetDirection(Direction),
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameSummary {
    pub player: PlayerName,
    pub duration: Duration,
    pub score: u32,
    pub level: u32,
    pub foods_eaten: u32,
    pub reason: DeathReason,
}

/// One game from the ready screen to game over. Time is passed in by the caller.
pub struct SnakeSession {
    player: PlayerName,
    phase: SessionPhase,
    state: SnakeGameState,
    rng: SessionRng,
    started_at: Instant,
    summary: Option<GameSummary>,
}

impl SnakeSession {
    pub fn new(
        player: PlayerName,
        settings: &SnakeSessionSettings,
        mut rng: SessionRng,
        now: Instant,
    ) -> Self {
        let state = SnakeGameState::new(
            settings.field_size,
            settings.difficulty,
            settings.spawn_policy,
            &mut rng,
        );
        log!(
            "Session created for {} on {}x{} (seed {})",
            player,
            settings.field_size.width,
            settings.field_size.height,
            rng.seed()
        );
        Self {
            player,
            phase: SessionPhase::Ready,
            state,
            rng,
            started_at: now,
            summary: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn player(&self) -> &PlayerName {
        &self.player
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    /// Time since the session was created, frozen once the game is over.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match &self.summary {
            Some(summary) => summary.duration,
            None => now.saturating_duration_since(self.started_at),
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SnakeGameState {
        &mut self.state
    }

    pub fn tick_interval(&self) -> Duration {
        self.state.tick_interval()
    }

    /// Ready -> Running. Returns false in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::Ready {
            return false;
        }
        self.phase = SessionPhase::Running;
        log!("{} started playing", self.player);
        true
    }

    /// Running <-> Paused. Returns the new phase, or `None` when pausing does not apply.
    pub fn toggle_pause(&mut self) -> Option<SessionPhase> {
        self.phase = match self.phase {
            SessionPhase::Running => SessionPhase::Paused,
            SessionPhase::Paused => SessionPhase::Running,
            SessionPhase::Ready | SessionPhase::Over => return None,
        };
        log!(
            "Game {}",
            if self.phase == SessionPhase::Paused { "paused" } else { "resumed" }
        );
        Some(self.phase)
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.phase.is_ticking() {
            return false;
        }
        self.state.set_direction(direction)
    }

    /// Advances the simulation one step. Does nothing unless running.
    pub fn tick(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.phase.is_ticking() {
            return None;
        }

        let outcome = self.state.update(&mut self.rng);
        if let TickOutcome::Died(reason) = outcome {
            self.finish(reason, now);
        }
        Some(outcome)
    }

    fn finish(&mut self, reason: DeathReason, now: Instant) {
        self.phase = SessionPhase::Over;
        let summary = GameSummary {
            player: self.player.clone(),
            duration: now.saturating_duration_since(self.started_at),
            score: self.state.score,
            level: self.state.level,
            foods_eaten: self.state.foods_eaten,
            reason,
        };
        log!(
            "Game over: {} {} at level {} after {:.1}s with {} points",
            summary.player,
            reason,
            summary.level,
            summary.duration.as_secs_f64(),
            summary.score
        );
        self.summary = Some(summary);
    }
}
