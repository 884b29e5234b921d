use tokio::time::Instant;

use crate::games::{AudioSink, FrameSink, SessionRng, TickScheduler};
use crate::leaderboard::Leaderboard;
use crate::log;
use crate::player_name::PlayerName;
use super::frame::SnakeFrame;
use super::game_state::TickOutcome;
use super::levels::tick_interval;
use super::session::{Intent, SessionPhase, SnakeSession};
use super::settings::SnakeSessionSettings;

/// Owns the current game (if any) and keeps the tick timer, music and
/// leaderboard in step with its phase.
pub struct SnakeController {
    player: PlayerName,
    settings: SnakeSessionSettings,
    session: Option<SnakeSession>,
    scheduler: TickScheduler,
    leaderboard: Leaderboard,
    audio: Box<dyn AudioSink>,
    seed: Option<u64>,
}

impl SnakeController {
    pub fn new(
        player: PlayerName,
        settings: SnakeSessionSettings,
        leaderboard: Leaderboard,
        audio: Box<dyn AudioSink>,
    ) -> Self {
        let speed = settings.difficulty.speed_for_level(1);
        Self {
            player,
            settings,
            session: None,
            scheduler: TickScheduler::new(tick_interval(speed)),
            leaderboard,
            audio,
            seed: None,
        }
    }

    /// Every new session uses this seed instead of a random one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn player(&self) -> &PlayerName {
        &self.player
    }

    /// Takes effect from the next new game.
    pub fn set_player(&mut self, player: PlayerName) {
        self.player = player;
    }

    pub fn session(&self) -> Option<&SnakeSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> Option<SessionPhase> {
        self.session.as_ref().map(SnakeSession::phase)
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut TickScheduler {
        &mut self.scheduler
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Replaces any current game with a fresh one on the ready screen.
    pub fn new_game(&mut self, now: Instant) {
        self.scheduler.stop();
        self.with_audio("rewind", |audio| audio.rewind());

        let rng = match self.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        let session = SnakeSession::new(self.player.clone(), &self.settings, rng, now);
        self.scheduler.reschedule(session.tick_interval());
        self.session = Some(session);
    }

    /// Applies one user intent. Returns true when anything changed.
    pub fn handle_intent(&mut self, intent: Intent, now: Instant) -> bool {
        match intent {
            Intent::Start => self.start(now),
            Intent::PauseToggle => self.toggle_pause(),
            Intent::Reset => self.reset(),
            Intent::SetDirection(direction) => self
                .session
                .as_mut()
                .is_some_and(|session| session.set_direction(direction)),
        }
    }

    /// With no game on screen this does nothing; a new game comes from `new_game`.
    fn start(&mut self, now: Instant) -> bool {
        match self.phase() {
            None => false,
            Some(SessionPhase::Over) => {
                self.new_game(now);
                true
            }
            Some(SessionPhase::Ready) => {
                let Some(session) = self.session.as_mut() else {
                    return false;
                };
                session.start();
                let period = session.tick_interval();
                self.scheduler.reschedule(period);
                self.scheduler.start();
                self.with_audio("play", |audio| audio.play());
                true
            }
            Some(SessionPhase::Running | SessionPhase::Paused) => false,
        }
    }

    fn toggle_pause(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match session.toggle_pause() {
            Some(SessionPhase::Paused) => {
                self.scheduler.stop();
                self.with_audio("pause", |audio| audio.pause());
                true
            }
            Some(_) => {
                self.scheduler.start();
                self.with_audio("play", |audio| audio.play());
                true
            }
            None => false,
        }
    }

    fn reset(&mut self) -> bool {
        self.scheduler.stop();
        self.with_audio("pause", |audio| audio.pause());
        self.with_audio("rewind", |audio| audio.rewind());
        if self.session.take().is_some() {
            log!("Game reset");
        }
        true
    }

    /// Runs one simulation step for a scheduler tick.
    pub fn on_tick(&mut self, now: Instant) -> Option<TickOutcome> {
        let session = self.session.as_mut()?;
        let outcome = session.tick(now)?;

        match outcome {
            TickOutcome::Ate {
                level_up: Some(_), ..
            } => {
                let period = session.tick_interval();
                self.scheduler.reschedule(period);
            }
            TickOutcome::Died(_) => {
                self.scheduler.stop();
                self.with_audio("pause", |audio| audio.pause());
                self.record_result();
            }
            TickOutcome::Moved | TickOutcome::Ate { .. } => {}
        }

        Some(outcome)
    }

    fn record_result(&mut self) {
        let Some(summary) = self.session.as_ref().and_then(SnakeSession::summary) else {
            return;
        };
        if let Err(e) = self
            .leaderboard
            .record(&summary.player, summary.duration, summary.score)
        {
            log!("Failed to record score: {}", e);
        }
    }

    pub fn frame(&self, now: Instant) -> Option<SnakeFrame> {
        self.session
            .as_ref()
            .map(|session| SnakeFrame::capture(session, now))
    }

    pub fn publish(&self, sink: &impl FrameSink, now: Instant) {
        match self.frame(now) {
            Some(frame) => sink.publish_frame(frame),
            None => sink.clear(),
        }
    }

    fn with_audio(
        &mut self,
        action: &str,
        f: impl FnOnce(&mut Box<dyn AudioSink>) -> Result<(), String>,
    ) {
        if let Err(e) = f(&mut self.audio) {
            log!("Audio {} failed: {}", action, e);
        }
    }
}
