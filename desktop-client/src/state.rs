use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use common::games::snake::{Intent, SnakeFrame};
use common::leaderboard::{LeaderboardKind, ScoreEntry};
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

use crate::constants::EVENT_LOG_SIZE;

#[derive(Debug, Clone)]
pub enum ClientCommand {
    Game(Intent),
    /// Replaces any game on screen with a fresh one on the ready screen.
    NewGame,
    SetPlayerName(String),
    RefreshLeaderboard,
    Shutdown,
}

#[derive(Clone)]
pub struct SharedState {
    frame: Arc<Mutex<Option<SnakeFrame>>>,
    event_log: Arc<Mutex<AllocRingBuffer<String>>>,
    leaderboards: Arc<Mutex<HashMap<LeaderboardKind, Vec<ScoreEntry>>>>,
    error: Arc<Mutex<Option<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            frame: Arc::new(Mutex::new(None)),
            event_log: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_LOG_SIZE))),
            leaderboards: Arc::new(Mutex::new(HashMap::new())),
            error: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_frame(&self, frame: Option<SnakeFrame>) {
        *self.frame.lock().unwrap() = frame;
        self.request_repaint();
    }

    pub fn get_frame(&self) -> Option<SnakeFrame> {
        self.frame.lock().unwrap().clone()
    }

    pub fn add_event(&self, event: String) {
        self.event_log.lock().unwrap().enqueue(event);
        self.request_repaint();
    }

    pub fn get_events(&self) -> Vec<String> {
        self.event_log.lock().unwrap().iter().cloned().collect()
    }

    pub fn set_leaderboard(&self, kind: LeaderboardKind, entries: Vec<ScoreEntry>) {
        self.leaderboards.lock().unwrap().insert(kind, entries);
        self.request_repaint();
    }

    pub fn get_leaderboard(&self, kind: LeaderboardKind) -> Vec<ScoreEntry> {
        self.leaderboards
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
        self.request_repaint();
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }

    pub fn clear_error(&self) {
        *self.error.lock().unwrap() = None;
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}
