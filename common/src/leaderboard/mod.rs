mod store;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::player_name::{escape_html, PlayerName};

pub use store::{MemoryScoreStore, ScoreStore, YamlFileScoreStore};

pub const MAX_ENTRIES: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeaderboardKind {
    Durations,
    Points,
}

impl LeaderboardKind {
    pub const ALL: [LeaderboardKind; 2] = [LeaderboardKind::Durations, LeaderboardKind::Points];

    pub fn storage_key(&self) -> &'static str {
        match self {
            LeaderboardKind::Durations => "snakeScoresDurations",
            LeaderboardKind::Points => "snakeScoresPoints",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LeaderboardKind::Durations => "Longest runs",
            LeaderboardKind::Points => "Top scores",
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        match self {
            LeaderboardKind::Durations => format!("{:.1}s", value),
            LeaderboardKind::Points => format!("{}", value.trunc() as i64),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub value: f64,
}

#[derive(Debug)]
pub enum LeaderboardError {
    Storage(String),
}

impl std::fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderboardError::Storage(e) => write!(f, "Score storage error: {}", e),
        }
    }
}

impl std::error::Error for LeaderboardError {}

impl From<String> for LeaderboardError {
    fn from(e: String) -> Self {
        LeaderboardError::Storage(e)
    }
}

impl From<std::io::Error> for LeaderboardError {
    fn from(e: std::io::Error) -> Self {
        LeaderboardError::Storage(e.to_string())
    }
}

/// Inserts after any equal values so earlier entries keep their rank, then
/// caps the list.
pub fn insert_ranked(entries: &mut Vec<ScoreEntry>, entry: ScoreEntry) {
    let position = entries
        .iter()
        .position(|existing| existing.value.total_cmp(&entry.value).is_lt())
        .unwrap_or(entries.len());
    entries.insert(position, entry);
    entries.truncate(MAX_ENTRIES);
}

pub struct Leaderboard {
    store: Box<dyn ScoreStore + Send>,
}

impl Leaderboard {
    pub fn new(store: impl ScoreStore + Send + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryScoreStore::new())
    }

    /// Adds the result to both lists. Both lists are attempted even if the
    /// first write fails; the first error is returned.
    pub fn record(
        &mut self,
        player: &PlayerName,
        duration: Duration,
        points: u32,
    ) -> Result<(), LeaderboardError> {
        let durations = self.record_value(
            LeaderboardKind::Durations,
            player,
            duration.as_secs_f64(),
        );
        let points = self.record_value(LeaderboardKind::Points, player, points as f64);
        durations.and(points)
    }

    fn record_value(
        &mut self,
        kind: LeaderboardKind,
        player: &PlayerName,
        value: f64,
    ) -> Result<(), LeaderboardError> {
        let mut entries = self.store.load(kind)?;
        entries.sort_by(|a, b| b.value.total_cmp(&a.value));
        insert_ranked(
            &mut entries,
            ScoreEntry {
                player: player.as_str().to_string(),
                value,
            },
        );
        self.store.save(kind, &entries)
    }

    pub fn query(&self, kind: LeaderboardKind) -> Result<Vec<ScoreEntry>, LeaderboardError> {
        let mut entries = self.store.load(kind)?;
        entries.sort_by(|a, b| b.value.total_cmp(&a.value));
        entries.truncate(MAX_ENTRIES);
        Ok(entries)
    }

    pub fn render_html(&self, kind: LeaderboardKind) -> Result<String, LeaderboardError> {
        Ok(render_html(kind, &self.query(kind)?))
    }
}

pub fn render_html(kind: LeaderboardKind, entries: &[ScoreEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "<li><span>{:>2}. {}</span><span>{}</span></li>",
                index + 1,
                escape_html(&entry.player),
                kind.format_value(entry.value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
