use std::fmt;

use serde::{Deserialize, Serialize};

pub const MAX_PLAYER_NAME_CHARS: usize = 18;
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// A trimmed player name of at most [`MAX_PLAYER_NAME_CHARS`] characters.
/// Stored raw; escape with [`escape_html`] when rendering markup.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self(DEFAULT_PLAYER_NAME.to_string());
        }
        Self(trimmed.chars().take(MAX_PLAYER_NAME_CHARS).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn escaped(&self) -> String {
        escape_html(&self.0)
    }
}

impl Default for PlayerName {
    fn default() -> Self {
        Self(DEFAULT_PLAYER_NAME.to_string())
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
