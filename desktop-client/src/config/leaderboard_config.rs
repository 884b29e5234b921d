use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LeaderboardConfig {
    pub location: String,
}

impl Validate for LeaderboardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("leaderboard location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            location: "scores".to_string(),
        }
    }
}
