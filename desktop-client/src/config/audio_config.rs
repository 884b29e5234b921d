use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AudioConfig {
    pub enabled: bool,
    pub track_path: Option<String>,
    pub volume: f32,
}

impl Validate for AudioConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(format!("Volume must be between 0.0 and 1.0, got {}", self.volume));
        }
        if self.enabled && self.track_path.as_deref().is_none_or(str::is_empty) {
            return Err("Audio is enabled but no track_path is set".to_string());
        }
        Ok(())
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            track_path: None,
            volume: 0.35,
        }
    }
}
