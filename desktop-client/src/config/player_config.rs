use common::config::Validate;
use common::player_name::DEFAULT_PLAYER_NAME;
use common::PlayerName;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerConfig {
    pub name: String,
}

impl PlayerConfig {
    pub fn player_name(&self) -> PlayerName {
        PlayerName::new(&self.name)
    }
}

// Any string is accepted; it is trimmed and shortened when the game starts.
impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}
