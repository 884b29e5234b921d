mod audio_config;
mod game_config;
mod leaderboard_config;
mod main_config;
mod player_config;

pub use audio_config::AudioConfig;
pub use game_config::GameConfig;
pub use leaderboard_config::LeaderboardConfig;
pub use main_config::{get_config_manager, Config};
pub use player_config::PlayerConfig;
