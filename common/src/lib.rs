pub mod config;
pub mod games;
pub mod leaderboard;
pub mod logger;
pub mod player_name;

pub use player_name::PlayerName;
