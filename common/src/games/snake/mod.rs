mod controller;
mod frame;
mod game_state;
mod input;
pub mod levels;
pub mod obstacles;
mod session;
mod settings;
mod snake;
pub mod spawner;
mod types;

pub use controller::SnakeController;
pub use frame::SnakeFrame;
pub use game_state::{LevelUp, SnakeGameState, TickOutcome};
pub use input::{classify_gesture, swipe_direction, SWIPE_THRESHOLD_PX};
pub use levels::{Difficulty, Rgb, ThemeKind, ThemePalette};
pub use obstacles::ObstaclePattern;
pub use session::{GameSummary, Intent, SessionPhase, SnakeSession};
pub use settings::SnakeSessionSettings;
pub use snake::Snake;
pub use spawner::SpawnPolicy;
pub use types::{DeathReason, Direction, FieldSize, Point};
