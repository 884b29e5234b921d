use common::config::Validate;
use common::games::snake::{Difficulty, FieldSize, SnakeSessionSettings, SpawnPolicy};
use serde::{Deserialize, Serialize};

pub const MIN_CELL_SIZE_PX: u32 = 4;
pub const MAX_CELL_SIZE_PX: u32 = 40;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub cell_size_px: u32,
    pub difficulty: Difficulty,
    pub spawn_policy: SpawnPolicy,
}

impl GameConfig {
    pub fn session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            field_size: FieldSize::new(self.field_width as usize, self.field_height as usize),
            difficulty: self.difficulty,
            spawn_policy: self.spawn_policy,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.session_settings().validate()?;
        if !(MIN_CELL_SIZE_PX..=MAX_CELL_SIZE_PX).contains(&self.cell_size_px) {
            return Err(format!(
                "Cell size must be between {} and {} px, got {}",
                MIN_CELL_SIZE_PX, MAX_CELL_SIZE_PX, self.cell_size_px
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let settings = SnakeSessionSettings::default();
        Self {
            field_width: settings.field_size.width as u32,
            field_height: settings.field_size.height as u32,
            cell_size_px: 14,
            difficulty: settings.difficulty,
            spawn_policy: settings.spawn_policy,
        }
    }
}
