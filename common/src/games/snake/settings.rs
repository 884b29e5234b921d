use crate::config::Validate;
use super::levels::Difficulty;
use super::spawner::SpawnPolicy;
use super::types::FieldSize;

pub const MIN_FIELD_SIDE: usize = 16;
pub const MAX_FIELD_SIDE: usize = 100;
pub const MAX_SPAWN_CANDIDATES: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    pub field_size: FieldSize,
    pub difficulty: Difficulty,
    pub spawn_policy: SpawnPolicy,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_size: FieldSize::new(48, 48),
            difficulty: Difficulty::default(),
            spawn_policy: SpawnPolicy::default(),
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        let side = MIN_FIELD_SIDE..=MAX_FIELD_SIDE;
        if !side.contains(&self.field_size.width) {
            return Err(format!(
                "Field width must be between {} and {}, got {}",
                MIN_FIELD_SIDE, MAX_FIELD_SIDE, self.field_size.width
            ));
        }
        if !side.contains(&self.field_size.height) {
            return Err(format!(
                "Field height must be between {} and {}, got {}",
                MIN_FIELD_SIDE, MAX_FIELD_SIDE, self.field_size.height
            ));
        }
        if let SpawnPolicy::Sampled { max_candidates } = self.spawn_policy
            && !(1..=MAX_SPAWN_CANDIDATES).contains(&max_candidates)
        {
            return Err(format!(
                "Spawn candidates must be between 1 and {}, got {}",
                MAX_SPAWN_CANDIDATES, max_candidates
            ));
        }
        Ok(())
    }
}
