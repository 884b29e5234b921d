use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
};
use super::{LeaderboardError, LeaderboardKind, ScoreEntry, MAX_ENTRIES};

/// Persistence for the two ranked lists. Implementations store whatever they
/// are given, capped at [`MAX_ENTRIES`].
pub trait ScoreStore {
    fn load(&self, kind: LeaderboardKind) -> Result<Vec<ScoreEntry>, LeaderboardError>;
    fn save(&mut self, kind: LeaderboardKind, entries: &[ScoreEntry]) -> Result<(), LeaderboardError>;
}

#[derive(Default)]
pub struct MemoryScoreStore {
    lists: HashMap<LeaderboardKind, Vec<ScoreEntry>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self, kind: LeaderboardKind) -> Result<Vec<ScoreEntry>, LeaderboardError> {
        Ok(self.lists.get(&kind).cloned().unwrap_or_default())
    }

    fn save(&mut self, kind: LeaderboardKind, entries: &[ScoreEntry]) -> Result<(), LeaderboardError> {
        let capped = entries.iter().take(MAX_ENTRIES).cloned().collect();
        self.lists.insert(kind, capped);
        Ok(())
    }
}

/// One YAML file per list, named after the list key, inside `directory`.
pub struct YamlFileScoreStore {
    directory: PathBuf,
    serializer: YamlConfigSerializer,
}

impl YamlFileScoreStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            serializer: YamlConfigSerializer::new(),
        }
    }

    pub fn file_path(&self, kind: LeaderboardKind) -> PathBuf {
        self.directory.join(format!("{}.yaml", kind.storage_key()))
    }

    fn provider(&self, kind: LeaderboardKind) -> FileContentConfigProvider {
        FileContentConfigProvider::new(self.file_path(kind))
    }
}

impl ScoreStore for YamlFileScoreStore {
    fn load(&self, kind: LeaderboardKind) -> Result<Vec<ScoreEntry>, LeaderboardError> {
        let Some(content) = self.provider(kind).get_config_content()? else {
            return Ok(Vec::new());
        };
        let entries: Vec<ScoreEntry> = self.serializer.deserialize(&content)?;
        Ok(entries)
    }

    fn save(&mut self, kind: LeaderboardKind, entries: &[ScoreEntry]) -> Result<(), LeaderboardError> {
        let capped: Vec<ScoreEntry> = entries.iter().take(MAX_ENTRIES).cloned().collect();
        let content = self.serializer.serialize(&capped)?;
        self.provider(kind).set_config_content(&content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let random_number: u64 = rand::random();
        std::env::temp_dir().join(format!("grid_snake_scores_{}", random_number))
    }

    fn entry(player: &str, value: f64) -> ScoreEntry {
        ScoreEntry {
            player: player.to_string(),
            value,
        }
    }

    #[test]
    fn test_missing_file_loads_empty_list() {
        let store = YamlFileScoreStore::new(temp_dir());
        let loaded = store.load(LeaderboardKind::Points);
        assert!(loaded.is_ok());
        assert!(loaded.unwrap().is_empty());
    }

    #[test]
    fn test_file_store_persists_lists_separately() {
        let dir = temp_dir();
        let mut store = YamlFileScoreStore::new(&dir);

        store
            .save(LeaderboardKind::Durations, &[entry("Ann", 12.5)])
            .expect("save durations");
        store
            .save(LeaderboardKind::Points, &[entry("Bob", 40.0), entry("Ann", 30.0)])
            .expect("save points");

        assert!(dir.join("snakeScoresDurations.yaml").exists());
        assert!(dir.join("snakeScoresPoints.yaml").exists());

        let reopened = YamlFileScoreStore::new(&dir);
        assert_eq!(
            reopened.load(LeaderboardKind::Durations).unwrap(),
            vec![entry("Ann", 12.5)]
        );
        assert_eq!(
            reopened.load(LeaderboardKind::Points).unwrap(),
            vec![entry("Bob", 40.0), entry("Ann", 30.0)]
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_file_store_caps_written_entries() {
        let dir = temp_dir();
        let mut store = YamlFileScoreStore::new(&dir);
        let entries: Vec<ScoreEntry> = (0..15).map(|i| entry("P", 100.0 - i as f64)).collect();
        store.save(LeaderboardKind::Points, &entries).unwrap();
        assert_eq!(store.load(LeaderboardKind::Points).unwrap().len(), MAX_ENTRIES);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_corrupt_file_is_a_storage_error() {
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("snakeScoresPoints.yaml"), "{ not: [a, list").unwrap();
        let store = YamlFileScoreStore::new(&dir);
        assert!(matches!(
            store.load(LeaderboardKind::Points),
            Err(LeaderboardError::Storage(_))
        ));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_memory_store_round_trips() {
        let mut store = MemoryScoreStore::new();
        assert!(store.load(LeaderboardKind::Durations).unwrap().is_empty());
        store.save(LeaderboardKind::Durations, &[entry("Ann", 1.0)]).unwrap();
        assert_eq!(store.load(LeaderboardKind::Durations).unwrap(), vec![entry("Ann", 1.0)]);
        assert!(store.load(LeaderboardKind::Points).unwrap().is_empty());
    }
}
