use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{AudioConfig, GameConfig, LeaderboardConfig, PlayerConfig};

const CONFIG_FILE_NAME: &str = "grid_snake_config.yaml";

/// Next to the executable when that can be resolved, otherwise the working directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub player: PlayerConfig,
    pub game: GameConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.player.validate()?;
        self.game.validate()?;
        self.audio.validate()?;
        self.leaderboard.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::snake::{Difficulty, SpawnPolicy};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_grid_snake_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);

        let serialized_string = serializer.serialize(&default_config).unwrap();
        assert!(content_provider.set_config_content(&serialized_string).is_ok());

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);

        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let mut config = Config::default();
        config.player.name = "Ann".to_string();
        config.game.difficulty = Difficulty::Fast;
        config.game.spawn_policy = SpawnPolicy::Exhaustive;
        config.audio = AudioConfig {
            enabled: true,
            track_path: Some("music/loop.ogg".to_string()),
            volume: 0.5,
        };

        let file_path = get_temp_file_path();
        let manager = ConfigManager::new(
            FileContentConfigProvider::new(&file_path),
            YamlConfigSerializer::new(),
        );

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager: ConfigManager<_, Config, _> = ConfigManager::new(
            FileContentConfigProvider::new(&file_path),
            YamlConfigSerializer::new(),
        );
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, Config, _> = ConfigManager::new(
            FileContentConfigProvider::new("this_file_does_not_exist.yaml"),
            YamlConfigSerializer::new(),
        );
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            player:
              name: Ann
            game:
              field_width: 8
              field_height: 48
              cell_size_px: 14
              difficulty: Normal
              spawn_policy: Exhaustive
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_missing_optional_sections_use_defaults() {
        let content = r#"
            player:
              name: Bob
            game:
              field_width: 30
              field_height: 20
              cell_size_px: 20
              difficulty: Slow
              spawn_policy: !Sampled
                max_candidates: 50
        "#;
        let config: Config = YamlConfigSerializer::new().deserialize(content).unwrap();
        assert_eq!(config.audio, AudioConfig::default());
        assert_eq!(config.leaderboard, LeaderboardConfig::default());
        assert_eq!(config.game.spawn_policy, SpawnPolicy::Sampled { max_candidates: 50 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_audio_enabled_without_track_is_invalid() {
        let mut config = Config::default();
        config.audio.enabled = true;
        assert!(config.validate().is_err());
    }
}
