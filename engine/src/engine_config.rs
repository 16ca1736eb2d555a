use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::defaults;
use crate::games::shooter::ShooterSettings;
use crate::games::snake::SnakeSettings;

pub const CONFIG_FILE: &str = "arcade_engine.yaml";

pub fn get_config_manager(
    file_path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, EngineConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path.unwrap_or(CONFIG_FILE))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub round_seconds: u32,
    pub shooter: ShooterSettings,
    pub snake: SnakeSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            round_seconds: defaults::ROUND_SECONDS,
            shooter: ShooterSettings::default(),
            snake: SnakeSettings::default(),
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if !(1..=600).contains(&self.round_seconds) {
            return Err("round_seconds must be between 1 and 600".to_string());
        }
        self.shooter.validate()?;
        self.snake.validate()?;
        Ok(())
    }
}
