use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ids: IdsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("display.{0} must not be empty")]
    EmptyGlyph(&'static str),

    #[error("display.filled_star and display.empty_star must differ")]
    IdenticalGlyphs,
}

/// How new movie ids are generated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Time-ordered UUIDv7
    #[default]
    Uuid,
    /// Millisecond timestamp strings, as written by older versions
    Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IdsConfig {
    #[serde(default)]
    pub strategy: IdStrategy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_filled_star")]
    pub filled_star: String,
    #[serde(default = "default_empty_star")]
    pub empty_star: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Write logs to a daily-rotated file instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_filled_star() -> String {
    "★".to_string()
}

fn default_empty_star() -> String {
    "☆".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            filled_star: default_filled_star(),
            empty_star: default_empty_star(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config = Self::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.filled_star.trim().is_empty() {
            return Err(ConfigError::EmptyGlyph("filled_star"));
        }
        if self.display.empty_star.trim().is_empty() {
            return Err(ConfigError::EmptyGlyph("empty_star"));
        }
        if self.display.filled_star == self.display.empty_star {
            return Err(ConfigError::IdenticalGlyphs);
        }
        Ok(())
    }
}
