//! Application configuration
//!
//! Loaded from a TOML file; every field has a default so partial files work.

use crate::error::{PlaygroundError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative configuration file
pub const CONFIG_ENV_VAR: &str = "ANIMATION_PLAYGROUND_CONFIG";

const APP_DIR: &str = "animation-playground";

/// UI color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    Dark,
    Light,
}

/// Configuration for the playground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Where presets are persisted
    pub store_path: PathBuf,

    /// Keep presets in memory only
    pub in_memory: bool,

    /// Seed one preset per catalog curve when the store is empty
    pub seed_on_start: bool,

    /// Color scheme
    pub theme: ThemeChoice,

    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,

    /// Initial window size
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            in_memory: false,
            seed_on_start: true,
            theme: ThemeChoice::Dark,
            log_filter: "animation_playground=debug,info".to_string(),
            window_width: 900.0,
            window_height: 640.0,
        }
    }
}

/// `<data dir>/animation-playground/presets.json`, or the working directory
/// when the platform has no data dir
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("presets.json")
}

/// Configuration file location: `$ANIMATION_PLAYGROUND_CONFIG`, else
/// `<config dir>/animation-playground/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

impl PlaygroundConfig {
    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PlaygroundError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Load the configuration file if it exists, defaults otherwise
    pub fn load_or_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Save the configuration as pretty TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PlaygroundError::SerializationError(e.to_string()))?;
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Use a different preset store file
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Keep presets in memory only
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Start with whatever the store holds, even when empty
    pub fn without_seeding(mut self) -> Self {
        self.seed_on_start = false;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.in_memory && self.store_path.as_os_str().is_empty() {
            return Err(PlaygroundError::ConfigError(
                "store_path is required unless in_memory is set".to_string(),
            ));
        }

        if self.store_path.is_dir() {
            return Err(PlaygroundError::ConfigError(format!(
                "store_path is a directory: {}",
                self.store_path.display()
            )));
        }

        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(PlaygroundError::ConfigError(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlaygroundConfig::default();
        assert!(config.seed_on_start);
        assert!(!config.in_memory);
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert!(config.store_path.ends_with("presets.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = PlaygroundConfig::default()
            .with_store_path("/tmp/x/presets.json")
            .in_memory()
            .without_seeding();

        assert!(config.in_memory);
        assert!(!config.seed_on_start);
        assert_eq!(config.store_path, PathBuf::from("/tmp/x/presets.json"));
    }

    #[test]
    fn test_partial_toml() {
        let config: PlaygroundConfig = toml::from_str("theme = \"light\"\nseed_on_start = false").unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert!(!config.seed_on_start);
        assert_eq!(config.window_width, 900.0);
    }

    #[test]
    fn test_invalid_window_size() {
        let mut config = PlaygroundConfig::default();
        config.window_height = 0.0;
        assert!(matches!(config.validate(), Err(PlaygroundError::ConfigError(_))));
    }

    #[test]
    fn test_empty_store_path_requires_in_memory() {
        let config = PlaygroundConfig::default().with_store_path("");
        assert!(config.validate().is_err());
        assert!(config.in_memory().validate().is_ok());
    }
}
