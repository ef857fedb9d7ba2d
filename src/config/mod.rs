//! Configuration management for AlgoQuest
//!
//! Only user preferences live on disk. Game state is never saved.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Custom theme overrides (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,

    /// Vim-style navigation keys (h/j/k/l)
    pub vim_mode: bool,

    /// How long a toast stays visible, in milliseconds
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,

    /// Type detective time limit, in seconds
    #[serde(default = "default_quiz_seconds")]
    pub quiz_seconds: u64,
}

fn default_toast_ms() -> u64 {
    2500
}

fn default_quiz_seconds() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Tokyo Night".to_string(),
            custom_theme: None,
            vim_mode: true,
            toast_ms: default_toast_ms(),
            quiz_seconds: default_quiz_seconds(),
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse {:?}", path))
        } else {
            tracing::info!("No config at {:?}, writing defaults", path);
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "algoquest")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file written while the TUI is running
    pub fn log_dir() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "algoquest")
            .context("Failed to determine data directory")?;
        Ok(proj_dirs.data_local_dir().to_path_buf())
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        self.custom_theme.clone().or_else(|| Theme::by_name(&self.theme)).unwrap_or_default()
    }

    /// Record the theme picked in the UI; returns whether the config changed.
    ///
    /// A custom theme in the file is left alone.
    pub fn remember_theme(&mut self, theme: &Theme) -> bool {
        if self.custom_theme.is_some() || self.active_theme().name == theme.name {
            return false;
        }
        self.theme = theme.name.clone();
        true
    }

    /// Toast lifetime
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    /// Type detective time limit (at least one second)
    pub fn quiz_time_limit(&self) -> Duration {
        Duration::from_secs(self.quiz_seconds.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_tokyo_night_theme() {
        let config = Config::default();
        assert_eq!(config.theme, "Tokyo Night");
        assert_eq!(config.active_theme().name, "Tokyo Night");
    }

    #[test]
    fn theme_name_selects_built_in_palette() {
        let config = Config { theme: "light".to_string(), ..Default::default() };
        assert_eq!(config.active_theme().name, "Tokyo Day");
    }

    #[test]
    fn default_quiz_lasts_thirty_seconds() {
        assert_eq!(Config::default().quiz_time_limit(), Duration::from_secs(30));
    }

    #[test]
    fn zero_quiz_seconds_is_clamped() {
        let config = Config { quiz_seconds: 0, ..Default::default() };
        assert_eq!(config.quiz_time_limit(), Duration::from_secs(1));
    }

    #[test]
    fn config_deserializes_with_missing_fields() {
        let json = r#"{"theme":"Custom","vim_mode":false}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.theme, "Custom");
        assert!(!config.vim_mode);
        assert_eq!(config.toast_ms, 2500);
    }

    #[test]
    fn load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert!(config.vim_mode);
    }

    #[test]
    fn save_then_load_keeps_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config { vim_mode: false, quiz_seconds: 45, ..Default::default() };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.vim_mode);
        assert_eq!(loaded.quiz_seconds, 45);
    }

    #[test]
    fn toggled_theme_is_remembered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        assert!(!config.remember_theme(&Theme::default()));
        assert!(config.remember_theme(&Theme::default().toggled()));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.active_theme().name, "Tokyo Day");
    }

    #[test]
    fn custom_theme_is_not_overwritten() {
        let mut config = Config { custom_theme: Some(Theme::default()), ..Default::default() };
        assert!(!config.remember_theme(&Theme::default().toggled()));
        assert_eq!(config.theme, "Tokyo Night");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
