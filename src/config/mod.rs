//! Configuration management for Studymate

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Study API used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the study API
    #[serde(default = "default_api_url")]
    pub api_base_url: String,

    /// Where `StudyNotes.pdf` is written (download directory if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Selected theme name
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_theme() -> String {
    "Chalkboard".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self { api_base_url: default_api_url(), export_dir: None, theme: default_theme() }
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
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
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

    /// Apply a command-line override of the API URL
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_base_url = url;
        }
        self
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "studymate")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "studymate").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("studymate.log"))
    }

    /// Directory exports are written to
    pub fn export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return dir.clone();
        }
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_localhost() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.theme, "Chalkboard");
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{"api_base_url":"https://study.example.com","export_dir":"/tmp/out"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_base_url, "https://study.example.com");
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn cli_override_wins() {
        let config = Config::default().with_api_url(Some("http://10.0.0.2:9000".to_string()));
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000");
        let config = Config::default().with_api_url(None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.api_base_url, DEFAULT_API_URL);

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.theme, config.theme);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config { theme: "Neon".to_string(), ..Config::default() };
        assert_eq!(config.active_theme().name, "Chalkboard");
    }
}
