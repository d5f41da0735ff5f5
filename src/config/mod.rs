//! This module handles the demo application's configuration, including
//! loading and saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_duration_ms = Some(3_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

/// Auto-dismiss duration applied to new notifications when the config and the
/// CLI specify none. A non-positive value disables auto-dismiss entirely.
pub const DEFAULT_DURATION_MS: i64 = 5_000;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub default_duration_ms: Option<i64>,
    #[serde(default)]
    pub dark_theme: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            dark_theme: Some(true),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Persists a theme preference without touching any other stored setting.
pub fn save_dark_theme(dark_theme: bool) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_dark_theme_to_path(dark_theme, &path);
    }
    Ok(())
}

pub fn save_dark_theme_to_path(dark_theme: bool, path: &Path) -> Result<()> {
    let mut config = if path.exists() {
        load_from_path(path)?
    } else {
        Config::default()
    };
    config.dark_theme = Some(dark_theme);
    save_to_path(&config, path)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            default_duration_ms: Some(2_500),
            dark_theme: Some(false),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.default_duration_ms, config.default_duration_ms);
        assert_eq!(loaded.dark_theme, config.dark_theme);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.default_duration_ms, Some(DEFAULT_DURATION_MS));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_enables_auto_dismiss() {
        let config = Config::default();
        assert_eq!(config.default_duration_ms, Some(DEFAULT_DURATION_MS));
        assert_eq!(config.dark_theme, Some(true));
    }

    #[test]
    fn saving_the_theme_keeps_the_configured_duration() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let config = Config {
            default_duration_ms: Some(2_500),
            dark_theme: Some(true),
        };
        save_to_path(&config, &config_path).expect("failed to save config");

        save_dark_theme_to_path(false, &config_path).expect("failed to save theme");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.default_duration_ms, Some(2_500));
        assert_eq!(loaded.dark_theme, Some(false));
    }

    #[test]
    fn saving_the_theme_without_a_config_file_writes_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_dark_theme_to_path(false, &config_path).expect("failed to save theme");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.default_duration_ms, Some(DEFAULT_DURATION_MS));
        assert_eq!(loaded.dark_theme, Some(false));
    }

    #[test]
    fn negative_duration_survives_the_round_trip() {
        let config = Config {
            default_duration_ms: Some(-1),
            dark_theme: None,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.default_duration_ms, Some(-1));
    }
}
