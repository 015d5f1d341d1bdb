// SPDX-License-Identifier: MPL-2.0
//! This module handles the toaster configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.toaster.close_button = Some(true);
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.toaster.close_button, Some(true));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::toaster::{Position, Timing, ToasterOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToaster";

/// Container appearance settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToasterSection {
    #[serde(default)]
    pub close_button: Option<bool>,
    #[serde(default)]
    pub rich_colors: Option<bool>,
    /// Corner string such as `"bottom-right"` or `"top-center"`.
    #[serde(default)]
    pub position: Option<String>,
}

/// Lifecycle delays in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingSection {
    #[serde(default)]
    pub lifetime_ms: Option<u64>,
    #[serde(default)]
    pub unmount_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toaster: ToasterSection,
    #[serde(default)]
    pub timing: TimingSection,
}

impl Config {
    /// Resolves the stored preferences into toaster options, falling back to
    /// defaults for anything unset or unparsable.
    #[must_use]
    pub fn to_options(&self) -> ToasterOptions {
        let position = match self.toaster.position.as_deref() {
            Some(raw) => raw.parse::<Position>().unwrap_or_else(|err| {
                tracing::warn!(%raw, %err, "invalid toaster position, using default");
                Position::default()
            }),
            None => Position::default(),
        };

        let defaults = Timing::default();
        let timing = Timing {
            lifetime: self
                .timing
                .lifetime_ms
                .map_or(defaults.lifetime, Duration::from_millis),
            unmount_delay: self
                .timing
                .unmount_delay_ms
                .map_or(defaults.unmount_delay, Duration::from_millis),
            ..defaults
        };

        ToasterOptions {
            close_button: self.toaster.close_button.unwrap_or(false),
            rich_colors: self.toaster.rich_colors.unwrap_or(false),
            position,
            timing,
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
        Config::default()
    }))
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
    use crate::toaster::{XPosition, YPosition};
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            toaster: ToasterSection {
                close_button: Some(true),
                rich_colors: Some(false),
                position: Some("top-center".to_string()),
            },
            timing: TimingSection {
                lifetime_ms: Some(6000),
                unmount_delay_ms: None,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn default_config_resolves_to_default_options() {
        let options = Config::default().to_options();
        assert!(!options.close_button);
        assert!(!options.rich_colors);
        assert_eq!(options.position, Position::default());
        assert_eq!(
            options.timing.lifetime,
            Duration::from_millis(TOAST_LIFETIME_MS)
        );
    }

    #[test]
    fn to_options_applies_overrides() {
        let mut config = Config::default();
        config.toaster.position = Some("top-left".into());
        config.timing.unmount_delay_ms = Some(500);

        let options = config.to_options();
        assert_eq!(options.position.y, YPosition::Top);
        assert_eq!(options.position.x, XPosition::Left);
        assert_eq!(options.timing.unmount_delay, Duration::from_millis(500));
    }

    #[test]
    fn to_options_ignores_unknown_position() {
        let mut config = Config::default();
        config.toaster.position = Some("middle-earth".into());
        assert_eq!(config.to_options().position, Position::default());
    }
}
