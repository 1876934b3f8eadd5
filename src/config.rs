// SPDX-License-Identifier: MPL-2.0
//! Demo application settings, persisted to a `settings.toml` file.
//!
//! Every field is optional: absent fields fall back to the library's own
//! [`ToastDefaults`](crate::ToastDefaults). Loading an unreadable or
//! invalid file falls back to defaults rather than failing startup.

use crate::error::Result;
use crate::position::ToastPosition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "iced_toast";

/// Named anchor, the serializable subset of [`ToastPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorPosition {
    Top,
    Center,
    Bottom,
}

impl AnchorPosition {
    pub const ALL: [AnchorPosition; 3] = [
        AnchorPosition::Top,
        AnchorPosition::Center,
        AnchorPosition::Bottom,
    ];
}

impl From<AnchorPosition> for ToastPosition {
    fn from(anchor: AnchorPosition) -> Self {
        match anchor {
            AnchorPosition::Top => ToastPosition::Top,
            AnchorPosition::Center => ToastPosition::Center,
            AnchorPosition::Bottom => ToastPosition::Bottom,
        }
    }
}

impl FromStr for AnchorPosition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(AnchorPosition::Top),
            "center" => Ok(AnchorPosition::Center),
            "bottom" => Ok(AnchorPosition::Bottom),
            other => Err(format!("unknown position '{other}'")),
        }
    }
}

impl fmt::Display for AnchorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorPosition::Top => write!(f, "Top"),
            AnchorPosition::Center => write!(f, "Center"),
            AnchorPosition::Bottom => write!(f, "Bottom"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub duration_secs: Option<f32>,
    #[serde(default)]
    pub position: Option<AnchorPosition>,
    #[serde(default)]
    pub tap_to_dismiss: Option<bool>,
    #[serde(default)]
    pub queue_enabled: Option<bool>,
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
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            duration_secs: Some(1.5),
            position: Some(AnchorPosition::Top),
            tap_to_dismiss: Some(false),
            queue_enabled: Some(true),
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
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn anchor_position_parses_case_insensitively() {
        assert_eq!("top".parse::<AnchorPosition>(), Ok(AnchorPosition::Top));
        assert_eq!("Center".parse::<AnchorPosition>(), Ok(AnchorPosition::Center));
        assert_eq!("BOTTOM".parse::<AnchorPosition>(), Ok(AnchorPosition::Bottom));
        assert!("middle".parse::<AnchorPosition>().is_err());
    }

    #[test]
    fn anchor_position_converts_to_toast_position() {
        assert_eq!(
            ToastPosition::from(AnchorPosition::Center),
            ToastPosition::Center
        );
    }
}
