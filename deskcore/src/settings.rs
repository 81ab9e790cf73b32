//! Settings shared by all deskdemos applications
//!
//! Stored as pretty-printed JSON in the platform config directory. A missing
//! or unreadable file is never fatal: the apps fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Application name used for the config directory.
pub const APP_NAME: &str = "deskdemos";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskSettings {
    /// 24-hour clock instead of `HH:MM:SS AM/PM`
    pub use_24h_time: bool,
    /// Clock refresh interval in milliseconds
    pub tick_interval_ms: u64,
    /// How long temporary status messages stay visible
    pub status_timeout_ms: u64,
    /// Entries generated for the "Open Recent" menu
    pub recent_file_count: usize,
    /// Body text size
    pub font_size_body: f32,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            use_24h_time: false,
            tick_interval_ms: 1000,
            status_timeout_ms: 3000,
            recent_file_count: 5,
            font_size_body: 14.0,
        }
    }
}

pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

impl DeskSettings {
    pub fn config_path() -> PathBuf {
        config_dir(APP_NAME).join("settings.json")
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_or_create(&Self::config_path())
    }

    /// Load `path`. A missing file is created with the defaults so there is
    /// something to edit; an unreadable one is left alone.
    pub fn load_or_create(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                match settings.save_to(path) {
                    Ok(()) => log::info!("wrote default settings to {}", path.display()),
                    Err(e) => log::warn!("could not write {}: {e}", path.display()),
                }
                settings
            }
            Err(e) => {
                log::warn!("ignoring settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Clock interval, never shorter than 50 ms.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(50))
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.status_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = DeskSettings {
            use_24h_time: true,
            recent_file_count: 8,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(DeskSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "status_timeout_ms": 500 }"#).unwrap();
        let settings = DeskSettings::load_from(&path).unwrap();
        assert_eq!(settings.status_timeout(), Duration::from_millis(500));
        assert_eq!(settings.tick_interval(), Duration::from_millis(1000));
        assert!(!settings.use_24h_time);
    }

    #[test]
    fn test_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(DeskSettings::load_from(&missing), Err(SettingsError::Io(_))));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "not json").unwrap();
        assert!(matches!(DeskSettings::load_from(&bad), Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deskdemos").join("settings.json");
        assert_eq!(DeskSettings::load_or_create(&path), DeskSettings::default());
        assert_eq!(DeskSettings::load_from(&path).unwrap(), DeskSettings::default());
    }

    #[test]
    fn test_load_or_create_keeps_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ broken").unwrap();
        assert_eq!(DeskSettings::load_or_create(&path), DeskSettings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ broken");
    }

    #[test]
    fn test_tick_interval_floor() {
        let settings = DeskSettings { tick_interval_ms: 0, ..Default::default() };
        assert_eq!(settings.tick_interval(), Duration::from_millis(50));
    }
}
