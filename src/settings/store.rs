//! JSON persistence for the settings record.
//!
//! The store resolves a settings path once and then loads/saves the record
//! at startup and shutdown. A missing file on first run is not an error, and
//! a malformed file falls back to defaults rather than blocking launch.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::SettingsError;
use super::Settings;

/// File name of the settings record inside the config directory.
const SETTINGS_FILE_NAME: &str = "impulse.json";

/// Loads and saves the [`Settings`] record.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store backed by the platform config directory
    /// (`<config>/impulse/impulse.json`), creating the directory if needed.
    pub fn default_location() -> Result<Self, SettingsError> {
        let base = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        let dir = base.join("impulse");
        fs::create_dir_all(&dir).map_err(|source| SettingsError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            path: dir.join(SETTINGS_FILE_NAME),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the settings record.
    ///
    /// A missing file yields defaults (first run). A file that exists but
    /// does not parse also yields defaults, with a warning, so a damaged
    /// record never blocks launch. Other I/O failures propagate.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => {
                tracing::info!(path = %self.path.display(), "loaded settings");
                Ok(settings)
            }
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "failed to parse settings, using defaults"
                );
                Ok(Settings::default())
            }
        }
    }

    /// Saves the settings record as pretty-printed JSON.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
