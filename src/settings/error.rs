//! Settings persistence error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform config directory could not be determined.
    #[error("could not determine the config directory")]
    NoConfigDir,

    /// Reading or writing the settings file failed.
    #[error("settings file I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the settings record failed.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ============================================================================
// Tests
// ============================================================================
