//! Error types for core functionality

use thiserror::Error;

/// Errors that can occur outside game logic
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
