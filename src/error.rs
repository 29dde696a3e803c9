//! Error types for Animation Playground
//!
//! Only infrastructure failures are errors. Unknown curves, bad speed input
//! and deletes of missing presets are ordinary outcomes handled in place.

use thiserror::Error;

/// Animation Playground errors
#[derive(Error, Debug, Clone)]
pub enum PlaygroundError {
    /// File system I/O error
    #[error("IO error: {0}")]
    IOError(String),

    /// The preset store file exists but cannot be decoded
    #[error("Preset store corrupt: {0}")]
    StoreCorrupt(String),

    /// Encoding presets or configuration failed
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for PlaygroundError {
    fn from(e: std::io::Error) -> Self {
        PlaygroundError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for PlaygroundError {
    fn from(e: serde_json::Error) -> Self {
        PlaygroundError::SerializationError(e.to_string())
    }
}

impl PlaygroundError {
    /// Check if this error is recoverable
    ///
    /// Recoverable errors leave the in-memory state usable; the next write
    /// retries persistence.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // A full disk or missing permission may clear up
            PlaygroundError::IOError(_) => true,
            // The file needs to be fixed or removed by the user
            PlaygroundError::StoreCorrupt(_) => false,
            PlaygroundError::SerializationError(_) => true,
            PlaygroundError::ConfigError(_) => false,
        }
    }

    /// Get a user-friendly description of the error
    pub fn user_message(&self) -> String {
        match self {
            PlaygroundError::IOError(_) => {
                "Could not save presets. Changes are kept until the app closes.".to_string()
            }
            PlaygroundError::StoreCorrupt(_) => {
                "The preset file was damaged. A copy was saved next to it.".to_string()
            }
            PlaygroundError::SerializationError(_) => {
                "Could not encode presets. Please try again.".to_string()
            }
            PlaygroundError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
        }
    }
}

/// Result type alias for Animation Playground operations
pub type Result<T> = std::result::Result<T, PlaygroundError>;
