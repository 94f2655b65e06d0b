//! Error types for backhaul-core

use thiserror::Error;

/// Result type alias using backhaul-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Backhaul
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration content
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Local directory listing failure
    #[error("Listing failed: {message}")]
    Listing { message: String },

    /// Remote index fetch or parse failure
    #[error("Remote fetch failed: {message}")]
    Fetch { message: String },

    /// Per-file transfer failure
    #[error("Download of {filename} failed: {message}")]
    Download { filename: String, message: String },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a listing error
    pub fn listing(message: impl Into<String>) -> Self {
        Self::Listing {
            message: message.into(),
        }
    }

    /// Create a remote fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a download error for a single file
    pub fn download(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Download {
            filename: filename.into(),
            message: message.into(),
        }
    }
}
