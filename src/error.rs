//! Error types for TableCheck

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias for TableCheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for TableCheck
#[derive(Error, Debug)]
pub enum Error {
    /// Working-buffer acquisition failed
    #[error("Failed to allocate {what} ({requested} bytes)")]
    Allocation {
        what: String,
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// I/O errors (reading input files, config files)
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create an allocation error with context
    pub fn allocation(what: impl Into<String>, requested: usize, source: TryReserveError) -> Self {
        Self::Allocation {
            what: what.into(),
            requested,
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: format!("TOML parse error: {}", err),
        }
    }
}
