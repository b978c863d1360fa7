//! Configuration management for TableCheck

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Verbose logging level (0-3)
    pub verbose: u8,

    /// Output logs as JSON
    pub json: bool,

    /// Print buffer statistics after a run
    pub stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: 0,
            json: false,
            stats: false,
        }
    }
}

impl Config {
    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io("reading config", e))?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
