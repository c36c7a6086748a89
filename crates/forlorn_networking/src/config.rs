//! # Client Configuration
//!
//! Loaded once at startup from a TOML file. Every key is optional.
//!
//! ```toml
//! name = "kestrel"
//! log_filter = "forlorn_networking=debug"
//!
//! [feed]
//! channel_capacity = 64
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings for the background decode worker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Raw frames that may wait for the worker before senders block.
    pub channel_capacity: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { channel_capacity: 64 }
    }
}

/// Top-level client settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Name the bot plays under; used to find itself in game states.
    pub name: String,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Decode worker settings.
    pub feed: FeedConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            name: "forlorn".to_string(),
            log_filter: "info".to_string(),
            feed: FeedConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
