//! Run parameters for the concurrency session, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! values the original exercises hard-coded.
//!
//! ```toml
//! [ticker]
//! interval_ms = 500
//! timeout_ms = 10000
//!
//! [workers]
//! count = 10
//! work_ms = 1000
//!
//! [counter]
//! increments = 1000
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TickerConfig {
    pub interval_ms: u64,
    pub timeout_ms: u64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            timeout_ms: 10_000,
        }
    }
}

impl TickerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkerConfig {
    pub count: usize,
    pub work_ms: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            count: 10,
            work_ms: 1_000,
        }
    }
}

impl WorkerConfig {
    pub fn work(&self) -> Duration {
        Duration::from_millis(self.work_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    pub increments: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { increments: 1_000 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub ticker: TickerConfig,
    pub workers: WorkerConfig,
    pub counter: CounterConfig,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if given; `None` yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // A zero period would make the ticker spin.
        if self.ticker.interval_ms == 0 {
            return Err(ConfigError::invalid("ticker.interval_ms", "must be positive"));
        }
        if self.ticker.timeout_ms == 0 {
            return Err(ConfigError::invalid("ticker.timeout_ms", "must be positive"));
        }
        Ok(())
    }
}
