//! Process-scope configuration.
//!
//! Loaded once at startup from a JSON file:
//! ```json
//! { "hashing": { "memoryCost": 19456, "timeCost": 2, "parallelism": 1 } }
//! ```
//! Missing files and missing keys fall back to defaults. Environment
//! variables `ACCOUNT_CORE_ARGON2_MEMORY_COST`, `ACCOUNT_CORE_ARGON2_TIME_COST`
//! and `ACCOUNT_CORE_ARGON2_PARALLELISM` override the file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment override for [`HashingConfig::memory_cost`].
pub const ENV_MEMORY_COST: &str = "ACCOUNT_CORE_ARGON2_MEMORY_COST";
/// Environment override for [`HashingConfig::time_cost`].
pub const ENV_TIME_COST: &str = "ACCOUNT_CORE_ARGON2_TIME_COST";
/// Environment override for [`HashingConfig::parallelism`].
pub const ENV_PARALLELISM: &str = "ACCOUNT_CORE_ARGON2_PARALLELISM";

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for this schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An environment override is not a number.
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv {
        /// Variable name
        var: &'static str,
        /// Rejected value
        value: String,
    },
}

/// Argon2id work factor.
///
/// Defaults match the argon2 crate's recommended parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HashingConfig {
    /// Memory size in KiB.
    pub memory_cost: u32,
    /// Number of iterations.
    pub time_cost: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_cost: argon2::Params::DEFAULT_M_COST,
            time_cost: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Credential hashing parameters.
    pub hashing: HashingConfig,
}

impl Config {
    /// Loads config from `path`, then applies environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::read(path)?.with_overrides(|var| std::env::var(var).ok())
    }

    /// Reads config from `path` without environment overrides.
    ///
    /// A missing file gives the defaults.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Applies overrides from `lookup`, keyed by the `ENV_*` variable names.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let parse = |var: &'static str| -> Result<Option<u32>, ConfigError> {
            match lookup(var) {
                Some(value) => value
                    .trim()
                    .parse()
                    .map(Some)
                    .map_err(|_| ConfigError::InvalidEnv { var, value }),
                None => Ok(None),
            }
        };

        if let Some(v) = parse(ENV_MEMORY_COST)? {
            self.hashing.memory_cost = v;
        }
        if let Some(v) = parse(ENV_TIME_COST)? {
            self.hashing.time_cost = v;
        }
        if let Some(v) = parse(ENV_PARALLELISM)? {
            self.hashing.parallelism = v;
        }

        Ok(self)
    }
}
