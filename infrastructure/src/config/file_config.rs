//! Raw configuration data types
//!
//! [`FileConfig`] is the exact shape of the TOML file and the environment
//! overlay. It is deserialized directly, validated, then lowered to the
//! domain [`ClientConfig`] that the request client holds for the life of
//! the process.

use crate::client::REQUEST_TIMEOUT_MS;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolgate_domain::ClientConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("base_url must be set")]
    MissingBaseUrl,

    #[error("timeout_ms cannot be 0")]
    InvalidTimeout,

    #[error("failed to load configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

/// Raw configuration from TOML and environment.
///
/// A missing `api_key` is a valid configuration: the request client
/// detects it per call and reports `MISSING_API_KEY` instead of failing
/// at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Base URL of the remote API
    pub base_url: String,
    /// Bearer credential for the remote API
    pub api_key: Option<String>,
    /// Per-call deadline in milliseconds
    pub timeout_ms: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }
}

impl FileConfig {
    /// Check invariants that figment extraction cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }

    /// Lower to the immutable domain configuration.
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone(), self.api_key.clone())
    }

    /// The per-call deadline as a `Duration`.
    pub fn deadline(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}
