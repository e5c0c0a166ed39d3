//! Client configuration — immutable, process-wide request settings
//!
//! Built once at process start and shared (typically via `Arc`) by every
//! concurrent request. Nothing here is mutated after construction; an
//! absent API key is a normal, detectable state rather than a startup
//! failure, so the missing-credential error can be produced lazily at
//! call time.

use serde::{Deserialize, Serialize};

/// Read-only configuration for the outbound API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the remote API, e.g. `https://api.example.com`
    pub base_url: String,
    /// Bearer credential; `None` is valid and detected per call
    pub api_key: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Whether a credential is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Join a request path onto the base URL.
    ///
    /// Tolerates a trailing slash on the base and a missing leading slash
    /// on the path, producing exactly one separator between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
