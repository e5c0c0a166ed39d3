//! API error taxonomy
//!
//! Closed enumeration of everything that can go wrong between the tool
//! boundary and the remote API, each member carrying a machine-readable
//! code, a human-readable message, and the HTTP status involved.
//! `status == 0` means the failure happened at the transport level and no
//! HTTP status was ever received.
//!
//! | Code | Meaning | Status |
//! |------|---------|--------|
//! | `MISSING_API_KEY` | no credential configured | 401 |
//! | `FORBIDDEN_URL` | URL guard rejected the target | 403 (pre-network) |
//! | `TIMEOUT` | deadline elapsed before completion | 0 |
//! | `NETWORK_ERROR` | transport-level failure | 0 |
//! | `JSON_PARSE_ERROR` | response body not decodable | actual HTTP status |
//! | `API_ERROR` | remote API returned a failure status | actual HTTP status |

use serde::{Deserialize, Serialize};

/// Machine-readable error code.
///
/// `Other` carries a server-supplied code verbatim so a remote error can
/// round-trip to the caller without widening the local taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingApiKey,
    ForbiddenUrl,
    Timeout,
    NetworkError,
    JsonParseError,
    ApiError,
    /// Server-supplied code that is none of the above
    #[serde(untagged)]
    Other(String),
}

impl ErrorCode {
    /// The code as it appears on the wire and in logs
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::MissingApiKey => "MISSING_API_KEY",
            ErrorCode::ForbiddenUrl => "FORBIDDEN_URL",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::JsonParseError => "JSON_PARSE_ERROR",
            ErrorCode::ApiError => "API_ERROR",
            ErrorCode::Other(code) => code,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "MISSING_API_KEY" => ErrorCode::MissingApiKey,
            "FORBIDDEN_URL" => ErrorCode::ForbiddenUrl,
            "TIMEOUT" => ErrorCode::Timeout,
            "NETWORK_ERROR" => ErrorCode::NetworkError,
            "JSON_PARSE_ERROR" => ErrorCode::JsonParseError,
            "API_ERROR" => ErrorCode::ApiError,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error reported by the request boundary.
///
/// Always data, never a panic: every failure mode of the outbound call is
/// representable here and returned to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// HTTP status received, or 0 for transport-level failures
    pub status: u16,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>, status: u16) -> Self {
        Self {
            code,
            message: message.into(),
            status,
        }
    }

    // Common error constructors
    pub fn missing_api_key() -> Self {
        Self::new(
            ErrorCode::MissingApiKey,
            "no API key is configured",
            401,
        )
    }

    pub fn forbidden_url(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ForbiddenUrl,
            format!("URL is not allowed: {}", reason.into()),
            403,
        )
    }

    pub fn timeout(budget_ms: u64) -> Self {
        Self::new(
            ErrorCode::Timeout,
            format!("request exceeded the {budget_ms} ms deadline"),
            0,
        )
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, message, 0)
    }

    pub fn json_parse(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::JsonParseError, message, status)
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiError, message, status)
    }

    /// True when the failure happened before or below HTTP (no status seen)
    pub fn is_transport(&self) -> bool {
        self.status == 0
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if self.status != 0 {
            write!(f, " (HTTP {})", self.status)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
