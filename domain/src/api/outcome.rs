//! Request outcome — tagged success/failure union
//!
//! One value per outbound call: either the decoded payload or an
//! [`ApiError`], never both. Retry and backoff, if a caller wants them,
//! are built on top of this type; the core never retries.

use super::error::ApiError;
use serde::{Deserialize, Serialize};

/// Result of one outbound API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RequestOutcome<T> {
    /// The call completed and the payload decoded
    Success { payload: T },
    /// The call failed; `error` says how
    Failure { error: ApiError },
}

impl<T> RequestOutcome<T> {
    pub fn success(payload: T) -> Self {
        RequestOutcome::Success { payload }
    }

    pub fn failure(error: ApiError) -> Self {
        RequestOutcome::Failure { error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success { .. })
    }

    /// Get the error, if this is a failure
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            RequestOutcome::Success { .. } => None,
            RequestOutcome::Failure { error } => Some(error),
        }
    }

    /// Convert into a plain `Result` for `?`-style composition
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            RequestOutcome::Success { payload } => Ok(payload),
            RequestOutcome::Failure { error } => Err(error),
        }
    }

    /// Transform the payload, leaving failures untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RequestOutcome<U> {
        match self {
            RequestOutcome::Success { payload } => RequestOutcome::Success {
                payload: f(payload),
            },
            RequestOutcome::Failure { error } => RequestOutcome::Failure { error },
        }
    }
}

impl<T> From<Result<T, ApiError>> for RequestOutcome<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(payload) => RequestOutcome::success(payload),
            Err(error) => RequestOutcome::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorCode;

    #[test]
    fn test_success_outcome() {
        let outcome: RequestOutcome<u32> = RequestOutcome::success(7);
        assert!(outcome.is_success());
        assert!(outcome.error().is_none());
        assert_eq!(outcome.into_result().unwrap(), 7);
    }

    #[test]
    fn test_failure_outcome() {
        let outcome: RequestOutcome<u32> = RequestOutcome::failure(ApiError::timeout(30_000));
        assert!(!outcome.is_success());
        assert_eq!(outcome.error().unwrap().code, ErrorCode::Timeout);
        assert!(outcome.into_result().is_err());
    }

    #[test]
    fn test_map_transforms_only_success() {
        let doubled = RequestOutcome::success(21).map(|n: i32| n * 2);
        assert_eq!(doubled.into_result().unwrap(), 42);

        let failed: RequestOutcome<i32> = RequestOutcome::failure(ApiError::api(500, "boom"));
        let still_failed = failed.map(|n| n * 2);
        assert_eq!(still_failed.error().unwrap().status, 500);
    }

    #[test]
    fn test_serializes_as_tagged_union() {
        let json = serde_json::to_string(&RequestOutcome::success("ok")).unwrap();
        assert!(json.contains("\"outcome\":\"success\""));

        let json =
            serde_json::to_string(&RequestOutcome::<String>::failure(ApiError::missing_api_key()))
                .unwrap();
        assert!(json.contains("\"outcome\":\"failure\""));
        assert!(json.contains("MISSING_API_KEY"));
    }
}
