//! Request execution with deadline and error normalization

use reqwest::{multipart::Form, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use toolgate_domain::{ApiError, ClientConfig, ErrorCode, RequestOutcome};
use tracing::{debug, warn};

/// Wall-clock budget for one outbound call, in milliseconds.
pub const REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Body of an outbound request.
///
/// JSON bodies get an explicit `application/json` content type; multipart
/// bodies leave the content type to the transport, which sets its own
/// boundary header.
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Form),
}

/// Error object the remote API may attach to a failure response.
///
/// Decoded defensively: both fields are optional and absent fields fall
/// back to local defaults, so a server that changes its error schema
/// degrades the message, not the call.
#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// HTTP client bound to one remote API.
///
/// Holds the immutable [`ClientConfig`] and a pooled `reqwest::Client`;
/// both are cheap to clone and safe to share across concurrent calls.
/// Each call owns its own deadline, so a timeout aborts only its own
/// in-flight request.
#[derive(Debug, Clone)]
pub struct RequestClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    deadline: Duration,
}

impl RequestClient {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self::with_deadline(config, Duration::from_millis(REQUEST_TIMEOUT_MS))
    }

    /// Build a client with a custom per-call deadline.
    pub fn with_deadline(config: Arc<ClientConfig>, deadline: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            deadline,
        }
    }

    /// Perform exactly one outbound call.
    ///
    /// State machine per call: `Idle -> Sent -> {Completed | TimedOut |
    /// NetworkFailed | ParseFailed}`; every right-hand state is terminal
    /// and there are no retries. The deadline timer is armed before the
    /// request is issued and cancelled on every exit path.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> RequestOutcome<T> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            warn!("refusing outbound call: no API key configured");
            return RequestOutcome::failure(ApiError::missing_api_key());
        };

        let url = self.config.endpoint(path);
        debug!("sending {} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(api_key);
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        // The deadline token is the single cancellation authority for this
        // call: a timer task trips it, and the select below treats the trip
        // as terminal regardless of what the transport is doing.
        let cancel = CancellationToken::new();
        let timer = tokio::spawn({
            let cancel = cancel.clone();
            let deadline = self.deadline;
            async move {
                tokio::time::sleep(deadline).await;
                cancel.cancel();
            }
        });

        let call = async {
            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    warn!("transport failure for {}: {}", url, e);
                    return RequestOutcome::failure(ApiError::network(e.to_string()));
                }
            };

            let status = response.status().as_u16();
            let success = response.status().is_success();

            let bytes = match response.bytes().await {
                Ok(b) => b,
                Err(e) => {
                    warn!("failed to read response body from {}: {}", url, e);
                    return RequestOutcome::failure(ApiError::network(e.to_string()));
                }
            };

            decode_response(status, success, &bytes)
        };

        let outcome = tokio::select! {
            _ = cancel.cancelled() => {
                warn!("request to {} exceeded {} ms deadline", url, self.deadline.as_millis());
                RequestOutcome::failure(ApiError::timeout(self.deadline.as_millis() as u64))
            }
            outcome = call => outcome,
        };

        // Cancel the timer on every exit path; a completed call must not
        // leave a pending wakeup behind.
        timer.abort();
        outcome
    }

    /// GET without a body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> RequestOutcome<T> {
        self.send(Method::GET, path, RequestBody::Empty).await
    }

    /// POST with a JSON body.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> RequestOutcome<T> {
        self.send(Method::POST, path, RequestBody::Json(body)).await
    }

    /// POST with a multipart form body.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> RequestOutcome<T> {
        self.send(Method::POST, path, RequestBody::Multipart(form))
            .await
    }
}

/// Map a completed transport exchange onto the closed taxonomy.
fn decode_response<T: DeserializeOwned>(
    status: u16,
    success: bool,
    bytes: &[u8],
) -> RequestOutcome<T> {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(v) => v,
        Err(e) => {
            return RequestOutcome::failure(ApiError::json_parse(
                status,
                format!("response body is not valid JSON: {e}"),
            ));
        }
    };

    if !success {
        let body: ErrorBody = serde_json::from_value(value).unwrap_or_default();
        let code = body
            .code
            .map(|c| ErrorCode::from(c.as_str()))
            .unwrap_or(ErrorCode::ApiError);
        let message = body
            .message
            .unwrap_or_else(|| format!("API request failed with status {status}"));
        return RequestOutcome::failure(ApiError::new(code, message, status));
    }

    match serde_json::from_value(value) {
        Ok(payload) => RequestOutcome::success(payload),
        Err(e) => RequestOutcome::failure(ApiError::json_parse(
            status,
            format!("response body does not match the expected shape: {e}"),
        )),
    }
}
