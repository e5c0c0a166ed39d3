//! Outbound HTTP client
//!
//! One [`RequestClient::send`] call is one network round trip with a hard
//! deadline and a closed error surface: whatever goes wrong, the caller
//! gets a [`RequestOutcome`](toolgate_domain::RequestOutcome), never a
//! panic or a raw transport error.

mod request;

pub use request::{RequestBody, RequestClient, REQUEST_TIMEOUT_MS};
