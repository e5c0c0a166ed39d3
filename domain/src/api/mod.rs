//! API value objects — the closed error taxonomy and request outcome
//!
//! Everything the outbound client can report flows through these types.
//! The taxonomy is closed by design: callers match on [`ErrorCode`]
//! exhaustively and render [`ApiError`] without ever touching a raw
//! transport error.
//!
//! [`ErrorCode`]: error::ErrorCode
//! [`ApiError`]: error::ApiError

pub mod error;
pub mod outcome;

pub use error::{ApiError, ErrorCode};
pub use outcome::RequestOutcome;
