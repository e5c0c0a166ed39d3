//! Domain layer for toolgate
//!
//! This crate contains the pure core of the tool server boundary: URL and
//! path validation, the API error taxonomy, and the immutable client
//! configuration. It has no dependencies on infrastructure concerns and
//! performs no I/O.
//!
//! # Core Concepts
//!
//! ## Boundary defense
//!
//! Caller-supplied inputs cross two pure checkpoints before any network
//! activity happens:
//!
//! - **URL guard**: classifies a URL as fetchable or forbidden (SSRF defense)
//! - **Path sanitizer**: normalizes a storage path into a traversal-free form
//!
//! Both are total functions. Malformed input produces a verdict or a
//! degraded-but-safe value, never a panic or an error.
//!
//! ## Closed error surface
//!
//! Every failure the outbound client can produce is representable as an
//! [`ApiError`] with a code from the closed [`ErrorCode`] taxonomy, carried
//! inside a [`RequestOutcome`]. Nothing in this layer is fatal to the
//! process.

pub mod api;
pub mod config;
pub mod guard;

// Re-export commonly used types
pub use api::{
    error::{ApiError, ErrorCode},
    outcome::RequestOutcome,
};
pub use config::ClientConfig;
pub use guard::{path::sanitize, url::check, url::UrlVerdict};
