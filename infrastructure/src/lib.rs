//! Infrastructure layer for toolgate
//!
//! This crate contains the outbound adapters around the pure domain core:
//! the HTTP request client with its deadline handling, the configuration
//! loader, and logging initialization.

pub mod client;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use client::{RequestBody, RequestClient, REQUEST_TIMEOUT_MS};
pub use config::{ConfigError, ConfigLoader, FileConfig};
