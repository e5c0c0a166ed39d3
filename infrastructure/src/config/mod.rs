//! Configuration loading
//!
//! Builds the immutable [`ClientConfig`](toolgate_domain::ClientConfig)
//! once at process start from defaults, an optional `toolgate.toml`, and
//! `TOOLGATE_`-prefixed environment variables.

mod file_config;
mod loader;

pub use file_config::{ConfigError, FileConfig};
pub use loader::ConfigLoader;
