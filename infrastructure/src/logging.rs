//! Logging initialization
//!
//! Thin wrapper over `tracing_subscriber` for binaries embedding this
//! core. Library code only emits `tracing` events and never installs a
//! subscriber on its own.

use tracing_subscriber::EnvFilter;

/// Initialize logging for the given verbosity level.
///
/// 0 = warn, 1 = info, 2 = debug, 3+ = trace. `RUST_LOG` is not consulted;
/// the caller owns the level. Safe to call more than once: later calls
/// are no-ops.
pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
