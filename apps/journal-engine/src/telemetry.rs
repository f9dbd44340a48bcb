//! Console tracing setup.
//!
//! `RUST_LOG` controls the filter (default: `info`).

use tracing_subscriber::EnvFilter;

/// Initialize console tracing for the binary.
///
/// Safe to call once at startup; later calls are ignored.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
