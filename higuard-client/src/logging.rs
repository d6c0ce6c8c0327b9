//! Opt-in `tracing` subscriber installation.
//!
//! The SDK itself only emits events; it never installs a subscriber on its
//! own. Hosts without their own tracing setup can call [`init_tracing`]
//! once at startup.

use tracing_subscriber::EnvFilter;

/// Install a formatted `tracing` subscriber for SDK diagnostics.
///
/// `verbose` lowers the default filter to `debug` so suppressed duplicates
/// show up; `RUST_LOG` always wins when set. Calling this when a subscriber
/// is already installed is a quiet no-op.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "higuard=debug" } else { "higuard=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
