//! Logging initialization
//!
//! Sets up a `tracing` subscriber with an environment-controlled filter.
//! The host application calls [`init`] once at startup; storage and gateway
//! internals emit structured events through `tracing` macros.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// Filter comes from `RUST_LOG` when set, otherwise defaults to `info` for
/// this crate and `warn` for everything else. Calling this more than once is
/// harmless (subsequent calls are no-ops).
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ordering_client=info,warn"));

    let fmt_layer = fmt::layer().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
