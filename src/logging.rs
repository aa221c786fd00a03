//! Structured logging for the `dc-srgg` binary.
//!
//! Diagnostics are written to `stderr` so the graph printed on `stdout` stays
//! parseable. The level is taken from `RUST_LOG` and defaults to `info`.

use std::sync::OnceLock;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber once; later calls are no-ops.
pub fn init_logging() -> Result<(), TryInitError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    let _ = INITIALISED.set(());
    Ok(())
}
