//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG};

static INIT: Once = Once::new();

/// Initialize the correl tracing/logging system.
///
/// Reads the `CORREL_LOG` environment variable, e.g.
/// `CORREL_LOG=correl_core=debug`.
///
/// Falls back to `correl=warn,correl_core=warn` if `CORREL_LOG` is not set
/// or is invalid. Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Initialize tracing with an explicit filter directive (e.g. `debug`),
/// ignoring `CORREL_LOG`. Invalid directives fall back to the default filter.
pub fn init_tracing_with_filter(directive: &str) {
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
