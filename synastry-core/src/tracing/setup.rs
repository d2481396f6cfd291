//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Synastry tracing/logging system.
///
/// Reads the `SYNASTRY_LOG` environment variable for per-subsystem log
/// levels. Format: `SYNASTRY_LOG=engine=debug,matrix=info,storage=warn`
///
/// Falls back to `synastry=info` if `SYNASTRY_LOG` is not set or invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SYNASTRY_LOG")
            .unwrap_or_else(|_| EnvFilter::new("synastry=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
