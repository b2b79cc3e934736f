//! Tracing setup for the `budget` binary
//!
//! Log lines go to stderr so command output on stdout stays clean. The filter
//! is read from `BUDGET_LOG` (same syntax as `RUST_LOG`) and defaults to
//! `warn`.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BUDGET_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        // A subscriber may already be installed by an embedding application
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init_tracing();
        super::init_tracing();
    }
}
