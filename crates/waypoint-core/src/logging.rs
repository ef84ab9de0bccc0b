#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature the usual `tracing` macros are re-exported
//! here (and at the crate root) so downstream crates instrument through one
//! path. With `tracing-fmt`, [`init_from_env`] installs a fmt subscriber
//! filtered by `RUST_LOG`.
//!
//! Without either feature this module is empty and instrumentation sites are
//! compiled out.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, trace, trace_span, warn};

/// Install a global fmt subscriber honoring `RUST_LOG` (default `warn`).
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-fmt")]
pub fn init_from_env() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(all(test, feature = "tracing-fmt"))]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_existing_subscriber() {
        let _first = init_from_env();
        assert!(!init_from_env());
        tracing::debug!(message = "logging.ready");
    }
}
