//! Tracing setup.
//!
//! The library only emits `tracing` events. Binaries and tests that want
//! to see them call [`init_tracing`] once; the filter comes from
//! `RUST_LOG` and defaults to `off`.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call repeatedly. If the host already installed a global
/// subscriber, that one is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(true))
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!("tracing initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
        assert!(INIT.is_completed());
    }
}
