//! Tracing subscriber setup for hosts and tests.
//!
//! The engine itself only emits `tracing` events. Hosts that do not install a
//! subscriber of their own can call [`init`] once at startup; the filter is
//! read from `RUST_LOG` and falls back to [`DEFAULT_FILTER`].
//!
//! [`init`] and [`init_for_tests`] share one guard. Whichever runs first in a
//! process installs its subscriber; every later call to either is a no-op.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "drag_resize=info";

/// Shared by [`init`] and [`init_for_tests`]
static INIT: OnceCell<()> = OnceCell::new();

/// Install a global fmt subscriber. Safe to call more than once.
///
/// Does nothing if [`init_for_tests`] already ran.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        // Another subscriber may already be installed by the host
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    });
}

/// Variant for tests: routes output through the test harness writer.
///
/// Does nothing if [`init`] already ran, so the output then goes to stdout
/// at the default filter.
pub fn init_for_tests() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("drag_resize=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
