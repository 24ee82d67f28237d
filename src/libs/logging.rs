//! Tracing subscriber setup.
//!
//! Structured logs are only wanted while debugging, so the subscriber is
//! installed only in debug mode (see [`is_debug_mode`]). The filter comes from
//! `RUST_LOG`, defaulting to `taskkeep=debug` when only `TASKKEEP_DEBUG` is set.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "taskkeep=debug";

pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber installed earlier (tests, embedding) wins.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
