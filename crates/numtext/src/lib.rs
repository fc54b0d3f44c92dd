//! numtext command-line front end.
//!
//! Owns process startup for the conversion core: resolves separators from
//! flags and the environment, installs tracing, and dispatches commands.

use std::sync::Once;

pub mod commands;
pub mod config;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Call this once at startup, before anything else installs a global
/// subscriber. Later calls are no-ops.
/// Enable with `RUST_LOG=numtext=debug` or `RUST_LOG=numtext_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
