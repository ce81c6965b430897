//! Shared logging setup for consistent tracing across components

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for a component.
///
/// Respects `RUST_LOG` when set, otherwise defaults to `info` for everything
/// and `debug` for the named component. Safe to call once per process; a
/// second call is a no-op.
pub fn init(component: &str) {
    let default_filter = format!("info,{component}=debug");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
