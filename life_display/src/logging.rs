// logging.rs - tracing subscriber setup

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither RUST_LOG nor `--log-level` is given.
/// Keeps the windowing and GL crates quiet.
pub const DEFAULT_FILTER: &str = "info,eframe=warn,egui_glow=warn,egui_winit=warn,winit=warn";

/// Installs the global subscriber: console output with uptime timestamps.
///
/// `RUST_LOG` takes precedence over `level`, which takes precedence over
/// [`DEFAULT_FILTER`].
pub fn init_logging(level: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(level));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// The filter for a `--log-level` value.
pub fn filter_for(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) if !level.is_empty() => EnvFilter::new(level),
        _ => EnvFilter::new(DEFAULT_FILTER),
    }
}
