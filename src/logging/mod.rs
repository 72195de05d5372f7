//! Logging initialization with environment-based formatters
//!
//! - Production: Structured JSON logs for log aggregation
//! - Sandbox: Colorful, human-readable logs for development

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info";

pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging() {
    let layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    let result = if is_production(&get_environment()) {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(layer.with_ansi(true))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
