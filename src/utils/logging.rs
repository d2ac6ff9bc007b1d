//! Logging initialization
//!
//! - Respects the RUST_LOG environment variable, which always takes precedence
//! - Falls back to a filter from configuration, then to "info"
//! - Module hosts can scope the default filter to a single module
//!
//! # Usage
//!
//! ```rust,no_run
//! use module_options::utils::init_logging;
//!
//! init_logging(None); // Uses RUST_LOG or defaults to "info"
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

fn rust_log_set() -> bool {
    std::env::var("RUST_LOG").is_ok()
}

/// Pick the filter: RUST_LOG, then the configured filter, then `fallback`
fn select_filter(filter: Option<&str>, fallback: &str) -> EnvFilter {
    if rust_log_set() {
        return EnvFilter::from_default_env();
    }
    EnvFilter::new(filter.unwrap_or(fallback))
}

/// Initialize logging
///
/// # Arguments
/// * `filter` - Optional log filter from config (e.g., "info", "module_options=debug").
///   If None, uses RUST_LOG or defaults to "info"
pub fn init_logging(filter: Option<&str>) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::env::var("NO_COLOR").is_err()),
        )
        .with(select_filter(filter, "info"))
        .init();
}

/// Initialize logging for a host running a single module
///
/// Without RUST_LOG or a configured filter, the module's target logs at info
/// and options resolution logs at debug.
pub fn init_module_logging(module_name: &str, filter: Option<&str>) {
    let default_filter = format!("{}=info,module_options::module=debug", module_name);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::env::var("NO_COLOR").is_err()),
        )
        .with(select_filter(filter, &default_filter))
        .init();
}

/// Initialize logging with JSON output, for log aggregation systems
#[cfg(feature = "json-logging")]
pub fn init_json_logging(filter: Option<&str>) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_span_list(true),
        )
        .with(select_filter(filter, "info"))
        .init();
}

/// Initialize logging from [`LoggingConfig`]
///
/// JSON output is only available with the `json-logging` feature; without it
/// the human-readable format is used.
pub fn init_logging_from_config(config: Option<&LoggingConfig>) {
    let filter = config.and_then(|c| c.filter.as_deref());

    if config.map(|c| c.json_format).unwrap_or(false) {
        #[cfg(feature = "json-logging")]
        {
            init_json_logging(filter);
        }
        #[cfg(not(feature = "json-logging"))]
        {
            init_logging(filter);
        }
    } else {
        init_logging(filter);
    }
}
