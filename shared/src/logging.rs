//! Shared logging utilities for consistent tracing across the fleet service

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Default filter directives for a given base level
pub fn default_filter(base_level: &str) -> String {
    format!(
        "webserver={base_level},fleet={base_level},shared={base_level},tower_http=debug,axum={base_level}"
    )
}

/// Initialize the tracing subscriber with an optional log level
///
/// `RUST_LOG` takes precedence over the computed filter when set.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(base_level)));

    // try_init so tests and embedders can call this more than once
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Initialize tracing at the default `info` level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for mover-aware info logging
#[macro_export]
macro_rules! mover_info {
    ($mover_id:expr, $($arg:tt)*) => {
        tracing::info!(
            mover = %$mover_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for mover-aware warning logging
#[macro_export]
macro_rules! mover_warn {
    ($mover_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            mover = %$mover_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for mover-aware error logging
#[macro_export]
macro_rules! mover_error {
    ($mover_id:expr, $($arg:tt)*) => {
        tracing::error!(
            mover = %$mover_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for mover-aware debug logging
#[macro_export]
macro_rules! mover_debug {
    ($mover_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            mover = %$mover_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(service: &str, details: &str) {
    info!(
        service = service,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(service: &str, reason: &str) {
    info!(
        service = service,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(service: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = service,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(service: &str, message: &str) {
    info!(
        service = service,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
