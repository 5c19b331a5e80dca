use crate::time::{TimeProvider, UptimeFormatter};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber. With a time provider, log lines carry its uptime instead of
/// wall-clock time. Calling it twice is harmless.
pub fn start_log(time_provider: Option<Arc<dyn TimeProvider>>) {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter()).with_target(false);
    let _ = match time_provider {
        Some(time_provider) => builder.with_timer(UptimeFormatter { time_provider }).try_init(),
        None => builder.try_init(),
    };
}
