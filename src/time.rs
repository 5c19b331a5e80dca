use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc, time::Duration, time::Instant};
use tracing_subscriber::fmt::time::FormatTime;

#[async_trait]
pub trait TimeProvider: Send + Sync + Debug {
    fn now_ms(&self) -> u64; // Milliseconds since process start, monotonic
    async fn sleep(&self, duration: Duration);
    /// Hands control back once per scheduler iteration.
    async fn tick(&self);
}

#[derive(Debug)]
pub struct RealTimeProvider {
    start: Instant,
}

impl RealTimeProvider {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for RealTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimeProvider for RealTimeProvider {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    async fn tick(&self) {
        tokio::task::yield_now().await;
    }
}

/// Log timestamps taken from a `TimeProvider`, shown as uptime.
pub struct UptimeFormatter {
    pub time_provider: Arc<dyn TimeProvider>,
}

impl FormatTime for UptimeFormatter {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let ms = self.time_provider.now_ms();
        let uptime = chrono::TimeDelta::milliseconds(ms as i64);
        write!(
            w,
            "+{:02}:{:02}:{:02}.{:03}",
            uptime.num_hours(),
            uptime.num_minutes() % 60,
            uptime.num_seconds() % 60,
            ms % 1000
        )
    }
}
