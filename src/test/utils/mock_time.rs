use crate::time::TimeProvider;
use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

/// Simulated clock: `sleep` advances it and is recorded, `tick` advances it by a fixed step.
#[derive(Debug)]
pub struct MockTimeProvider {
    current_ms: Arc<AtomicU64>,
    tick_ms: u64,
    sleeps: Mutex<Vec<Duration>>,
}

impl MockTimeProvider {
    pub fn new(start_ms: u64) -> Self {
        Self::with_tick(start_ms, 1)
    }

    pub fn with_tick(start_ms: u64, tick_ms: u64) -> Self {
        Self { current_ms: Arc::new(AtomicU64::new(start_ms)), tick_ms, sleeps: Mutex::new(Vec::new()) }
    }

    pub fn advance_time(&self, ms: u64) {
        self.current_ms.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, new_time: u64) {
        self.current_ms.store(new_time, Ordering::SeqCst)
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TimeProvider for MockTimeProvider {
    fn now_ms(&self) -> u64 {
        self.current_ms.load(Ordering::SeqCst)
    }

    async fn sleep(&self, duration: Duration) {
        if let Ok(mut sleeps) = self.sleeps.lock() {
            sleeps.push(duration);
        }
        self.advance_time(duration.as_millis() as u64);
    }

    async fn tick(&self) {
        self.advance_time(self.tick_ms);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn sleep_and_tick_advance() {
        let time = MockTimeProvider::with_tick(100, 5);
        time.sleep(Duration::from_millis(500)).await;
        time.tick().await;
        assert_eq!(time.now_ms(), 605);
        assert_eq!(time.sleeps(), vec![Duration::from_millis(500)]);
    }
}
