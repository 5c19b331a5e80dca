use crate::config::Schedule;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Backoff {
    Fixed(Duration),
    Exponential { initial: Duration, factor: u32, max: Duration },
}

/// How long to wait between attempts and when to stop trying.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    /// total attempts including the first, None for no limit
    pub max_attempts: Option<u32>,
    pub backoff: Backoff,
}

impl RetryPolicy {
    pub fn unbounded(delay: Duration) -> Self {
        Self { max_attempts: None, backoff: Backoff::Fixed(delay) }
    }

    /// Tests use this to retry without waiting.
    pub fn immediate() -> Self {
        Self::unbounded(Duration::ZERO)
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn reconnect(cfg: &Schedule) -> Self {
        let initial = Duration::from_millis(cfg.reconnect_delay_ms);
        let backoff = if cfg.reconnect_backoff_factor > 1 {
            Backoff::Exponential {
                initial,
                factor: cfg.reconnect_backoff_factor,
                max: Duration::from_millis(cfg.reconnect_max_delay_ms),
            }
        } else {
            Backoff::Fixed(initial)
        };
        Self { max_attempts: cfg.reconnect_max_attempts, backoff }
    }

    pub fn associate(cfg: &Schedule) -> Self {
        Self {
            max_attempts: cfg.associate_max_attempts,
            backoff: Backoff::Fixed(Duration::from_millis(cfg.associate_delay_ms)),
        }
    }

    /// Delay to wait after the `retry`-th failure (1 based).
    pub fn delay(&self, retry: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed(d) => d,
            Backoff::Exponential { initial, factor, max } => {
                let exp = retry.saturating_sub(1);
                let mult = factor.checked_pow(exp).unwrap_or(u32::MAX);
                initial.checked_mul(mult).unwrap_or(max).min(max)
            }
        }
    }

    pub fn delays(&self) -> RetryDelays {
        RetryDelays { policy: *self, retries: 0 }
    }
}

/// Yields the wait before each retry; runs dry when the attempt budget is spent.
#[derive(Clone, Debug)]
pub struct RetryDelays {
    policy: RetryPolicy,
    retries: u32,
}

impl RetryDelays {
    /// Retries handed out so far.
    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn attempts(&self) -> u32 {
        self.retries + 1
    }
}

impl Iterator for RetryDelays {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.policy.max_attempts.is_some_and(|max| self.attempts() >= max) {
            return None;
        }
        self.retries += 1;
        Some(self.policy.delay(self.retries))
    }
}
