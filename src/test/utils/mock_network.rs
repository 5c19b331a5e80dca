use crate::connectivity::interface::NetworkLink;
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct MockNetwork {
    pub failures_left: usize,
    pub attempts: usize,
}

impl MockNetwork {
    pub fn failing(failures: usize) -> Self {
        Self { failures_left: failures, attempts: 0 }
    }
}

#[async_trait]
impl NetworkLink for MockNetwork {
    async fn associate(&mut self) -> bool {
        self.attempts += 1;
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return false;
        }
        true
    }
}
