use super::{
    interface::{NetworkLink, Transport},
    retry::RetryPolicy,
};
use crate::{error::AppError, time::TimeProvider};
use tracing::{info, warn};

/// Keeps the publish channel usable: joins the network once, then repairs the transport
/// connection whenever it is found down.
#[derive(Debug, Clone)]
pub struct Supervisor {
    pub client_id: String,
    pub associate_policy: RetryPolicy,
    pub reconnect_policy: RetryPolicy,
}

impl Supervisor {
    pub fn new(client_id: impl Into<String>, associate_policy: RetryPolicy, reconnect_policy: RetryPolicy) -> Self {
        Self { client_id: client_id.into(), associate_policy, reconnect_policy }
    }

    /// Blocks until the link is up. Returns the number of retries it took.
    pub async fn associate<N: NetworkLink + ?Sized>(
        &self, link: &mut N, time: &dyn TimeProvider,
    ) -> Result<u32, AppError> {
        let mut delays = self.associate_policy.delays();
        loop {
            if link.associate().await {
                info!(event = "network_up", retries = delays.retries());
                return Ok(delays.retries());
            }
            let Some(delay) = delays.next() else {
                return Err(AppError::RetryExhausted { operation: "network association", attempts: delays.attempts() });
            };
            time.sleep(delay).await;
        }
    }

    /// No-op while connected; otherwise retries `connect` under the reconnect policy.
    pub async fn ensure_connected<T: Transport + ?Sized>(
        &self, transport: &mut T, time: &dyn TimeProvider,
    ) -> Result<u32, AppError> {
        if transport.is_connected() {
            return Ok(0);
        }
        let mut delays = self.reconnect_policy.delays();
        loop {
            if transport.connect(&self.client_id).await {
                info!(event = "mqtt_connected", client_id = %self.client_id, retries = delays.retries());
                return Ok(delays.retries());
            }
            let Some(delay) = delays.next() else {
                return Err(AppError::RetryExhausted { operation: "mqtt connect", attempts: delays.attempts() });
            };
            warn!(event = "mqtt_connect_failed", retry_in_ms = delay.as_millis() as u64);
            time.sleep(delay).await;
        }
    }
}
