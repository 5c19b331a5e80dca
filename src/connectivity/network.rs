use super::interface::NetworkLink;
use async_trait::async_trait;
use tokio::net::lookup_host;
use tracing::{debug, warn};

/// On a hosted target the link counts as up once the broker name resolves.
#[derive(Debug, Clone)]
pub struct HostNetwork {
    pub host: String,
    pub port: u16,
}

impl HostNetwork {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }
}

#[async_trait]
impl NetworkLink for HostNetwork {
    async fn associate(&mut self) -> bool {
        match lookup_host((self.host.as_str(), self.port)).await {
            Ok(mut addrs) => match addrs.next() {
                Some(addr) => {
                    debug!(%addr, "Broker address resolved.");
                    true
                }
                None => false,
            },
            Err(e) => {
                warn!(host = %self.host, error = %e, "Network not ready.");
                false
            }
        }
    }
}
