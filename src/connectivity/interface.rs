use async_trait::async_trait;
use std::fmt::Debug;

/// Publish channel as seen by the node.
#[async_trait]
pub trait Transport: Send + Debug {
    async fn connect(&mut self, client_id: &str) -> bool;
    fn is_connected(&self) -> bool;
    /// Keep-alives and inbound traffic. Must run on every scheduler iteration.
    async fn service(&mut self);
    async fn publish(&mut self, topic: &str, payload: &[u8]) -> bool;
}

/// Link-level association (address acquisition) done once at startup.
#[async_trait]
pub trait NetworkLink: Send + Debug {
    async fn associate(&mut self) -> bool;
}
