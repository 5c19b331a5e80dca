use crate::connectivity::interface::Transport;
use async_trait::async_trait;
use std::collections::VecDeque;

/// Scripted transport that records every call.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// outcomes of upcoming connect calls; once empty, connects succeed
    pub connect_script: VecDeque<bool>,
    pub connected: bool,
    pub accept_publish: bool,
    pub connect_calls: Vec<String>,
    pub service_calls: usize,
    pub published: Vec<(String, Vec<u8>)>,
    /// drop the connection after this many further service calls
    pub drop_after_services: Option<usize>,
}

impl MockTransport {
    pub fn connected() -> Self {
        Self { connected: true, accept_publish: true, ..Default::default() }
    }

    /// Disconnected; the next `failures` connects fail, the one after succeeds.
    pub fn failing(failures: usize) -> Self {
        Self { connect_script: vec![false; failures].into(), accept_publish: true, ..Default::default() }
    }

    pub fn published_json(&self) -> Vec<serde_json::Value> {
        self.published.iter().filter_map(|(_, bytes)| serde_json::from_slice(bytes).ok()).collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn connect(&mut self, client_id: &str) -> bool {
        self.connect_calls.push(client_id.to_owned());
        self.connected = self.connect_script.pop_front().unwrap_or(true);
        self.connected
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn service(&mut self) {
        self.service_calls += 1;
        if let Some(left) = self.drop_after_services.as_mut() {
            if *left == 0 {
                self.connected = false;
                self.drop_after_services = None;
            } else {
                *left -= 1;
            }
        }
    }

    async fn publish(&mut self, topic: &str, payload: &[u8]) -> bool {
        self.published.push((topic.to_owned(), payload.to_vec()));
        self.accept_publish && self.connected
    }
}
