use super::interface::Transport;
use crate::config::Mqtt;
use async_trait::async_trait;
use rumqttc::{AsyncClient, ConnectReturnCode, Event, EventLoop, MqttOptions, Packet, QoS};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

const REQUEST_CAPACITY: usize = 10;

/// `Transport` over a rumqttc client. The event loop is only driven from `connect` and `service`,
/// so nothing runs behind the scheduler's back.
pub struct MqttTransport {
    cfg: Mqtt,
    session: Option<(AsyncClient, EventLoop)>,
    connected: bool,
}

impl std::fmt::Debug for MqttTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MqttTransport")
            .field("host", &self.cfg.host)
            .field("port", &self.cfg.port)
            .field("connected", &self.connected)
            .finish()
    }
}

impl MqttTransport {
    pub fn new(cfg: Mqtt) -> Self {
        Self { cfg, session: None, connected: false }
    }

    fn drop_session(&mut self) {
        self.session = None;
        self.connected = false;
    }
}

#[async_trait]
impl Transport for MqttTransport {
    async fn connect(&mut self, client_id: &str) -> bool {
        let mut options = MqttOptions::new(client_id, &self.cfg.host, self.cfg.port);
        options.set_keep_alive(Duration::from_secs(self.cfg.keep_alive_secs.max(5)));
        let (client, mut eventloop) = AsyncClient::new(options, REQUEST_CAPACITY);

        let budget = Duration::from_millis(self.cfg.connect_timeout_ms);
        let result = timeout(budget, async {
            loop {
                match eventloop.poll().await {
                    Ok(Event::Incoming(Packet::ConnAck(ack))) => return Ok(ack.code),
                    Ok(event) => trace!(?event, "Waiting for CONNACK."),
                    Err(e) => return Err(e),
                }
            }
        })
        .await;

        match result {
            Ok(Ok(ConnectReturnCode::Success)) => {
                self.session = Some((client, eventloop));
                self.connected = true;
                true
            }
            Ok(Ok(code)) => {
                warn!(?code, "Broker refused the connection.");
                self.drop_session();
                false
            }
            Ok(Err(e)) => {
                warn!(error = %e, host = %self.cfg.host, "MQTT connect failed.");
                self.drop_session();
                false
            }
            Err(_) => {
                warn!(host = %self.cfg.host, timeout_ms = self.cfg.connect_timeout_ms, "MQTT connect timed out.");
                self.drop_session();
                false
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn service(&mut self) {
        let budget = Duration::from_millis(self.cfg.service_budget_ms);
        let Some((_, eventloop)) = self.session.as_mut() else {
            return;
        };
        match timeout(budget, eventloop.poll()).await {
            // idle: nothing to send or receive within the budget
            Err(_) => {}
            Ok(Ok(Event::Incoming(Packet::Disconnect))) => {
                warn!("Broker closed the session.");
                self.drop_session();
            }
            Ok(Ok(Event::Incoming(Packet::Publish(p)))) => {
                debug!(topic = %p.topic, len = p.payload.len(), "Inbound message ignored.");
            }
            Ok(Ok(event)) => trace!(?event),
            Ok(Err(e)) => {
                warn!(error = %e, "MQTT connection lost.");
                self.drop_session();
            }
        }
    }

    async fn publish(&mut self, topic: &str, payload: &[u8]) -> bool {
        let Some((client, _)) = self.session.as_ref() else {
            return false;
        };
        match client.try_publish(topic, QoS::AtMostOnce, false, payload.to_vec()) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Publish not queued.");
                false
            }
        }
    }
}
