pub mod mock_actuators;
pub mod mock_network;
pub mod mock_sensors;
pub mod mock_time;
pub mod mock_transport;

use crate::{
    actuation::console::{ConsoleLcd, LogIndicators},
    config::Config,
    node::Node,
    time::TimeProvider,
};
use mock_sensors::MockSensorHal;
use mock_time::MockTimeProvider;
use mock_transport::MockTransport;
use std::sync::Arc;

pub type MockNode = Node<MockSensorHal, LogIndicators, ConsoleLcd, MockTransport>;

/// Node over mocks, with the reconnect wait kept so tests can observe it on the simulated clock.
pub fn set_node(cfg: Config, hal: MockSensorHal, transport: MockTransport) -> (MockNode, Arc<MockTimeProvider>) {
    let time_provider = Arc::new(MockTimeProvider::new(0));
    let clock: Arc<dyn TimeProvider> = time_provider.clone();
    let indicators = LogIndicators::new(&cfg.actuation);
    let node = Node::new(cfg, hal, indicators, ConsoleLcd::new(), transport, clock);
    (node, time_provider)
}
