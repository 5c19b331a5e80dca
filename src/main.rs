use agrinode::actuation::console::{ConsoleLcd, LogIndicators};
use agrinode::config::{run_options::get_args, Config};
use agrinode::connectivity::{mqtt::MqttTransport, network::HostNetwork};
use agrinode::node::{run_node, Node};
use agrinode::sensors::sim::SimBoard;
use agrinode::time::{RealTimeProvider, TimeProvider};
use agrinode::utils::start_log;
use std::{error::Error, sync::Arc};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let time_provider: Arc<dyn TimeProvider> = Arc::new(RealTimeProvider::new());
    start_log(Some(time_provider.clone()));

    let Some(mut args) = get_args() else {
        return Ok(());
    };
    if args.cfg_file.is_none() {
        args.cfg_file = agrinode::config::run_options::default_cfg_file();
    }
    let cfg = Config::load_or_default(&args);
    info!(node = %cfg.node.id, broker = %cfg.mqtt.host, topic = %cfg.mqtt.topic, "Starting node...");

    let mut node = Node::new(
        cfg.clone(),
        SimBoard::new(cfg.sensors),
        LogIndicators::new(&cfg.actuation),
        ConsoleLcd::new(),
        MqttTransport::new(cfg.mqtt.clone()),
        time_provider.clone(),
    );
    node.init();

    let mut link = HostNetwork::new(cfg.mqtt.host.clone(), cfg.mqtt.port);
    node.supervisor.associate(&mut link, time_provider.as_ref()).await?;

    let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping.");
            let _ = stop_tx.send(true);
        }
    });

    run_node(&mut node, stop_rx, None).await?;
    Ok(())
}
