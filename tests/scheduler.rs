use agrinode::{
    config::Config,
    node::run_node,
    test::utils::{mock_sensors::healthy_hal, mock_time::MockTimeProvider, mock_transport::MockTransport, set_node},
    time::TimeProvider,
    utils::start_log,
};
use std::{sync::Arc, time::Duration};

fn timestamps(transport: &MockTransport) -> Vec<u64> {
    transport.published_json().iter().filter_map(|doc| doc["ts"].as_u64()).collect()
}

#[tokio::test]
async fn ten_cycles_three_seconds_apart() {
    let (mut node, time_provider) = set_node(Config::default(), healthy_hal(), MockTransport::connected());
    start_log(Some(time_provider.clone()));
    let (_stop_tx, stop_rx) = tokio::sync::watch::channel(false);

    run_node(&mut node, stop_rx, Some(30_001)).await.unwrap();

    let ts = timestamps(&node.transport);
    assert_eq!(ts.len(), 10);
    assert_eq!(ts[0], 3000);
    for pair in ts.windows(2) {
        assert_eq!(pair[1] - pair[0], 3000, "cycle starts {:?}", ts);
    }
    assert_eq!(node.cycles, 10);
    // servicing happens on every iteration, not only when a cycle runs
    assert_eq!(node.transport.service_calls, 30_001);
    assert_eq!(time_provider.now_ms(), 30_001);
}

#[tokio::test]
async fn coarse_clock_still_keeps_period() {
    let (mut node, _) = set_node(Config::default(), healthy_hal(), MockTransport::connected());
    let (_stop_tx, stop_rx) = tokio::sync::watch::channel(false);
    // 7 ms per iteration: cycles start on the first tick at or past each period boundary
    node.time_provider = Arc::new(MockTimeProvider::with_tick(0, 7));

    run_node(&mut node, stop_rx, Some(30_100)).await.unwrap();

    let ts = timestamps(&node.transport);
    assert_eq!(ts.len(), 10);
    for pair in ts.windows(2) {
        let gap = pair[1] - pair[0];
        assert!((3000..3007).contains(&gap), "gap {}", gap);
    }
}

#[tokio::test]
async fn reconnects_before_next_cycle() {
    let transport = MockTransport {
        connect_script: vec![false, false].into(),
        drop_after_services: Some(4500),
        ..MockTransport::connected()
    };
    let (mut node, time_provider) = set_node(Config::default(), healthy_hal(), transport);
    let (_stop_tx, stop_rx) = tokio::sync::watch::channel(false);

    run_node(&mut node, stop_rx, Some(21_000)).await.unwrap();

    assert_eq!(node.transport.connect_calls, vec!["Node-01-Daud"; 3]);
    assert_eq!(time_provider.sleeps(), vec![Duration::from_millis(5000); 2]);
    assert_eq!(timestamps(&node.transport), vec![3000, 14_501, 17_501, 20_501]);
    assert!(node.transport.connected);
}

#[tokio::test]
async fn disconnected_at_start_blocks_until_connected() {
    let (mut node, time_provider) = set_node(Config::default(), healthy_hal(), MockTransport::failing(3));
    let (_stop_tx, stop_rx) = tokio::sync::watch::channel(false);

    run_node(&mut node, stop_rx, Some(16_000)).await.unwrap();

    assert_eq!(node.transport.connect_calls.len(), 4);
    assert_eq!(time_provider.sleeps().len(), 3);
    // the first cycle runs right after the 15 s stall since it is long overdue
    assert_eq!(timestamps(&node.transport).first(), Some(&15_000));
}

#[tokio::test]
async fn stop_signal_ends_loop() {
    let (mut node, _time_provider) = set_node(Config::default(), healthy_hal(), MockTransport::connected());
    let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
    stop_tx.send(true).unwrap();

    run_node(&mut node, stop_rx, None).await.unwrap();

    assert_eq!(node.cycles, 0);
    assert_eq!(node.transport.service_calls, 0);
}

#[tokio::test]
async fn custom_period() {
    let mut cfg = Config::default();
    cfg.schedule.period_ms = 1000;
    let (mut node, _time_provider) = set_node(cfg, healthy_hal(), MockTransport::connected());
    let (_stop_tx, stop_rx) = tokio::sync::watch::channel(false);

    run_node(&mut node, stop_rx, Some(5_001)).await.unwrap();

    assert_eq!(timestamps(&node.transport), vec![1000, 2000, 3000, 4000, 5000]);
}
