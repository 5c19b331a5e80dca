use crate::{
    actuation::{
        self,
        interface::{CharDisplay, Indicators},
    },
    config::Config,
    connectivity::{interface::Transport, retry::RetryPolicy, supervisor::Supervisor},
    error::AppError,
    health::{self, ReadingSet},
    sensors::{acquisition, interface::SensorHal},
    telemetry,
    time::TimeProvider,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

/// Everything one monitoring node owns. Collaborators are plain fields so tests can look inside after a run.
#[derive(Debug)]
pub struct Node<H, I, D, T>
where
    H: SensorHal,
    I: Indicators,
    D: CharDisplay,
    T: Transport,
{
    pub cfg: Config,
    pub sensors: H,
    pub indicators: I,
    pub display: D,
    pub transport: T,
    pub supervisor: Supervisor,
    pub time_provider: Arc<dyn TimeProvider>,
    /// start of the last completed cycle, ms since boot
    pub last_cycle: u64,
    pub cycles: u64,
}

impl<H, I, D, T> Node<H, I, D, T>
where
    H: SensorHal,
    I: Indicators,
    D: CharDisplay,
    T: Transport,
{
    pub fn new(
        cfg: Config, sensors: H, indicators: I, display: D, transport: T, time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        let supervisor = Supervisor::new(
            cfg.node.client_id.clone(),
            RetryPolicy::associate(&cfg.schedule),
            RetryPolicy::reconnect(&cfg.schedule),
        );
        let last_cycle = time_provider.now_ms();
        Self {
            cfg,
            sensors,
            indicators,
            display,
            transport,
            supervisor,
            time_provider,
            last_cycle,
            cycles: 0,
        }
    }

    /// Boot-time output setup.
    pub fn init(&mut self) {
        actuation::init(&mut self.indicators, &mut self.display, &self.cfg.actuation, &self.cfg.node.splash);
    }

    pub fn is_due(&self, now: u64) -> bool {
        now.saturating_sub(self.last_cycle) >= self.cfg.schedule.period_ms
    }

    /// One acquisition, evaluation, actuation and publication pass over a fresh reading set.
    pub async fn run_cycle(&mut self, now: u64) -> ReadingSet {
        let readings = acquisition::acquire(&mut self.sensors, &self.cfg.sensors);
        let set = health::evaluate(readings, &self.cfg.health);
        actuation::actuate(&mut self.indicators, &mut self.display, &set, &self.cfg.actuation);
        if let Err(e) = telemetry::publish(&mut self.transport, &self.cfg, &set, now).await {
            error!(event = "publish_skipped", error = %e);
        }
        self.cycles += 1;
        set
    }

    /// A single scheduler iteration: repair the connection, service it, run a cycle when one is due.
    pub async fn step(&mut self) -> Result<Option<ReadingSet>, AppError> {
        self.supervisor.ensure_connected(&mut self.transport, self.time_provider.as_ref()).await?;
        self.transport.service().await;

        let now = self.time_provider.now_ms();
        if !self.is_due(now) {
            return Ok(None);
        }
        self.last_cycle = now;
        Ok(Some(self.run_cycle(now).await))
    }
}

/// Runs the node until `stop_signal` flips or the simulated clock reaches `end_time`.
pub async fn run_node<H, I, D, T>(
    node: &mut Node<H, I, D, T>,
    stop_signal: watch::Receiver<bool>,
    end_time: Option<u64>, // Optional parameter for simulation
) -> Result<(), AppError>
where
    H: SensorHal,
    I: Indicators,
    D: CharDisplay,
    T: Transport,
{
    let mut now = node.time_provider.now_ms();
    info!(node = %node.cfg.node.id, period_ms = node.cfg.schedule.period_ms, "Starting monitoring loop.");
    while end_time.map_or(true, |end| now < end) && !*stop_signal.borrow() {
        if let Err(e) = node.step().await {
            // only bounded retry policies get here; the next iteration tries again
            error!(event = "step_failed", error = %e);
        }
        node.time_provider.tick().await;
        now = node.time_provider.now_ms();
    }
    info!(cycles = node.cycles, "Ending monitoring loop.");
    Ok(())
}
