pub mod run_options;

use crate::error::AppError;
use run_options::Args;
use serde::Deserialize;
use std::fs;
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "./agrinode.toml";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Node {
    pub id: String,
    pub client_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub splash: String,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            id: "NODE-01".to_owned(),
            client_id: "Node-01-Daud".to_owned(),
            latitude: -6.92148,
            longitude: 106.92617,
            splash: "SmartFarm Node".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Mqtt {
    pub host: String,
    pub port: u16,
    pub topic: String,
    pub keep_alive_secs: u64,
    pub connect_timeout_ms: u64,
    /// upper bound spent waiting on the event loop per scheduler iteration
    pub service_budget_ms: u64,
}

impl Default for Mqtt {
    fn default() -> Self {
        Self {
            host: "broker.emqx.io".to_owned(),
            port: 1883,
            topic: "daud/smartfarm/data".to_owned(),
            keep_alive_secs: 15,
            connect_timeout_ms: 5000,
            service_budget_ms: 10,
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub period_ms: u64,
    pub reconnect_delay_ms: u64,
    /// None retries forever
    pub reconnect_max_attempts: Option<u32>,
    pub reconnect_backoff_factor: u32,
    pub reconnect_max_delay_ms: u64,
    pub associate_delay_ms: u64,
    pub associate_max_attempts: Option<u32>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            period_ms: 3000,
            reconnect_delay_ms: 5000,
            reconnect_max_attempts: None,
            reconnect_backoff_factor: 1,
            reconnect_max_delay_ms: 60_000,
            associate_delay_ms: 500,
            associate_max_attempts: None,
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Sensors {
    pub moisture_channel: u8,
    pub ph_channel: u8,
    pub npk_channel: u8,
    pub trigger_pin: u8,
    pub echo_pin: u8,
    pub trigger_pulse_us: u32,
    pub echo_timeout_us: u32,
}

impl Default for Sensors {
    fn default() -> Self {
        Self {
            moisture_channel: 5,
            ph_channel: 6,
            npk_channel: 7,
            trigger_pin: 17,
            echo_pin: 18,
            trigger_pulse_us: 10,
            echo_timeout_us: 1_000_000,
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Health {
    pub temp_min: f32,
    pub temp_max: f32,
    pub humidity_min: f32,
    pub humidity_max: f32,
    pub water_min: i32,
    pub moisture_min: i32,
    pub moisture_max: i32,
    pub ph_min: f32,
    pub ph_max: f32,
    pub nitrogen_min: i32,
    pub nitrogen_max: i32,
    /// report a non-finite temperature/humidity instead of letting it slip through the comparisons
    pub flag_ambient_fault: bool,
}

impl Default for Health {
    fn default() -> Self {
        Self {
            temp_min: 18.0,
            temp_max: 35.0,
            humidity_min: 40.0,
            humidity_max: 90.0,
            water_min: 10,
            moisture_min: 40,
            moisture_max: 85,
            ph_min: 5.5,
            ph_max: 7.5,
            nitrogen_min: 50,
            nitrogen_max: 450,
            flag_ambient_fault: true,
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Actuation {
    pub red_pin: u8,
    pub green_pin: u8,
    pub buzzer_pin: u8,
    pub buzzer_freq_hz: u32,
    pub buzzer_resolution_bits: u8,
    pub alert_duty: u8,
}

impl Default for Actuation {
    fn default() -> Self {
        Self { red_pin: 12, green_pin: 13, buzzer_pin: 14, buzzer_freq_hz: 2000, buzzer_resolution_bits: 8, alert_duty: 128 }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Telemetry {
    pub max_len: usize,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self { max_len: 512 }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub node: Node,
    pub mqtt: Mqtt,
    pub schedule: Schedule,
    pub sensors: Sensors,
    pub health: Health,
    pub actuation: Actuation,
    pub telemetry: Telemetry,
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, AppError> {
        if let Some(cfg_str) = &args.cfg_str {
            return Self::load_from_str(cfg_str);
        }
        let Some(path) = &args.cfg_file else {
            info!("No config file given, running on built-in defaults.");
            return Ok(Self::default());
        };
        let config_content = fs::read_to_string(path)?;
        let config = Self::load_from_str(&config_content)?;
        info!(file = %path.display(), "Configuration loaded.");
        Ok(config)
    }

    pub fn load_from_str(config_str: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(config_str)?)
    }

    /// Falls back to defaults when the file can't be used; the node must come up regardless.
    pub fn load_or_default(args: &Args) -> Self {
        Self::load(args).unwrap_or_else(|e| {
            warn!("Unable to load config ({}). Proceeding with defaults.", e);
            Self::default()
        })
    }
}
