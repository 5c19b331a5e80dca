use crate::{
    config::Config, connectivity::interface::Transport, error::AppError, health::ReadingSet,
};
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetryPayload {
    pub temp: f32,
    pub hum: f32,
    pub moist: i32,
    pub ph: f32,
    pub n: i32,
    pub p: i32,
    pub k: i32,
    pub water: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryDoc<'a> {
    pub id: &'a str,
    pub ts: u64,
    pub lat: f64,
    pub lon: f64,
    pub message: &'a str,
    pub payload: TelemetryPayload,
}

impl<'a> TelemetryDoc<'a> {
    pub fn new(cfg: &'a Config, set: &ReadingSet, ts: u64) -> Self {
        let r = &set.readings;
        Self {
            id: &cfg.node.id,
            ts,
            lat: cfg.node.latitude,
            lon: cfg.node.longitude,
            message: set.classification.message(),
            payload: TelemetryPayload {
                temp: r.temperature,
                hum: r.humidity,
                moist: r.soil_moisture,
                ph: r.soil_ph,
                n: r.nitrogen,
                p: r.phosphorus,
                k: r.potassium,
                water: r.water_level,
            },
        }
    }

    /// Serializes into at most `max_len` bytes. Non-finite floats come out as `null`.
    pub fn to_bytes(&self, max_len: usize) -> Result<Vec<u8>, AppError> {
        let bytes = serde_json::to_vec(self)?;
        if bytes.len() > max_len {
            return Err(AppError::PayloadTooLarge { len: bytes.len(), max: max_len });
        }
        Ok(bytes)
    }
}

/// Builds the document and hands it to the transport. The publish outcome is only logged;
/// the next cycle's connection check is the sole recovery path.
pub async fn publish<T: Transport + ?Sized>(
    transport: &mut T, cfg: &Config, set: &ReadingSet, ts: u64,
) -> Result<Vec<u8>, AppError> {
    let bytes = TelemetryDoc::new(cfg, set, ts).to_bytes(cfg.telemetry.max_len).inspect_err(|e| {
        warn!(event = "telemetry_dropped", error = %e);
    })?;
    info!("{}", String::from_utf8_lossy(&bytes));
    let accepted = transport.publish(&cfg.mqtt.topic, &bytes).await;
    debug!(event = "published", topic = %cfg.mqtt.topic, accepted);
    Ok(bytes)
}
