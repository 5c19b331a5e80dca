pub mod rules;

use crate::{config::Health, sensors::acquisition::Readings};
use rules::{Rule, RULES};
use std::fmt::Display;
use tracing::{debug, info};

pub const NORMAL_MESSAGE: &str = "System Normal";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cause {
    AmbientSensorFault,
    ExtremeTemperature,
    HumidityNotIdeal,
    WaterSupplyCritical,
    SoilTooDry,
    SoilTooWet,
    SoilPhNotIdeal,
    LowNutrient,
    OverNutrient,
}

impl Cause {
    pub fn message(&self) -> &'static str {
        match self {
            Cause::AmbientSensorFault => "Ambient sensor fault",
            Cause::ExtremeTemperature => "Extreme temperature",
            Cause::HumidityNotIdeal => "Humidity not ideal",
            Cause::WaterSupplyCritical => "Water supply critical",
            Cause::SoilTooDry => "Soil too dry",
            Cause::SoilTooWet => "Soil too wet",
            Cause::SoilPhNotIdeal => "Soil pH not ideal",
            Cause::LowNutrient => "Low nutrient level",
            Cause::OverNutrient => "Over nutrient detected",
        }
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Classification {
    #[default]
    Normal,
    Anomaly(Cause),
}

impl Classification {
    pub fn is_anomaly(&self) -> bool {
        matches!(self, Classification::Anomaly(_))
    }

    pub fn message(&self) -> &'static str {
        match self {
            Classification::Normal => NORMAL_MESSAGE,
            Classification::Anomaly(cause) => cause.message(),
        }
    }
}

/// The readings of one cycle together with the verdict reached on them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadingSet {
    pub readings: Readings,
    pub classification: Classification,
}

/// Walks `rules` top to bottom and reports the first one that fires.
pub fn classify(readings: &Readings, cfg: &Health, rules: &[Rule]) -> Classification {
    rules
        .iter()
        .find(|rule| (rule.violated)(readings, cfg))
        .map_or(Classification::Normal, |rule| Classification::Anomaly(rule.cause))
}

pub fn evaluate(readings: Readings, cfg: &Health) -> ReadingSet {
    let classification = classify(&readings, cfg, &RULES);
    match classification {
        Classification::Anomaly(cause) => info!(event = "anomaly", cause = %cause),
        Classification::Normal => debug!(event = "normal"),
    }
    ReadingSet { readings, classification }
}
