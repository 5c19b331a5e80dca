use super::Cause;
use crate::{config::Health, sensors::acquisition::Readings};

/// A cause paired with the check that detects it.
#[derive(Clone, Copy)]
pub struct Rule {
    pub cause: Cause,
    pub violated: fn(&Readings, &Health) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("cause", &self.cause).finish()
    }
}

fn outside(value: f32, min: f32, max: f32) -> bool {
    value < min || value > max
}

/// Ordered by priority. Only the first violated rule is ever reported.
pub const RULES: [Rule; 9] = [
    Rule {
        cause: Cause::AmbientSensorFault,
        violated: |r, h| h.flag_ambient_fault && r.ambient().is_fault(),
    },
    Rule { cause: Cause::ExtremeTemperature, violated: |r, h| outside(r.temperature, h.temp_min, h.temp_max) },
    Rule { cause: Cause::HumidityNotIdeal, violated: |r, h| outside(r.humidity, h.humidity_min, h.humidity_max) },
    Rule { cause: Cause::WaterSupplyCritical, violated: |r, h| r.water_level < h.water_min },
    Rule { cause: Cause::SoilTooDry, violated: |r, h| r.soil_moisture < h.moisture_min },
    Rule { cause: Cause::SoilTooWet, violated: |r, h| r.soil_moisture > h.moisture_max },
    Rule { cause: Cause::SoilPhNotIdeal, violated: |r, h| outside(r.soil_ph, h.ph_min, h.ph_max) },
    Rule { cause: Cause::LowNutrient, violated: |r, h| r.nitrogen < h.nitrogen_min },
    Rule { cause: Cause::OverNutrient, violated: |r, h| r.nitrogen > h.nitrogen_max },
];
