use super::{
    interface::{AmbientSample, SensorHal},
    ADC_MAX, PHOSPHORUS_RATIO, POTASSIUM_RATIO, SOUND_CM_PER_US,
};
use crate::config::Sensors;
use tracing::{debug, trace};

/// Calibrated values of one sampling cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    /// °C, NaN on sensor fault
    pub temperature: f32,
    /// % relative, NaN on sensor fault
    pub humidity: f32,
    pub soil_ph: f32,
    /// %
    pub soil_moisture: i32,
    pub nitrogen: i32,
    pub phosphorus: i32,
    pub potassium: i32,
    /// cm
    pub water_level: i32,
}

impl Readings {
    /// Builds a reading set with phosphorus and potassium derived from `nitrogen`.
    pub fn new(
        temperature: f32, humidity: f32, soil_ph: f32, soil_moisture: i32, nitrogen: i32, water_level: i32,
    ) -> Self {
        let (phosphorus, potassium) = derive_pk(nitrogen);
        Self { temperature, humidity, soil_ph, soil_moisture, nitrogen, phosphorus, potassium, water_level }
    }

    pub fn ambient(&self) -> AmbientSample {
        AmbientSample { temperature: self.temperature, humidity: self.humidity }
    }
}

/// Integer linear map, truncating toward zero. The input is clamped to its range first.
pub fn rescale(raw: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    let raw = raw.clamp(in_min, in_max);
    (raw - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

pub fn moisture_from_raw(raw: u16) -> i32 {
    rescale(raw as i32, 0, ADC_MAX, 0, 100)
}

pub fn ph_from_raw(raw: u16) -> f32 {
    rescale(raw as i32, 0, ADC_MAX, 0, 140) as f32 / 10.0
}

pub fn npk_from_raw(raw: u16) -> i32 {
    rescale(raw as i32, 0, ADC_MAX, 0, 500)
}

/// Phosphorus and potassium are reported as fixed, rounded fractions of nitrogen.
pub fn derive_pk(nitrogen: i32) -> (i32, i32) {
    let n = nitrogen as f32;
    ((n * PHOSPHORUS_RATIO).round() as i32, (n * POTASSIUM_RATIO).round() as i32)
}

pub fn distance_from_echo(echo_us: u32) -> i32 {
    (echo_us as f32 * SOUND_CM_PER_US / 2.0) as i32
}

/// Fires the ultrasonic trigger and converts the echo into a distance in cm.
pub fn measure_water_level<H: SensorHal + ?Sized>(hal: &mut H, cfg: &Sensors) -> i32 {
    hal.set_trigger(false);
    hal.delay_us(2);
    hal.set_trigger(true);
    hal.delay_us(cfg.trigger_pulse_us.max(10));
    hal.set_trigger(false);
    let echo_us = hal.pulse_in(cfg.echo_timeout_us);
    trace!(echo_us, "Echo measured.");
    distance_from_echo(echo_us)
}

/// Samples every sensor once. No retries: a faulted value is passed on as is.
pub fn acquire<H: SensorHal + ?Sized>(hal: &mut H, cfg: &Sensors) -> Readings {
    let ambient = hal.read_ambient();
    let soil_moisture = moisture_from_raw(hal.analog_read(cfg.moisture_channel));
    let soil_ph = ph_from_raw(hal.analog_read(cfg.ph_channel));
    let nitrogen = npk_from_raw(hal.analog_read(cfg.npk_channel));
    let water_level = measure_water_level(hal, cfg);

    let readings = Readings::new(ambient.temperature, ambient.humidity, soil_ph, soil_moisture, nitrogen, water_level);
    debug!(
        event = "acquired",
        temperature = readings.temperature,
        humidity = readings.humidity,
        moisture = readings.soil_moisture,
        ph = readings.soil_ph,
        nitrogen = readings.nitrogen,
        water = readings.water_level,
    );
    readings
}
