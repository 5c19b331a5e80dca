use super::interface::{AmbientSample, SensorHal};
use crate::config::Sensors;
use std::{f32::consts::TAU, thread, time::Duration};
use tracing::{info, trace};

/// Board stand-in for running the node off-target. Every sensor follows its own slow wave so the
/// readings wander across the health thresholds now and then.
#[derive(Debug)]
pub struct SimBoard {
    channels: Sensors,
    step: u64,
    trigger_high: bool,
    armed: bool,
    /// every n-th ambient read fails
    pub fault_every: Option<u64>,
}

impl SimBoard {
    pub fn new(channels: Sensors) -> Self {
        info!(
            moisture = channels.moisture_channel,
            ph = channels.ph_channel,
            npk = channels.npk_channel,
            trigger_pin = channels.trigger_pin,
            echo_pin = channels.echo_pin,
            "Simulated board wired."
        );
        Self { channels, step: 0, trigger_high: false, armed: false, fault_every: Some(97) }
    }

    /// Ultrasonic trigger and echo pins, in that order.
    pub fn pins(&self) -> (u8, u8) {
        (self.channels.trigger_pin, self.channels.echo_pin)
    }

    fn wave(&self, period: u64, phase: u64) -> f32 {
        ((self.step + phase) % period) as f32 / period as f32 * TAU
    }

    fn adc(&self, fraction: f32) -> u16 {
        (fraction.clamp(0.0, 1.0) * 4095.0) as u16
    }
}

impl SensorHal for SimBoard {
    fn analog_read(&mut self, channel: u8) -> u16 {
        let c = self.channels;
        let raw = if channel == c.moisture_channel {
            self.adc(0.62 + 0.3 * self.wave(70, 10).sin())
        } else if channel == c.ph_channel {
            self.adc(0.46 + 0.09 * self.wave(90, 0).sin())
        } else if channel == c.npk_channel {
            self.adc(0.5 + 0.42 * self.wave(120, 30).sin())
        } else {
            0
        };
        trace!(channel, raw, "Simulated analog read.");
        raw
    }

    fn read_ambient(&mut self) -> AmbientSample {
        self.step += 1;
        if self.fault_every.is_some_and(|n| n > 0 && self.step % n == 0) {
            return AmbientSample::fault();
        }
        AmbientSample {
            temperature: 26.0 + 10.0 * self.wave(40, 0).sin(),
            humidity: 65.0 + 20.0 * self.wave(55, 5).sin(),
        }
    }

    fn set_trigger(&mut self, high: bool) {
        trace!(pin = self.channels.trigger_pin, high);
        if self.trigger_high && !high {
            self.armed = true;
        }
        self.trigger_high = high;
    }

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(us as u64));
    }

    fn pulse_in(&mut self, timeout_us: u32) -> u32 {
        if !std::mem::take(&mut self.armed) {
            return 0;
        }
        let distance_cm = 40.0 + 35.0 * self.wave(100, 60).sin();
        let echo_us = (distance_cm * 2.0 / super::SOUND_CM_PER_US) as u32;
        trace!(pin = self.channels.echo_pin, echo_us, "Simulated echo.");
        if echo_us > timeout_us { 0 } else { echo_us }
    }
}
