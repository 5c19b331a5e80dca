use std::fmt::Debug;

/// One reading of the combined temperature/humidity sensor. A faulted read comes back as NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientSample {
    pub temperature: f32,
    pub humidity: f32,
}

impl AmbientSample {
    pub fn fault() -> Self {
        Self { temperature: f32::NAN, humidity: f32::NAN }
    }

    pub fn is_fault(&self) -> bool {
        !self.temperature.is_finite() || !self.humidity.is_finite()
    }
}

/// Platform services the acquisition stage samples from.
pub trait SensorHal: Send + Debug {
    /// Raw 12-bit sample, 0..=4095.
    fn analog_read(&mut self, channel: u8) -> u16;
    fn read_ambient(&mut self) -> AmbientSample;
    /// Drives the ultrasonic trigger line.
    fn set_trigger(&mut self, high: bool);
    fn delay_us(&mut self, us: u32);
    /// Length of the next high pulse on the echo line in µs, 0 on timeout.
    fn pulse_in(&mut self, timeout_us: u32) -> u32;
}
