use std::fmt::Debug;

/// Red/green status LEDs plus the PWM buzzer.
pub trait Indicators: Send + Debug {
    fn configure_buzzer(&mut self, freq_hz: u32, resolution_bits: u8);
    fn set_red(&mut self, on: bool);
    fn set_green(&mut self, on: bool);
    /// 0 silences the buzzer.
    fn set_buzzer_duty(&mut self, duty: u8);
}

/// Row/column addressed character display.
pub trait CharDisplay: Send + Debug {
    fn clear(&mut self);
    fn set_cursor(&mut self, col: u8, row: u8);
    fn print(&mut self, text: &str);
}
