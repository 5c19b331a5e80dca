use super::interface::{CharDisplay, Indicators};
use crate::config::Actuation;
use tracing::{debug, info};

pub const LCD_COLS: usize = 20;
pub const LCD_ROWS: usize = 4;

/// 20x4 character buffer that mirrors what an I2C LCD would show and logs every write.
#[derive(Debug, Clone)]
pub struct ConsoleLcd {
    rows: [String; LCD_ROWS],
    col: usize,
    row: usize,
}

impl ConsoleLcd {
    pub fn new() -> Self {
        Self { rows: Default::default(), col: 0, row: 0 }
    }

    pub fn lines(&self) -> &[String; LCD_ROWS] {
        &self.rows
    }
}

impl Default for ConsoleLcd {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay for ConsoleLcd {
    fn clear(&mut self) {
        self.rows.iter_mut().for_each(String::clear);
        self.col = 0;
        self.row = 0;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = (col as usize).min(LCD_COLS);
        self.row = (row as usize).min(LCD_ROWS - 1);
    }

    fn print(&mut self, text: &str) {
        let line = &mut self.rows[self.row];
        let mut chars: Vec<char> = line.chars().collect();
        if chars.len() < self.col {
            chars.resize(self.col, ' ');
        }
        for c in text.chars() {
            if self.col >= LCD_COLS {
                break;
            }
            if self.col < chars.len() {
                chars[self.col] = c;
            } else {
                chars.push(c);
            }
            self.col += 1;
        }
        *line = chars.into_iter().collect();
        debug!(row = self.row, text = %self.rows[self.row], "lcd");
    }
}

/// Logs indicator transitions, tagged with the pin each output is wired to, instead of driving pins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogIndicators {
    pub red_pin: u8,
    pub green_pin: u8,
    pub buzzer_pin: u8,
    pub red: bool,
    pub green: bool,
    pub duty: u8,
    pub freq_hz: u32,
}

impl LogIndicators {
    pub fn new(cfg: &Actuation) -> Self {
        Self {
            red_pin: cfg.red_pin,
            green_pin: cfg.green_pin,
            buzzer_pin: cfg.buzzer_pin,
            red: false,
            green: false,
            duty: 0,
            freq_hz: 0,
        }
    }
}

impl Default for LogIndicators {
    fn default() -> Self {
        Self::new(&Actuation::default())
    }
}

impl Indicators for LogIndicators {
    fn configure_buzzer(&mut self, freq_hz: u32, resolution_bits: u8) {
        self.freq_hz = freq_hz;
        info!(
            pin = self.buzzer_pin,
            freq_hz,
            resolution_bits,
            red_pin = self.red_pin,
            green_pin = self.green_pin,
            "Buzzer configured."
        );
    }

    fn set_red(&mut self, on: bool) {
        if self.red != on {
            debug!(led = "red", pin = self.red_pin, on);
        }
        self.red = on;
    }

    fn set_green(&mut self, on: bool) {
        if self.green != on {
            debug!(led = "green", pin = self.green_pin, on);
        }
        self.green = on;
    }

    fn set_buzzer_duty(&mut self, duty: u8) {
        if self.duty != duty {
            debug!(pin = self.buzzer_pin, buzzer_duty = duty);
        }
        self.duty = duty;
    }
}
