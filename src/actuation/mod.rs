pub mod console;
pub mod interface;

use crate::{config::Actuation, health::ReadingSet};
use interface::{CharDisplay, Indicators};

pub const ALERT_BANNER: &str = "!! ALERT !!";
pub const NORMAL_BANNER: &str = "Status: Normal";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorState {
    pub red: bool,
    pub green: bool,
    pub buzzer_duty: u8,
}

impl IndicatorState {
    pub fn for_alert(alert: bool, cfg: &Actuation) -> Self {
        if alert {
            Self { red: true, green: false, buzzer_duty: cfg.alert_duty }
        } else {
            Self { red: false, green: true, buzzer_duty: 0 }
        }
    }
}

/// Prepares the outputs once at boot and shows the splash line.
pub fn init<I, D>(indicators: &mut I, display: &mut D, cfg: &Actuation, splash: &str)
where
    I: Indicators + ?Sized,
    D: CharDisplay + ?Sized,
{
    indicators.configure_buzzer(cfg.buzzer_freq_hz, cfg.buzzer_resolution_bits);
    display.clear();
    display.set_cursor(0, 0);
    display.print(splash);
}

pub fn apply_indicators<I: Indicators + ?Sized>(indicators: &mut I, state: IndicatorState) {
    indicators.set_red(state.red);
    indicators.set_green(state.green);
    indicators.set_buzzer_duty(state.buzzer_duty);
}

/// The four status lines, top to bottom.
pub fn status_lines(set: &ReadingSet) -> [String; 4] {
    let r = &set.readings;
    let banner = if set.classification.is_anomaly() { ALERT_BANNER } else { NORMAL_BANNER };
    [
        banner.to_owned(),
        format!("T:{:.1}C H:{:.0}% W:{}", r.temperature, r.humidity, r.water_level),
        format!("Moist:{}% pH:{:.1}", r.soil_moisture, r.soil_ph),
        format!("N:{} P:{} K:{}", r.nitrogen, r.phosphorus, r.potassium),
    ]
}

pub fn render<D: CharDisplay + ?Sized>(display: &mut D, set: &ReadingSet) {
    display.clear();
    for (row, line) in status_lines(set).iter().enumerate() {
        display.set_cursor(0, row as u8);
        display.print(line);
    }
}

/// Drives every local output for one cycle. Output faults are not observable here.
pub fn actuate<I, D>(indicators: &mut I, display: &mut D, set: &ReadingSet, cfg: &Actuation) -> IndicatorState
where
    I: Indicators + ?Sized,
    D: CharDisplay + ?Sized,
{
    let state = IndicatorState::for_alert(set.classification.is_anomaly(), cfg);
    apply_indicators(indicators, state);
    render(display, set);
    state
}
