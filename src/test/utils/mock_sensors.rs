use crate::{
    config::Sensors,
    sensors::interface::{AmbientSample, SensorHal},
};
use mockall::mock;
use tracing::trace;

mock! {
    #[derive(Debug)]
    pub SensorHal {}

    impl SensorHal for SensorHal {
        fn analog_read(&mut self, channel: u8) -> u16;
        fn read_ambient(&mut self) -> AmbientSample;
        fn set_trigger(&mut self, high: bool);
        fn delay_us(&mut self, us: u32);
        fn pulse_in(&mut self, timeout_us: u32) -> u32;
    }
}

/// Raw samples for 60% moisture, pH 6.5 and nitrogen 200 with the default channel map.
pub const RAW_MOISTURE_60: u16 = 2458;
pub const RAW_PH_6_5: u16 = 1902;
pub const RAW_NPK_200: u16 = 1638;
/// Echo for a 50 cm water level.
pub const ECHO_50_CM: u32 = 2942;

/// Soil sensors at healthy values, ambient and echo as given. Any number of reads allowed.
pub fn hal_returning(temperature: f32, humidity: f32, echo_us: u32) -> MockSensorHal {
    let mut hal = MockSensorHal::new();
    hal.expect_read_ambient().times(0..).returning(move || AmbientSample { temperature, humidity });
    let channels = Sensors::default();
    hal.expect_analog_read().times(0..).returning(move |channel| {
        let raw = if channel == channels.moisture_channel {
            RAW_MOISTURE_60
        } else if channel == channels.ph_channel {
            RAW_PH_6_5
        } else if channel == channels.npk_channel {
            RAW_NPK_200
        } else {
            0
        };
        trace!("Mocked analog read {} -> {}", channel, raw);
        raw
    });
    hal.expect_set_trigger().times(0..).return_const(());
    hal.expect_delay_us().times(0..).return_const(());
    hal.expect_pulse_in().times(0..).return_const(echo_us);
    hal
}

pub fn healthy_hal() -> MockSensorHal {
    hal_returning(25.0, 60.0, ECHO_50_CM)
}
