use crate::actuation::interface::{CharDisplay, Indicators};
use mockall::mock;

mock! {
    #[derive(Debug)]
    pub Indicators {}

    impl Indicators for Indicators {
        fn configure_buzzer(&mut self, freq_hz: u32, resolution_bits: u8);
        fn set_red(&mut self, on: bool);
        fn set_green(&mut self, on: bool);
        fn set_buzzer_duty(&mut self, duty: u8);
    }
}

mock! {
    #[derive(Debug)]
    pub CharDisplay {}

    impl CharDisplay for CharDisplay {
        fn clear(&mut self);
        fn set_cursor(&mut self, col: u8, row: u8);
        fn print(&mut self, text: &str);
    }
}
