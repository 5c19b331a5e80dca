pub mod acquisition;
pub mod interface;
pub mod sim;

/// Full scale of the 12-bit ADC.
pub const ADC_MAX: i32 = 4095;
/// cm per µs, halved for the round trip
pub const SOUND_CM_PER_US: f32 = 0.034;
pub const PHOSPHORUS_RATIO: f32 = 0.8;
pub const POTASSIUM_RATIO: f32 = 0.5;
