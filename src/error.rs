use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Telemetry document too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },
    #[error("{operation} gave up after {attempts} attempts")]
    RetryExhausted { operation: &'static str, attempts: u32 },
}
