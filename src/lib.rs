pub mod actuation;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod health;
pub mod node;
pub mod sensors;
pub mod telemetry;
pub mod test;
pub mod time;
pub mod utils;
