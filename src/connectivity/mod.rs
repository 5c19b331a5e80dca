pub mod interface;
pub mod mqtt;
pub mod network;
pub mod retry;
pub mod supervisor;
