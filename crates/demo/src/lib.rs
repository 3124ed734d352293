//! Scripted console scenarios for the ticket state machine and the order pipeline.

pub mod config;
pub mod scenario;

pub use config::DemoConfig;
