pub mod config;
pub mod diagnostic;
pub mod error;
pub mod telemetry;
