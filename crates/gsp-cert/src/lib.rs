pub mod certificate;
pub mod config;
pub mod error;
pub mod telemetry;
