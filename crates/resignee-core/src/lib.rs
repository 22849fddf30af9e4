//! Resignee intake parsing and per-system deactivation lateness rules.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
