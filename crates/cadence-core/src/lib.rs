//! Cadence shared configuration, error types and defaults.

pub mod config;
pub mod constants;
pub mod error;
