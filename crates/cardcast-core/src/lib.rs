//! Shared configuration, constants and error types for `cardcast`.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod types;
