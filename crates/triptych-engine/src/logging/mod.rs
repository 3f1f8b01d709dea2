//! Logging utilities.
//!
//! Centralizes logger initialization so every binary in the workspace gets
//! the same `log` + `env_logger` setup from one call in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
