//! Logging utilities.
//!
//! The crate logs through the `log` facade only. This module offers a
//! one-call `env_logger` setup for binaries and tools embedding the engine.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
