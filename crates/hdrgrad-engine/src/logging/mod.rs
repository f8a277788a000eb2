//! Logging utilities.
//!
//! Centralizes logger initialization for the demo binary and for hosts that
//! do not bring their own backend. Library code only talks to the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
