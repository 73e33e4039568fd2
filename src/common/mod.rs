//! Common utilities shared by the CLI and the runner

pub mod config;
pub mod error;
pub mod logging;

pub use config::RunnerConfig;
pub use error::{Error, ErrorKind, Result};
