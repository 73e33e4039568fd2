//! judge-smoke - smoke tests for LLM-as-a-judge agents
//!
//! Sends a fixed list of JSON-RPC requests to an agent's `/jsonrpc`
//! endpoint and prints the raw responses for a human to inspect.

pub mod cli;
pub mod common;
pub mod rpc;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Error, ErrorKind, Result, RunnerConfig};
pub use testing::{builtin_cases, run, run_cases, RunSummary, TestCase};
