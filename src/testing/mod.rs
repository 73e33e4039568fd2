//! Smoke-test runner
//!
//! A fixed table of JSON-RPC calls and the runner that sends them to an
//! agent one at a time, printing each raw response for a human to read.

mod cases;
mod runner;

pub use cases::{builtin_cases, TestCase};
pub use runner::{run, run_cases, RunSummary};
