//! Runner configuration

use std::time::Duration;

/// Settings for a smoke-test run
///
/// The binary always runs with the defaults; the fields exist so tests and
/// library callers can point the runner at slower or faster agents.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Per-request timeout
    pub request_timeout: Duration,

    /// Path of the JSON-RPC endpoint, relative to the agent base URL
    pub endpoint_path: String,

    /// Document named in the completion banner
    pub docs_reference: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(default_request_timeout_secs()),
            endpoint_path: default_endpoint_path(),
            docs_reference: default_docs_reference(),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_endpoint_path() -> String {
    "/jsonrpc".to_string()
}

fn default_docs_reference() -> String {
    "LLM_JUDGE_TESTING.md".to_string()
}

impl RunnerConfig {
    /// Same config with a different request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
