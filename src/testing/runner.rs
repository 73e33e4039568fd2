//! Test runner implementation
//!
//! Sends every test case to the agent in order and prints whatever comes
//! back. A failing case is reported and the run moves on to the next one.

use std::io::Write;

use colored::Colorize;

use crate::common::{Error, ErrorKind, Result, RunnerConfig};
use crate::rpc::{normalize_agent_url, JsonRpcRequest, ResponseKind, RpcClient};

use super::cases::{builtin_cases, TestCase};

/// Tally of case outcomes for one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub cases_run: usize,
    pub responses: usize,
    pub rpc_errors: usize,
    pub request_errors: usize,
    pub decode_errors: usize,
    pub unexpected_errors: usize,
}

impl RunSummary {
    pub fn record_response(&mut self, kind: ResponseKind) {
        self.cases_run += 1;
        self.responses += 1;
        if kind == ResponseKind::Error {
            self.rpc_errors += 1;
        }
    }

    pub fn record_failure(&mut self, kind: ErrorKind) {
        self.cases_run += 1;
        match kind {
            ErrorKind::Request => self.request_errors += 1,
            ErrorKind::JsonDecode => self.decode_errors += 1,
            ErrorKind::Unexpected => self.unexpected_errors += 1,
        }
    }

    /// Cases that never produced a printable response
    pub fn failed(&self) -> usize {
        self.request_errors + self.decode_errors + self.unexpected_errors
    }
}

/// Run the built-in cases against `agent_url`, writing the report to `out`
pub async fn run<W: Write>(
    agent_url: &str,
    config: &RunnerConfig,
    out: &mut W,
) -> Result<RunSummary> {
    run_cases(agent_url, &builtin_cases(), config, out).await
}

/// Run an arbitrary case list against `agent_url`
///
/// Only failures writing the report itself abort the run; everything that
/// goes wrong inside a case is printed and counted.
pub async fn run_cases<W: Write>(
    agent_url: &str,
    cases: &[TestCase],
    config: &RunnerConfig,
    out: &mut W,
) -> Result<RunSummary> {
    let agent_url = normalize_agent_url(agent_url);
    let client = RpcClient::new(&agent_url, config)?;

    tracing::info!(endpoint = client.endpoint(), cases = cases.len(), "Starting run");

    writeln!(out, "Testing LLM-as-a-Judge A2A Agent at {agent_url}")?;
    writeln!(out, "{}", "=".repeat(50))?;

    let mut summary = RunSummary::default();

    for (i, case) in cases.iter().enumerate() {
        let id = i as u64 + 1;

        writeln!(out, "\n{}. Testing {}...", id, case.name.bold())?;
        writeln!(out, "{}", "-".repeat(40))?;

        match run_case(&client, case, id, &mut *out).await {
            Ok(kind) => summary.record_response(kind),
            Err(e) => {
                tracing::warn!(id, method = case.method, error = %e, "Test case failed");
                writeln!(out, "{}", e.to_string().red())?;
                summary.record_failure(e.kind());
            }
        }
    }

    writeln!(out, "\n{}", "=".repeat(50))?;
    writeln!(out, "{}", format_summary(&summary))?;
    writeln!(out, "{}", "Testing complete!".green().bold())?;
    writeln!(out, "For more test cases, see {}", config.docs_reference)?;

    Ok(summary)
}

/// Send one case and print the pretty-printed response
async fn run_case<W: Write>(
    client: &RpcClient,
    case: &TestCase,
    id: u64,
    out: &mut W,
) -> Result<ResponseKind> {
    let request = JsonRpcRequest::new(case.method, &case.params, id);
    let response = client.call(&request).await?;

    let pretty = serde_json::to_string_pretty(&response)
        .map_err(|e| Error::Unexpected(format!("failed to format response: {e}")))?;
    writeln!(out, "{pretty}")?;

    Ok(ResponseKind::classify(&response))
}

fn format_summary(summary: &RunSummary) -> String {
    let failed = summary.failed();
    let failed_text = format!("{failed} failed");
    format!(
        "Summary: {} cases, {} responses ({} with JSON-RPC error), {}",
        summary.cases_run,
        summary.responses,
        summary.rpc_errors,
        if failed > 0 {
            failed_text.red().to_string()
        } else {
            failed_text
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_responses_and_failures() {
        let mut summary = RunSummary::default();
        summary.record_response(ResponseKind::Result);
        summary.record_response(ResponseKind::Error);
        summary.record_response(ResponseKind::Other);
        summary.record_failure(ErrorKind::Request);
        summary.record_failure(ErrorKind::JsonDecode);

        assert_eq!(summary.cases_run, 5);
        assert_eq!(summary.responses, 3);
        assert_eq!(summary.rpc_errors, 1);
        assert_eq!(summary.request_errors, 1);
        assert_eq!(summary.decode_errors, 1);
        assert_eq!(summary.unexpected_errors, 0);
        assert_eq!(summary.failed(), 2);
    }

    #[test]
    fn summary_line_without_failures() {
        let mut summary = RunSummary::default();
        summary.record_response(ResponseKind::Result);
        assert_eq!(
            format_summary(&summary),
            "Summary: 1 cases, 1 responses (0 with JSON-RPC error), 0 failed"
        );
    }

    #[test]
    fn request_ids_follow_case_positions() {
        let cases = builtin_cases();
        for (i, case) in cases.iter().enumerate() {
            let request = JsonRpcRequest::new(case.method, &case.params, i as u64 + 1);
            let value = serde_json::to_value(&request).unwrap();
            assert_eq!(value["jsonrpc"], "2.0");
            assert_eq!(value["id"], i as u64 + 1);
            assert_eq!(value["method"], case.method);
            assert_eq!(value["params"], case.params);
        }
    }
}
