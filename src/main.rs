//! judge-smoke - smoke tests for LLM-as-a-judge agents
//!
//! Posts every built-in test case to `<agent-url>/jsonrpc` and prints the
//! responses. Per-case failures are reported but never change the exit
//! status.

use judge_smoke::cli::{self, Cli};
use judge_smoke::common::logging;

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse_or_exit();

    match cli::execute(cli).await {
        Ok(summary) => {
            tracing::info!(
                responses = summary.responses,
                failed = summary.failed(),
                "Run finished"
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
