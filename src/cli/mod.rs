//! CLI argument handling
//!
//! The program takes exactly one positional argument. Anything else prints
//! usage and an example, then exits non-zero before any request is made.

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;

use crate::common::{Result, RunnerConfig};
use crate::testing::{self, RunSummary};

/// Exit status used for argument errors
pub const USAGE_EXIT_CODE: i32 = 1;

/// Smoke-test an LLM-as-a-judge agent over JSON-RPC
#[derive(Parser, Debug)]
#[command(name = "judge-smoke", version, long_about = None)]
#[command(after_help = EXAMPLE)]
pub struct Cli {
    /// Base URL of the agent (https:// is assumed when no scheme is given)
    pub agent_url: String,
}

const EXAMPLE: &str = "Example: judge-smoke https://your-llm-judge-agent.herokuapp.com";

/// Usage text printed on argument errors
pub fn usage() -> String {
    format!("Usage: judge-smoke <agent-url>\n{EXAMPLE}")
}

impl Cli {
    /// Parse process arguments, exiting on misuse
    ///
    /// `--help` and `--version` keep clap's behaviour.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e)
                if matches!(
                    e.kind(),
                    ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
                ) =>
            {
                e.exit()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Argument parsing failed");
                eprintln!("{}", usage());
                std::process::exit(USAGE_EXIT_CODE);
            }
        }
    }
}

/// Run the built-in cases against the agent named on the command line
pub async fn execute(cli: Cli) -> Result<RunSummary> {
    let config = RunnerConfig::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    testing::run(&cli.agent_url, &config, &mut out).await
}
