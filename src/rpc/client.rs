//! HTTP client for the agent's JSON-RPC endpoint

use serde_json::Value;

use crate::common::{Result, RunnerConfig};

use super::protocol::JsonRpcRequest;

/// Prefix `https://` onto an agent URL that carries no scheme
pub fn normalize_agent_url(agent_url: &str) -> String {
    if agent_url.starts_with("http://") || agent_url.starts_with("https://") {
        agent_url.to_string()
    } else {
        format!("https://{agent_url}")
    }
}

/// Client posting JSON-RPC requests to a single agent
pub struct RpcClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RpcClient {
    /// Build a client for `agent_url`, which must already be normalized
    pub fn new(agent_url: &str, config: &RunnerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let endpoint = format!(
            "{}/{}",
            agent_url.trim_end_matches('/'),
            config.endpoint_path.trim_start_matches('/')
        );

        Ok(Self { http, endpoint })
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a request and parse whatever JSON comes back
    ///
    /// Non-success statuses are reported as request errors without looking
    /// at the body.
    pub async fn call(&self, request: &JsonRpcRequest<'_>) -> Result<Value> {
        tracing::debug!(
            endpoint = %self.endpoint,
            method = request.method,
            id = request.id,
            "Sending JSON-RPC request"
        );

        // .json() also sets Content-Type: application/json
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let status = response.status();
        let body = response.text().await?;
        tracing::trace!(%status, bytes = body.len(), "Received response");

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_https_when_scheme_missing() {
        assert_eq!(normalize_agent_url("example.com"), "https://example.com");
        assert_eq!(
            normalize_agent_url("judge.herokuapp.com:8443"),
            "https://judge.herokuapp.com:8443"
        );
    }

    #[test]
    fn normalize_keeps_explicit_scheme() {
        assert_eq!(normalize_agent_url("http://localhost:9000"), "http://localhost:9000");
        assert_eq!(normalize_agent_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn endpoint_appends_jsonrpc_path() {
        let config = RunnerConfig::default();
        let client = RpcClient::new("http://localhost:9000", &config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9000/jsonrpc");

        let client = RpcClient::new("https://example.com/", &config).unwrap();
        assert_eq!(client.endpoint(), "https://example.com/jsonrpc");
    }
}
