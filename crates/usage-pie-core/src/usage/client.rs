//! Blocking HTTP client for the OAuth usage endpoint.

use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use super::types::UsageResponse;
use crate::error::UsageError;

/// API endpoint for usage limits
pub const USAGE_API_URL: &str = "https://api.anthropic.com/api/oauth/usage";

/// Beta header required for OAuth API
const ANTHROPIC_BETA_HEADER: &str = "anthropic-beta";
const ANTHROPIC_BETA_VALUE: &str = "oauth-2025-04-20";

/// Upper bound for the whole request, connect through body
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of usage data
pub trait UsageClient {
    /// Perform one authenticated read of the usage endpoint. No retries.
    fn fetch(&self, token: &str) -> Result<UsageResponse, UsageError>;
}

/// `UsageClient` backed by a `ureq` agent
pub struct HttpUsageClient {
    agent: Agent,
    url: String,
}

impl HttpUsageClient {
    /// Create a client for `url` with a global request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .user_agent(concat!("usage-pie/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent: Agent::new_with_config(config),
            url: url.into(),
        }
    }
}

impl Default for HttpUsageClient {
    fn default() -> Self {
        Self::new(USAGE_API_URL, DEFAULT_TIMEOUT)
    }
}

impl UsageClient for HttpUsageClient {
    fn fetch(&self, token: &str) -> Result<UsageResponse, UsageError> {
        debug!("Fetching usage from {}", self.url);
        let mut response = self
            .agent
            .get(self.url.as_str())
            .header("Authorization", format!("Bearer {token}"))
            .header(ANTHROPIC_BETA_HEADER, ANTHROPIC_BETA_VALUE)
            .call()
            .map_err(|e| UsageError::Network(e.to_string()))?;

        response
            .body_mut()
            .read_json::<UsageResponse>()
            .map_err(|e| match e {
                ureq::Error::Json(e) => UsageError::ResponseFormat(e.to_string()),
                other => UsageError::Network(other.to_string()),
            })
    }
}
