//! Configuration and constants for the CLI.

use std::time::Duration;

/// Region used when neither `--region` nor `AWS_REGION` is given
pub const DEFAULT_REGION: &str = "eu-west-1";

/// Operation analyzed when `--operation` is omitted
pub const DEFAULT_OPERATION: &str = "create";

/// Upper bound for `--top`
pub const MAX_TOP_RESOURCES: usize = 10_000;

/// Timeout for a single DescribeStackEvents call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for constructing a CloudFormation client.
///
/// Passed explicitly to the client instead of being read from process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// AWS region the stack lives in
    pub region: String,

    /// Endpoint override (e.g. a local emulator)
    pub endpoint_url: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_url: None,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_endpoint_url(mut self, endpoint_url: Option<String>) -> Self {
        self.endpoint_url = endpoint_url;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();
        assert_eq!(config.region, "eu-west-1");
        assert!(config.endpoint_url.is_none());
        assert_eq!(config.timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_with_endpoint_url() {
        let config = ClientConfig::new("us-east-1")
            .with_endpoint_url(Some("http://localhost:4566".to_string()));
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }
}
