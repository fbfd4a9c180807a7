//! Blocking client for CloudFormation's DescribeStackEvents API.

use super::fetcher::EventSource;
use super::types::{EventPage, StackEvent};
use crate::utils::config::ClientConfig;
use crate::utils::error::FetchError;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cloudformation::primitives::DateTime as AwsDateTime;
use aws_sdk_cloudformation::types::StackEvent as AwsStackEvent;
use aws_sdk_cloudformation::Client;
use chrono::{DateTime, Utc};
use log::{debug, info};
use tokio::runtime::Runtime;

/// Error codes CloudFormation/IAM use for missing or rejected credentials
const ACCESS_DENIED_CODES: &[&str] = &[
    "AccessDenied",
    "AccessDeniedException",
    "UnauthorizedOperation",
    "ExpiredToken",
    "InvalidClientTokenId",
    "UnrecognizedClientException",
];

/// Error codes for throttling and server-side failures
const TRANSIENT_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "RequestLimitExceeded",
    "ServiceUnavailable",
    "InternalFailure",
];

/// CloudFormation client bound to one region
///
/// The AWS SDK is async; this client owns a single-threaded runtime and
/// blocks on every call so callers stay synchronous.
pub struct CloudFormationClient {
    client: Client,
    runtime: Runtime,
}

impl CloudFormationClient {
    /// Create a new client from explicit configuration
    ///
    /// Credentials come from the usual AWS provider chain. Retries are
    /// disabled: every failure reaches the caller.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        info!("Using CloudFormation in region: {}", config.region);

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled())
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(config.timeout)
                    .build(),
            );

        if let Some(ref endpoint) = config.endpoint_url {
            debug!("Overriding endpoint: {}", endpoint);
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = runtime.block_on(loader.load());

        Ok(Self {
            client: Client::new(&sdk_config),
            runtime,
        })
    }
}

impl EventSource for CloudFormationClient {
    fn fetch_page(
        &self,
        stack_name: &str,
        next_token: Option<&str>,
    ) -> Result<EventPage, FetchError> {
        debug!(
            "DescribeStackEvents: stack={}, token={}",
            stack_name,
            next_token.unwrap_or("<none>")
        );

        let request = self
            .client
            .describe_stack_events()
            .stack_name(stack_name)
            .set_next_token(next_token.map(str::to_string))
            .send();

        let output = self.runtime.block_on(request).map_err(|err| {
            let context = DisplayErrorContext(&err).to_string();
            classify_service_error(err.code(), err.message(), stack_name, context)
        })?;

        let events = output
            .stack_events()
            .iter()
            .map(convert_event)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EventPage::new(events, output.next_token().map(str::to_string)))
    }
}

/// Convert an SDK stack event into our event type
fn convert_event(event: &AwsStackEvent) -> Result<StackEvent, FetchError> {
    let timestamp: Option<&AwsDateTime> = Option::from(event.timestamp());

    stack_event_from_parts(
        event.logical_resource_id(),
        event.resource_status().map(|status| status.as_str()),
        timestamp,
    )
}

/// Assemble a stack event, rejecting events that lack a required field
pub(crate) fn stack_event_from_parts(
    resource_id: Option<&str>,
    status: Option<&str>,
    timestamp: Option<&AwsDateTime>,
) -> Result<StackEvent, FetchError> {
    let resource_id = resource_id.ok_or_else(|| {
        FetchError::InvalidResponse("Stack event without logical resource id".to_string())
    })?;

    let status = status.ok_or_else(|| {
        FetchError::InvalidResponse(format!("Stack event for {} has no status", resource_id))
    })?;

    let timestamp = timestamp
        .and_then(to_chrono)
        .ok_or_else(|| {
            FetchError::InvalidResponse(format!(
                "Stack event for {} has no valid timestamp",
                resource_id
            ))
        })?;

    Ok(StackEvent::new(resource_id, status, timestamp))
}

fn to_chrono(timestamp: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}

/// Map a failed request onto our error taxonomy
///
/// `code` and `message` are the service's error metadata; both are absent
/// when the request never got a service response (network, timeout).
pub(crate) fn classify_service_error(
    code: Option<&str>,
    message: Option<&str>,
    stack_name: &str,
    context: String,
) -> FetchError {
    let message = message.map(str::to_string).unwrap_or(context);

    match code {
        Some("ValidationError") if message.contains("does not exist") => {
            FetchError::StackNotFound(stack_name.to_string())
        }
        Some(code) if ACCESS_DENIED_CODES.contains(&code) => FetchError::AccessDenied(message),
        Some(code) if TRANSIENT_CODES.contains(&code) => {
            FetchError::Transient(format!("{}: {}", code, message))
        }
        Some(code) => FetchError::Rejected {
            code: code.to_string(),
            message,
        },
        None => FetchError::Transient(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloudformation::types::ResourceStatus;

    #[test]
    fn test_missing_stack_maps_to_not_found() {
        let err = classify_service_error(
            Some("ValidationError"),
            Some("Stack [web] does not exist"),
            "web",
            String::new(),
        );
        assert!(matches!(err, FetchError::StackNotFound(ref name) if name == "web"));
    }

    #[test]
    fn test_other_validation_error_is_rejected() {
        let err = classify_service_error(
            Some("ValidationError"),
            Some("1 validation error detected"),
            "web",
            String::new(),
        );
        assert!(matches!(err, FetchError::Rejected { ref code, .. } if code == "ValidationError"));
    }

    #[test]
    fn test_access_denied_codes() {
        for code in ["AccessDenied", "ExpiredToken", "InvalidClientTokenId"] {
            let err = classify_service_error(Some(code), Some("nope"), "web", String::new());
            assert!(matches!(err, FetchError::AccessDenied(_)), "code {}", code);
        }
    }

    #[test]
    fn test_throttling_is_transient() {
        let err = classify_service_error(
            Some("Throttling"),
            Some("Rate exceeded"),
            "web",
            String::new(),
        );
        assert!(matches!(err, FetchError::Transient(ref msg) if msg.contains("Rate exceeded")));
    }

    #[test]
    fn test_failure_without_code_is_transient() {
        let err = classify_service_error(None, None, "web", "dispatch failure".to_string());
        assert!(matches!(err, FetchError::Transient(ref msg) if msg == "dispatch failure"));
    }

    #[test]
    fn test_stack_event_from_parts() {
        let ts = AwsDateTime::from_secs(1_700_000_000);
        let event =
            stack_event_from_parts(Some("Bucket"), Some("CREATE_COMPLETE"), Some(&ts)).unwrap();

        assert_eq!(event.resource_id, "Bucket");
        assert_eq!(event.status, ResourceStatus::CreateComplete);
        assert_eq!(event.timestamp.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_stack_event_missing_fields() {
        let ts = AwsDateTime::from_secs(1_700_000_000);

        assert!(stack_event_from_parts(None, Some("CREATE_COMPLETE"), Some(&ts)).is_err());
        assert!(stack_event_from_parts(Some("Bucket"), None, Some(&ts)).is_err());
        assert!(stack_event_from_parts(Some("Bucket"), Some("CREATE_COMPLETE"), None).is_err());
    }
}
