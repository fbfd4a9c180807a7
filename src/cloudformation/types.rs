//! Stack event types returned by CloudFormation's DescribeStackEvents.

use chrono::{DateTime, Utc};
use std::fmt;

/// Lifecycle status of a resource, as reported on a stack event.
///
/// Only the four codes the analyzer cares about get their own variant;
/// everything else the service reports is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceStatus {
    CreateInProgress,
    CreateComplete,
    DeleteInProgress,
    DeleteComplete,
    Other(String),
}

impl ResourceStatus {
    /// The service's literal status code
    pub fn as_str(&self) -> &str {
        match self {
            ResourceStatus::CreateInProgress => "CREATE_IN_PROGRESS",
            ResourceStatus::CreateComplete => "CREATE_COMPLETE",
            ResourceStatus::DeleteInProgress => "DELETE_IN_PROGRESS",
            ResourceStatus::DeleteComplete => "DELETE_COMPLETE",
            ResourceStatus::Other(code) => code,
        }
    }
}

impl From<&str> for ResourceStatus {
    fn from(code: &str) -> Self {
        match code {
            "CREATE_IN_PROGRESS" => ResourceStatus::CreateInProgress,
            "CREATE_COMPLETE" => ResourceStatus::CreateComplete,
            "DELETE_IN_PROGRESS" => ResourceStatus::DeleteInProgress,
            "DELETE_COMPLETE" => ResourceStatus::DeleteComplete,
            other => ResourceStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single timestamped state transition of one stack resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEvent {
    /// Logical resource id within the stack
    pub resource_id: String,

    /// Status the resource moved into
    pub status: ResourceStatus,

    /// When the transition happened
    pub timestamp: DateTime<Utc>,
}

impl StackEvent {
    pub fn new(
        resource_id: impl Into<String>,
        status: impl Into<ResourceStatus>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            status: status.into(),
            timestamp,
        }
    }
}

/// One page of a paginated event listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPage {
    pub events: Vec<StackEvent>,

    /// Continuation token; `None` on the last page
    pub next_token: Option<String>,
}

impl EventPage {
    /// Build a page, treating an empty token the same as no token
    pub fn new(events: Vec<StackEvent>, next_token: Option<String>) -> Self {
        Self {
            events,
            next_token: next_token.filter(|token| !token.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_code() {
        assert_eq!(
            ResourceStatus::from("CREATE_IN_PROGRESS"),
            ResourceStatus::CreateInProgress
        );
        assert_eq!(
            ResourceStatus::from("DELETE_COMPLETE"),
            ResourceStatus::DeleteComplete
        );
        assert_eq!(
            ResourceStatus::from("UPDATE_COMPLETE"),
            ResourceStatus::Other("UPDATE_COMPLETE".to_string())
        );
    }

    #[test]
    fn test_status_display_keeps_service_code() {
        assert_eq!(ResourceStatus::CreateComplete.to_string(), "CREATE_COMPLETE");
        assert_eq!(
            ResourceStatus::Other("ROLLBACK_IN_PROGRESS".to_string()).to_string(),
            "ROLLBACK_IN_PROGRESS"
        );
    }

    #[test]
    fn test_empty_token_ends_pagination() {
        let page = EventPage::new(vec![], Some(String::new()));
        assert!(page.next_token.is_none());

        let page = EventPage::new(vec![], Some("abc".to_string()));
        assert_eq!(page.next_token.as_deref(), Some("abc"));
    }
}
