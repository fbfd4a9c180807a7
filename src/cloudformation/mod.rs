//! CloudFormation stack event retrieval.
//!
//! - `types`: stack events and pages
//! - `fetcher`: pagination over any [`EventSource`]
//! - `client`: the AWS-backed event source

pub mod client;
pub mod fetcher;
pub mod types;

// Re-export main types
pub use client::CloudFormationClient;
pub use fetcher::{fetch_all_events, EventSource};
pub use types::{EventPage, ResourceStatus, StackEvent};
