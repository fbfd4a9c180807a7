//! Common test utilities and helpers

#![allow(dead_code)]

use cfn_timer::cloudformation::{EventPage, EventSource, ResourceStatus, StackEvent};
use cfn_timer::utils::error::FetchError;
use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;

/// Fixed reference point for test timestamps
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// `t0()` plus `secs` seconds
pub fn at(secs: i64) -> DateTime<Utc> {
    t0() + chrono::Duration::seconds(secs)
}

pub fn event(resource_id: &str, status: ResourceStatus, secs: i64) -> StackEvent {
    StackEvent::new(resource_id, status, at(secs))
}

/// Scripted event source that records the token of every request
pub struct FakeSource {
    responses: RefCell<Vec<Result<EventPage, FetchError>>>,
    pub requests: RefCell<Vec<Option<String>>>,
}

impl FakeSource {
    /// Serve `pages` in order, one per request
    pub fn new(pages: Vec<EventPage>) -> Self {
        Self::with_responses(pages.into_iter().map(Ok).collect())
    }

    pub fn with_responses(responses: Vec<Result<EventPage, FetchError>>) -> Self {
        let mut responses = responses;
        responses.reverse();
        Self {
            responses: RefCell::new(responses),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// A single page holding every event
    pub fn single_page(events: Vec<StackEvent>) -> Self {
        Self::new(vec![EventPage::new(events, None)])
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl EventSource for FakeSource {
    fn fetch_page(
        &self,
        _stack_name: &str,
        next_token: Option<&str>,
    ) -> Result<EventPage, FetchError> {
        self.requests
            .borrow_mut()
            .push(next_token.map(str::to_string));

        self.responses
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Err(FetchError::Transient("no more scripted pages".to_string())))
    }
}
