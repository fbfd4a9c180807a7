//! Paginated retrieval of the complete event history of a stack.

use super::types::{EventPage, StackEvent};
use crate::utils::error::FetchError;
use log::{debug, info};

/// A source of stack event pages.
///
/// Implemented by [`super::CloudFormationClient`] for the real service and by
/// in-memory fakes in tests.
pub trait EventSource {
    /// Fetch one page of events, continuing from `next_token` if given
    fn fetch_page(&self, stack_name: &str, next_token: Option<&str>)
        -> Result<EventPage, FetchError>;
}

/// Fetch every event of a stack, following continuation tokens until exhausted
///
/// **Public** - main entry point for event retrieval
///
/// Events are returned in the order the source produced them, page after page.
/// The first failing request aborts the whole fetch.
pub fn fetch_all_events<S: EventSource + ?Sized>(
    source: &S,
    stack_name: &str,
) -> Result<Vec<StackEvent>, FetchError> {
    let mut all_events = Vec::new();
    let mut next_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = source.fetch_page(stack_name, next_token.as_deref())?;
        pages += 1;

        debug!(
            "Page {}: {} events, more: {}",
            pages,
            page.events.len(),
            page.next_token.is_some()
        );

        all_events.extend(page.events);

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    info!(
        "Fetched {} events for stack {} in {} request(s)",
        all_events.len(),
        stack_name,
        pages
    );

    Ok(all_events)
}
