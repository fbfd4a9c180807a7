//! Reduce stack events into per-resource create/delete durations.
//!
//! Each resource gets one [`TimingRecord`]. The start time keeps the
//! earliest in-progress event seen, while the end time is simply the last
//! complete event in input order. The two rules are deliberately different
//! and must stay that way for parity with existing reports.

use super::operation::Operation;
use crate::cloudformation::types::StackEvent;
use crate::utils::error::AnalyzeError;
use chrono::{DateTime, Utc};
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;

/// How records missing a start or end time are turned into a duration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DurationMode {
    /// Partial records have no duration
    #[default]
    Strict,

    /// An unset time counts as the minimum representable timestamp,
    /// which gives partial records a huge, meaningless duration
    Parity,
}

/// Observed lifecycle of one resource for one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingState {
    Started,
    Completed,
    /// A complete event arrived with no in-progress event before or after it
    CompletedWithoutStart,
}

/// Start and end of one resource's operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingRecord {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl TimingRecord {
    pub fn state(&self) -> TimingState {
        match (self.start_time, self.end_time) {
            (_, None) => TimingState::Started,
            (Some(_), Some(_)) => TimingState::Completed,
            (None, Some(_)) => TimingState::CompletedWithoutStart,
        }
    }

    /// Seconds from start to end, if both are known
    pub fn duration_secs(&self) -> Option<f64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(seconds_between(start, end)),
            _ => None,
        }
    }

    /// Seconds from start to end with unset times replaced by the minimum timestamp
    pub fn parity_duration_secs(&self) -> f64 {
        let start = self.start_time.unwrap_or(DateTime::<Utc>::MIN_UTC);
        let end = self.end_time.unwrap_or(DateTime::<Utc>::MIN_UTC);
        seconds_between(start, end)
    }

    fn record_start(&mut self, timestamp: DateTime<Utc>) {
        if self.start_time.map_or(true, |current| timestamp < current) {
            self.start_time = Some(timestamp);
        }
    }

    fn record_end(&mut self, timestamp: DateTime<Utc>) {
        self.end_time = Some(timestamp);
    }
}

fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    end.signed_duration_since(start).num_milliseconds() as f64 / 1000.0
}

/// One row of the analysis result
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTiming {
    pub resource_id: String,
    pub record: TimingRecord,

    /// `None` for partial records in strict mode
    pub duration_secs: Option<f64>,
}

/// Validate the operation selector, then run [`find_longest_durations`]
///
/// **Public** - entry point taking the raw selector string
///
/// # Errors
/// * `AnalyzeError::InvalidOperation` - selector is not `create` or `delete`,
///   regardless of the events given
pub fn analyze_events(
    events: &[StackEvent],
    operation: &str,
    mode: DurationMode,
) -> Result<Vec<ResourceTiming>, AnalyzeError> {
    let operation: Operation = operation.parse()?;
    Ok(find_longest_durations(events, operation, mode))
}

/// Compute one duration per resource, sorted longest first
///
/// Sorting is stable: equal durations keep the order in which resources were
/// first seen. Rows without a duration come last.
pub fn find_longest_durations(
    events: &[StackEvent],
    operation: Operation,
    mode: DurationMode,
) -> Vec<ResourceTiming> {
    let records = collect_records(events, operation);

    debug!(
        "Collected {} {} records from {} events",
        records.len(),
        operation,
        events.len()
    );

    let mut timings: Vec<ResourceTiming> = records
        .into_iter()
        .map(|(resource_id, record)| {
            let duration_secs = match mode {
                DurationMode::Strict => record.duration_secs(),
                DurationMode::Parity => Some(record.parity_duration_secs()),
            };
            ResourceTiming {
                resource_id,
                record,
                duration_secs,
            }
        })
        .collect();

    timings.sort_by(|a, b| compare_descending(a.duration_secs, b.duration_secs));
    timings
}

/// Build timing records in first-seen order
fn collect_records(events: &[StackEvent], operation: Operation) -> Vec<(String, TimingRecord)> {
    let in_progress = operation.in_progress_status();
    let complete = operation.complete_status();

    let mut records: Vec<(String, TimingRecord)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for event in events {
        let is_start = event.status == in_progress;
        if !is_start && event.status != complete {
            continue;
        }

        let slot = *index.entry(event.resource_id.as_str()).or_insert_with(|| {
            records.push((event.resource_id.clone(), TimingRecord::default()));
            records.len() - 1
        });
        let record = &mut records[slot].1;

        if is_start {
            record.record_start(event.timestamp);
        } else {
            record.record_end(event.timestamp);
        }
    }

    records
}

fn compare_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
