//! Aggregation of stack events into per-resource durations.
//!
//! This module turns the raw event history of a stack into:
//! - One timing record per logical resource
//! - Durations for the selected operation, sorted longest first

pub mod operation;
pub mod timing;

// Re-export main types and functions
pub use operation::Operation;
pub use timing::{
    analyze_events, find_longest_durations, DurationMode, ResourceTiming, TimingRecord,
    TimingState,
};
