//! Report writers.
//!
//! The report is human-facing text; nothing downstream parses it.

pub mod report;

// Re-export main functions
pub use report::{render_report, write_report};
