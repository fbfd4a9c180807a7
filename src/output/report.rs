//! Plain-text report of the slowest resources.

use crate::aggregator::{Operation, ResourceTiming, TimingState};
use crate::utils::error::OutputError;
use std::io::Write;

/// Write the report for `rows` to `writer`
///
/// **Public** - main entry point for report output
///
/// # Arguments
/// * `writer` - Destination (stdout in the CLI)
/// * `operation` - Operation the durations belong to, used in the heading
/// * `rows` - Rows as returned by the analyzer, already sorted
/// * `top` - Print at most this many rows (`None` = all)
pub fn write_report<W: Write>(
    writer: &mut W,
    operation: Operation,
    rows: &[ResourceTiming],
    top: Option<usize>,
) -> Result<(), OutputError> {
    writeln!(writer, "Resources with longest {} times:", operation)?;

    let limit = top.unwrap_or(rows.len());
    for row in rows.iter().take(limit) {
        writeln!(writer, "{}", format_row(row))?;
    }

    if limit < rows.len() {
        writeln!(writer, "... {} more resource(s) not shown", rows.len() - limit)?;
    }

    writer.flush()?;
    Ok(())
}

/// Render the report into a string
pub fn render_report(
    operation: Operation,
    rows: &[ResourceTiming],
    top: Option<usize>,
) -> Result<String, OutputError> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, operation, rows, top)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Format one report line
///
/// **Private** - internal formatting
fn format_row(row: &ResourceTiming) -> String {
    match row.duration_secs {
        Some(secs) => format!("{}: {:.1} seconds", row.resource_id, secs),
        None => {
            let reason = match row.record.state() {
                TimingState::Started => "no complete event",
                TimingState::CompletedWithoutStart => "no in-progress event",
                TimingState::Completed => "unknown",
            };
            format!("{}: incomplete ({})", row.resource_id, reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::TimingRecord;

    fn row(id: &str, duration_secs: Option<f64>, record: TimingRecord) -> ResourceTiming {
        ResourceTiming {
            resource_id: id.to_string(),
            record,
            duration_secs,
        }
    }

    #[test]
    fn test_format_measured_row() {
        let line = format_row(&row("Queue", Some(12.5), TimingRecord::default()));
        assert_eq!(line, "Queue: 12.5 seconds");
    }

    #[test]
    fn test_format_incomplete_rows() {
        let started = TimingRecord {
            start_time: Some(chrono::Utc::now()),
            end_time: None,
        };
        assert_eq!(
            format_row(&row("Db", None, started)),
            "Db: incomplete (no complete event)"
        );

        let orphan = TimingRecord {
            start_time: None,
            end_time: Some(chrono::Utc::now()),
        };
        assert_eq!(
            format_row(&row("Db", None, orphan)),
            "Db: incomplete (no in-progress event)"
        );
    }
}
