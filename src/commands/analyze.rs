//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Fetches every event of the stack
//! 2. Reduces them into per-resource durations
//! 3. Prints the report

use super::models::AnalyzeArgs;
use crate::aggregator::{find_longest_durations, Operation};
use crate::cloudformation::{fetch_all_events, CloudFormationClient, EventSource};
use crate::output::write_report;
use crate::utils::config::{ClientConfig, MAX_TOP_RESOURCES};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

/// Execute the analyze command against CloudFormation
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid arguments (including an unknown operation)
/// * Stack not found, access denied, or transient service failures
/// * Failure writing to stdout
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let operation = validate_args(&args)?;

    let config = ClientConfig::new(args.region.clone()).with_endpoint_url(args.endpoint_url.clone());
    let client =
        CloudFormationClient::new(&config).context("Failed to create CloudFormation client")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_analysis(&client, &args, operation, &mut out)
}

/// Fetch, analyze and report using any event source
///
/// **Public** - lets tests drive the full pipeline without network access
///
/// Nothing is written to `out` unless every page was fetched.
pub fn run_analysis<S, W>(
    source: &S,
    args: &AnalyzeArgs,
    operation: Operation,
    out: &mut W,
) -> Result<()>
where
    S: EventSource + ?Sized,
    W: Write,
{
    let start_time = Instant::now();

    info!(
        "Analyzing {} times for stack: {}",
        operation, args.stack_name
    );

    let events = fetch_all_events(source, &args.stack_name)
        .with_context(|| format!("Failed to fetch events for stack {}", args.stack_name))?;

    let timings = find_longest_durations(&events, operation, args.mode);

    debug!("Top 3 resources:");
    for (i, timing) in timings.iter().take(3).enumerate() {
        debug!(
            "  {}. {} ({:?})",
            i + 1,
            timing.resource_id,
            timing.duration_secs
        );
    }

    write_report(out, operation, &timings, args.top).context("Failed to write report")?;

    info!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
///
/// # Returns
/// The parsed operation if arguments are valid, Err with message if not
pub fn validate_args(args: &AnalyzeArgs) -> Result<Operation> {
    if args.stack_name.trim().is_empty() {
        anyhow::bail!("Stack name cannot be empty");
    }

    let operation: Operation = args.operation.parse()?;

    if args.region.trim().is_empty() {
        anyhow::bail!("Region cannot be empty");
    }

    if let Some(ref endpoint) = args.endpoint_url {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            anyhow::bail!("Endpoint URL must start with http:// or https://");
        }
    }

    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("top must be greater than 0");
        }

        if top > MAX_TOP_RESOURCES {
            anyhow::bail!("top is too large (max {})", MAX_TOP_RESOURCES);
        }
    }

    Ok(operation)
}
