//! cfn-timer CLI
//!
//! Lists the resources of a CloudFormation stack ordered by how long they
//! took to create or delete.

use anyhow::Result;
use cfn_timer::aggregator::DurationMode;
use cfn_timer::commands::{execute_analyze, AnalyzeArgs};
use cfn_timer::utils::config::{DEFAULT_OPERATION, DEFAULT_REGION};
use clap::Parser;
use env_logger::Env;

/// Report the slowest resources of a CloudFormation stack operation
#[derive(Parser, Debug)]
#[command(name = "cfn-timer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Name of the CloudFormation stack
    #[arg(short, long)]
    stack_name: String,

    /// create/delete for calculating creation and deletion times
    #[arg(short, long, default_value = DEFAULT_OPERATION)]
    operation: String,

    /// AWS region
    #[arg(short, long, default_value = DEFAULT_REGION, env = "AWS_REGION")]
    region: String,

    /// Custom CloudFormation endpoint (e.g. a local emulator)
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// Only print the N slowest resources
    #[arg(long)]
    top: Option<usize>,

    /// Treat missing start/end times as the minimum timestamp instead of
    /// reporting the resource as incomplete
    #[arg(long)]
    parity: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AnalyzeArgs {
        stack_name: cli.stack_name,
        operation: cli.operation,
        region: cli.region,
        endpoint_url: cli.endpoint_url,
        top: cli.top,
        mode: if cli.parity {
            DurationMode::Parity
        } else {
            DurationMode::Strict
        },
    };

    execute_analyze(args)
}
