//! cfn-timer
//!
//! Reports which resources of a CloudFormation stack took longest to
//! create or delete, based on the stack's event history.
//!
//! This crate provides the core implementation for the `cfn-timer` CLI:
//!
//! ```bash
//! cfn-timer --stack-name my-stack --operation delete --region us-east-1
//! ```

pub mod aggregator;
pub mod cloudformation;
pub mod commands;
pub mod output;
pub mod utils;
