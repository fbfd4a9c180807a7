use crate::aggregator::DurationMode;
use crate::utils::config::{DEFAULT_OPERATION, DEFAULT_REGION};

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Stack name or id
    pub stack_name: String,

    /// Operation selector, `create` or `delete`
    pub operation: String,

    /// AWS region of the stack
    pub region: String,

    /// Endpoint override (optional)
    pub endpoint_url: Option<String>,

    /// Print at most this many resources
    pub top: Option<usize>,

    /// How partial records are reported
    pub mode: DurationMode,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            stack_name: String::new(),
            operation: DEFAULT_OPERATION.to_string(),
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            top: None,
            mode: DurationMode::Strict,
        }
    }
}
