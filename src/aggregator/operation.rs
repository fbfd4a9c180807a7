//! Which stack operation (create or delete) is being timed.

use crate::cloudformation::types::ResourceStatus;
use crate::utils::error::AnalyzeError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Delete,
}

impl Operation {
    /// Status marking the start of this operation on a resource
    pub fn in_progress_status(self) -> ResourceStatus {
        match self {
            Operation::Create => ResourceStatus::CreateInProgress,
            Operation::Delete => ResourceStatus::DeleteInProgress,
        }
    }

    /// Status marking the end of this operation on a resource
    pub fn complete_status(self) -> ResourceStatus {
        match self {
            Operation::Create => ResourceStatus::CreateComplete,
            Operation::Delete => ResourceStatus::DeleteComplete,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Delete => "delete",
        }
    }
}

impl FromStr for Operation {
    type Err = AnalyzeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Operation::Create),
            "delete" => Ok(Operation::Delete),
            other => Err(AnalyzeError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
