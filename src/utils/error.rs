//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while fetching stack events
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Stack not found: {0}")]
    StackNotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Transient service error: {0}")]
    Transient(String),

    #[error("Request rejected ({code}): {message}")]
    Rejected { code: String, message: String },

    #[error("Invalid service response: {0}")]
    InvalidResponse(String),

    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Errors that can occur during duration analysis
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Invalid operation '{0}'. Use 'create' or 'delete'.")]
    InvalidOperation(String),
}

/// Errors that can occur while writing the report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),
}
