//! Top-level error types for the command line application.
//!
//! Library layers carry their own errors ([`crate::bundler::Error`],
//! [`crate::interest::CalculationError`]); this module wraps them for `main`.

use thiserror::Error;

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bundler errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Interest calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] crate::interest::CalculationError),

    /// Generic errors from anyhow
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
