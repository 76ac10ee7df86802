//! Top-level error types for packager operations.
//!
//! This module defines the application-edge error type with conversions from
//! every lower layer, plus the CLI-specific error taxonomy.

use thiserror::Error;

/// Result type alias for packager operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all packager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler core errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
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

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl PackagerError {
    /// Returns the process exit code for this error.
    ///
    /// Bundling-tool failures propagate the child's exit code when the
    /// platform reported one; every other failure exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            PackagerError::Bundler(crate::bundler::Error::ToolFailed {
                code: Some(code), ..
            }) => *code,
            _ => 1,
        }
    }
}
