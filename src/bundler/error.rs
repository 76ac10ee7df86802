//! Error types for the packager core.
//!
//! Domain errors for input validation, interpreter discovery, bundling-tool
//! installation and invocation, plus the context helpers used throughout the
//! bundler modules.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for bundler core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the packager core.
#[derive(Error, Debug)]
pub enum Error {
    /// Entry script does not exist
    #[error("entry script not found: {0}")]
    EntryScriptMissing(PathBuf),

    /// Entry script path exists but is not a regular file
    #[error("entry script is not a file: {0}")]
    EntryScriptNotFile(PathBuf),

    /// Icon file does not exist
    #[error("icon file not found: {0}")]
    IconMissing(PathBuf),

    /// Icon file has an unsupported extension
    #[error("unsupported icon format (expected .ico or .png): {0}")]
    IconFormat(PathBuf),

    /// Icon file could not be decoded
    #[error("failed to decode icon {path}: {reason}")]
    IconDecode {
        /// Icon path
        path: PathBuf,
        /// Decoder diagnostic
        reason: String,
    },

    /// Data file declaration is not a SOURCE;DEST pair
    #[error("invalid data file declaration (expected SOURCE;DEST): {0}")]
    DataFileSyntax(String),

    /// Declared data file source does not exist
    #[error("data file source not found: {0}")]
    DataFileMissing(PathBuf),

    /// Hidden import is not a valid dotted module name
    #[error("invalid hidden import name: {0}")]
    HiddenImportName(String),

    /// Declared hidden import does not resolve in the active environment
    #[error("hidden import {module} is not resolvable by {interpreter}")]
    HiddenImportUnresolved {
        /// Module name as declared
        module: String,
        /// Interpreter used for the probe
        interpreter: PathBuf,
    },

    /// No Python interpreter found on PATH
    #[error("no Python interpreter found on PATH (tried python3, python)")]
    InterpreterNotFound,

    /// Explicitly configured interpreter does not exist
    #[error("configured Python interpreter not found: {0}")]
    InterpreterMissing(PathBuf),

    /// Interpreter version probe failed
    #[error("failed to probe Python interpreter {path}: {stderr}")]
    InterpreterProbeFailed {
        /// Interpreter path
        path: PathBuf,
        /// Captured stderr from the probe
        stderr: String,
    },

    /// Bundling-tool installation failed
    #[error("failed to install {requirement} (pip exit code {code:?})")]
    ToolInstallFailed {
        /// Requirement passed to pip
        requirement: String,
        /// pip exit code, if the platform reported one
        code: Option<i32>,
    },

    /// Bundling-tool version probe failed
    #[error("bundling tool is not importable in the active environment: {stderr}")]
    ToolProbeFailed {
        /// Captured stderr from the probe
        stderr: String,
    },

    /// Bundling-tool version output could not be parsed
    #[error("could not parse bundling tool version from {0:?}")]
    ToolVersionUnparseable(String),

    /// Installed bundling-tool release is too old
    #[error("bundling tool {found} is older than the minimum supported release {minimum}")]
    ToolVersionUnsupported {
        /// Installed version
        found: semver::Version,
        /// Minimum supported version
        minimum: semver::Version,
    },

    /// Command could not be spawned or awaited
    #[error("Command failed: {command} - {error}")]
    CommandFailed {
        /// Command that failed
        command: String,
        /// Underlying IO error
        error: std::io::Error,
    },

    /// Bundling-tool invocation exited unsuccessfully
    #[error("{command} failed{}", tool_failure_detail(.code, .stderr_tail))]
    ToolFailed {
        /// Command line that failed
        command: String,
        /// Child exit code, if the platform reported one
        code: Option<i32>,
        /// Trailing stderr lines for diagnosis
        stderr_tail: String,
    },

    /// Child process exceeded its timeout and was killed
    #[error("{command} timed out after {seconds}s and was terminated")]
    Timeout {
        /// Command that timed out
        command: String,
        /// Configured timeout in seconds
        seconds: u64,
    },

    /// Expected artifact missing after a successful tool run
    #[error("bundling reported success but the artifact is missing: {0}")]
    ArtifactMissing(PathBuf),

    /// File operation failed with path context
    #[error("failed {action} ({path}): {source}")]
    Fs {
        /// Operation being attempted
        action: String,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// IO errors without additional context
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    GenericError(String),
}

fn tool_failure_detail(code: &Option<i32>, stderr_tail: &str) -> String {
    let mut detail = match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    };
    if !stderr_tail.is_empty() {
        detail.push_str("\n--- stderr (tail) ---\n");
        detail.push_str(stderr_tail);
    }
    detail
}

/// Extension trait adding filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wraps an IO error with the attempted action and the path involved.
    fn fs_context(self, action: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, action: &str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            action: action.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Context trait for converting `Option` and foreign `Result` values into
/// bundler errors with a descriptive message.
pub trait Context<T> {
    /// Attaches a message, producing a [`Error::GenericError`] on failure.
    fn context<S: Into<String>>(self, msg: S) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<S: Into<String>>(self, msg: S) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.into()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context<S: Into<String>>(self, msg: S) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{}: {}", msg.into(), e)))
    }
}

/// Constructs a [`Error::GenericError`] from a format string and returns it.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::error::Error::GenericError(format!($($arg)*)).into())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_carries_action_and_path() {
        let err: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = err
            .fs_context("reading entry script", Path::new("app.py"))
            .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("reading entry script"));
        assert!(text.contains("app.py"));
    }

    #[test]
    fn tool_failure_includes_exit_code_and_stderr() {
        let err = Error::ToolFailed {
            command: "python -m PyInstaller".to_string(),
            code: Some(2),
            stderr_tail: "no module named foo".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("exit code 2"));
        assert!(text.contains("no module named foo"));
    }

    #[test]
    fn option_context_produces_message() {
        let missing: Option<u32> = None;
        let err = missing.context("entry script is required").unwrap_err();
        assert_eq!(err.to_string(), "entry script is required");
    }
}
