//! Python interpreter discovery and probing.

use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// A located and probed Python interpreter.
///
/// Every tool invocation in the pipeline runs through this interpreter:
/// `-m pip` for installation and `-m PyInstaller` for the build itself, so
/// the environment pip installs into is the one the build imports from.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    path: PathBuf,
    version: String,
}

impl PythonInterpreter {
    /// Locates a Python interpreter and probes its version.
    ///
    /// An explicit override is used as given (falling back to PATH lookup for
    /// bare names); otherwise `python3` then `python` are tried on PATH.
    ///
    /// # Errors
    ///
    /// - [`Error::InterpreterMissing`] when the override does not resolve
    /// - [`Error::InterpreterNotFound`] when PATH discovery fails
    /// - [`Error::InterpreterProbeFailed`] when `--version` fails
    pub async fn locate(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(p) => {
                if p.is_file() {
                    p.to_path_buf()
                } else {
                    which::which(p).map_err(|_| Error::InterpreterMissing(p.to_path_buf()))?
                }
            }
            None => which::which("python3")
                .or_else(|_| which::which("python"))
                .map_err(|_| Error::InterpreterNotFound)?,
        };
        log::debug!("Found Python interpreter at: {}", path.display());

        let output = Command::new(&path)
            .arg("--version")
            .output()
            .await
            .map_err(|error| Error::CommandFailed {
                command: format!("{} --version", path.display()),
                error,
            })?;

        if !output.status.success() {
            return Err(Error::InterpreterProbeFailed {
                path,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // Old interpreters printed the version banner on stderr.
        let banner = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).trim().to_string()
        } else {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        };
        let version = banner
            .strip_prefix("Python ")
            .unwrap_or(banner.as_str())
            .to_string();

        log::info!("✓ Python {} at {}", version, path.display());

        Ok(Self { path, version })
    }

    /// Returns the interpreter path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the probed version string (e.g. "3.12.2").
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns a command builder rooted at this interpreter.
    pub fn command(&self) -> Command {
        Command::new(&self.path)
    }
}
