//! Bundling-tool installation and version gating.
//!
//! The install step runs `<python> -m pip install [--upgrade] <requirement>`
//! with inherited stdio so pip's own progress output reaches the operator
//! unchanged. After installation the tool's `--version` output is parsed and
//! checked against the minimum supported release.

use super::PythonInterpreter;
use crate::bundler::error::{Error, Result};
use semver::Version;
use std::time::Duration;

/// Timeout for the pip install step (10 minutes).
/// Installation may download wheels over the network.
const PIP_INSTALL_TIMEOUT: Duration = Duration::from_secs(600);

/// Installs or upgrades the bundling tool via pip.
///
/// Failure aborts the run; there is no retry.
pub async fn install_tool(
    python: &PythonInterpreter,
    requirement: &str,
    upgrade: bool,
) -> Result<()> {
    install_tool_with_timeout(python, requirement, upgrade, PIP_INSTALL_TIMEOUT).await
}

async fn install_tool_with_timeout(
    python: &PythonInterpreter,
    requirement: &str,
    upgrade: bool,
    deadline: Duration,
) -> Result<()> {
    let mut cmd = python.command();
    cmd.args(["-m", "pip", "install"]);
    if upgrade {
        cmd.arg("--upgrade");
    }
    cmd.arg(requirement);
    // On timeout the status() future is dropped; this ensures the child
    // does not outlive it.
    cmd.kill_on_drop(true);

    log::info!("Installing {} via pip...", requirement);

    let status = tokio::time::timeout(deadline, cmd.status())
        .await
        .map_err(|_| Error::Timeout {
            command: format!("pip install {}", requirement),
            seconds: deadline.as_secs(),
        })?
        .map_err(|error| Error::CommandFailed {
            command: format!("pip install {}", requirement),
            error,
        })?;

    if !status.success() {
        return Err(Error::ToolInstallFailed {
            requirement: requirement.to_string(),
            code: status.code(),
        });
    }

    log::info!("✓ {} installed", requirement);
    Ok(())
}

/// Probes the installed bundling tool's version.
///
/// Runs `<python> -m PyInstaller --version` and parses the reported release.
/// A failing probe means the tool is not importable in the active
/// environment.
pub async fn tool_version(python: &PythonInterpreter) -> Result<Version> {
    let output = python
        .command()
        .args(["-m", "PyInstaller", "--version"])
        .output()
        .await
        .map_err(|error| Error::CommandFailed {
            command: "PyInstaller --version".to_string(),
            error,
        })?;

    if !output.status.success() {
        return Err(Error::ToolProbeFailed {
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let raw = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let version = parse_tool_version(&raw)?;
    log::debug!("Bundling tool version: {}", version);
    Ok(version)
}

/// Minimum supported bundling-tool release.
///
/// Everything the composed flag set relies on is stable from this release
/// onward.
pub fn minimum_tool_version() -> Version {
    Version::new(4, 0, 0)
}

/// Checks a probed tool version against the minimum supported release.
pub fn check_tool_version(found: &Version) -> Result<()> {
    let minimum = minimum_tool_version();
    if *found < minimum {
        return Err(Error::ToolVersionUnsupported {
            found: found.clone(),
            minimum,
        });
    }
    Ok(())
}

/// Parses the tool's `--version` output leniently.
///
/// The tool prints a bare release like `6.6.0`; development builds may print
/// fewer components or carry a suffix, so missing components are padded with
/// zeros before strict semver parsing.
pub fn parse_tool_version(raw: &str) -> Result<Version> {
    let token = raw
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::ToolVersionUnparseable(raw.to_string()))?;

    // Pad "6" or "6.6" to a full triple.
    let numeric_len = token
        .split('.')
        .filter(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
        .count();
    let padded = match numeric_len {
        0 => return Err(Error::ToolVersionUnparseable(raw.to_string())),
        1 => format!("{}.0.0", token),
        2 => format!("{}.0", token),
        _ => token.to_string(),
    };

    Version::parse(&padded).map_err(|_| Error::ToolVersionUnparseable(raw.to_string()))
}
