//! Freeze execution: command composition and tool invocation.

pub mod command;
pub mod runner;

use crate::bundler::error::{Error, Result};
use crate::bundler::python::PythonInterpreter;
use crate::bundler::settings::Settings;

/// Number of trailing stderr lines included in a failure report.
const STDERR_TAIL_LINES: usize = 15;

/// Runs the bundling tool against the configured entry script.
///
/// Composes the argument vector from settings, streams the tool's output,
/// and converts an unsuccessful exit into [`Error::ToolFailed`] carrying the
/// child's exit code and a trailing slice of its stderr.
pub async fn freeze_project(
    settings: &Settings,
    python: &PythonInterpreter,
    runtime_config: &crate::cli::RuntimeConfig,
) -> Result<()> {
    let args = command::compose_args(settings);

    log::info!("Freezing {}...", settings.output_name());
    let result = runner::run_tool(python, &args, runtime_config).await?;

    if !result.status.success() {
        let tail_start = result.stderr_lines.len().saturating_sub(STDERR_TAIL_LINES);
        return Err(Error::ToolFailed {
            command: format!("PyInstaller {}", settings.entry_script().display()),
            code: result.status.code(),
            stderr_tail: result.stderr_lines[tail_start..].join("\n"),
        });
    }

    log::info!("✓ Freeze completed for {}", settings.output_name());
    Ok(())
}
