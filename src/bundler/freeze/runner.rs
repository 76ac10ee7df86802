//! Bundling-tool process execution and output streaming.

use crate::bundler::error::{Error, Result};
use crate::bundler::python::PythonInterpreter;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Timeout for a freeze run (20 minutes).
/// Analysis of a large dependency graph can be slow on first build.
pub const FREEZE_TIMEOUT: Duration = Duration::from_secs(1200);

/// Result of a bundling-tool invocation
pub struct FreezeRunResult {
    /// Exit status of the tool process
    pub status: std::process::ExitStatus,
    /// Captured stderr lines
    pub stderr_lines: Vec<String>,
}

/// Runs the bundling tool through the interpreter and streams its output.
///
/// Stdout is streamed line-by-line to the console as it arrives; stderr is
/// streamed and also captured for failure reporting. Both streams are
/// drained concurrently to avoid pipe deadlocks. A hard timeout bounds the
/// child; on expiry the child is killed and the run fails.
pub async fn run_tool(
    python: &PythonInterpreter,
    args: &[String],
    runtime_config: &crate::cli::RuntimeConfig,
) -> Result<FreezeRunResult> {
    let command_line = format!("{} {}", python.path().display(), args.join(" "));
    log::debug!("Running: {}", command_line);

    let mut child = python
        .command()
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|error| Error::CommandFailed {
            command: command_line.clone(),
            error,
        })?;

    // Both streams must complete before the exit status is checked
    let (_, stderr_result) = tokio::join!(
        // Stream stdout in real time
        async {
            if let Some(stdout) = child.stdout.take() {
                let reader = BufReader::new(stdout);
                let mut lines = reader.lines();

                while let Ok(Some(line)) = lines.next_line().await {
                    let _ = runtime_config.indent(&line);
                }
            }
        },
        // Stream stderr and capture it for failure reporting
        async {
            if let Some(stderr) = child.stderr.take() {
                let reader = BufReader::new(stderr);
                let mut lines = reader.lines();
                let mut captured_lines = Vec::new();

                while let Ok(Some(line)) = lines.next_line().await {
                    let _ = runtime_config.indent(&line);
                    captured_lines.push(line);
                }

                Some(captured_lines)
            } else {
                None
            }
        }
    );

    let status = tokio::time::timeout(FREEZE_TIMEOUT, child.wait()).await;

    let status = match status {
        Ok(Ok(status)) => status,
        Ok(Err(error)) => {
            return Err(Error::CommandFailed {
                command: command_line,
                error,
            });
        }
        Err(_elapsed) => {
            let _ = runtime_config.warn(&format!(
                "Freeze timed out after {} minutes, terminating...",
                FREEZE_TIMEOUT.as_secs() / 60
            ));

            if let Err(e) = child.kill().await {
                log::warn!("Failed to kill bundling tool process: {}", e);
            }
            let _ = tokio::time::timeout(Duration::from_secs(10), child.wait()).await;

            return Err(Error::Timeout {
                command: command_line,
                seconds: FREEZE_TIMEOUT.as_secs(),
            });
        }
    };

    // Both streams already completed via tokio::join!
    let stderr_lines = stderr_result.unwrap_or_default();

    Ok(FreezeRunResult {
        status,
        stderr_lines,
    })
}
