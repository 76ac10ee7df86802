//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with proper
//! validation and error handling. The surface is a single flat invocation
//! with no subcommands, mirroring the build script it replaces.

use clap::Parser;
use std::path::PathBuf;

/// Standalone-executable packager for Python GUI applications
#[derive(Parser, Debug)]
#[command(
    name = "pyfreeze",
    version,
    about = "Standalone-executable packager for Python GUI applications",
    long_about = "Freezes a Python application into a self-contained executable directory.

Installs/upgrades the bundling tool (PyInstaller) through pip, validates the
declared inputs, runs the tool with the composed recipe, and verifies the
resulting bundle. Flags override values from pyfreeze.toml when one is found.

Usage:
  pyfreeze --entry Py_Cam.py --name Py_Cam --icon pycam.ico \\
      --add-data \"pycam.ico;.\" --hidden-import cv2 --hidden-import PIL.ImageTk
  pyfreeze --manifest pyfreeze.toml --no-pause --report build.json

Exit code 0 = executable guaranteed to exist at <dist>/<name>/<name>."
)]
pub struct Args {
    /// Path to the manifest recipe (default: pyfreeze.toml beside the
    /// working directory, when present)
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Entry script the bundling tool treats as the application's starting
    /// point
    #[arg(short, long, value_name = "SCRIPT")]
    pub entry: Option<PathBuf>,

    /// Name assigned to the generated distributable
    ///
    /// Defaults to the entry script's file stem.
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Icon resource embedded into the executable (.ico or .png)
    #[arg(long, value_name = "PATH")]
    pub icon: Option<PathBuf>,

    /// Data file copied alongside the bundle, as a SOURCE;DEST pair
    /// (repeatable; overrides the manifest list when given)
    #[arg(long = "add-data", value_name = "SOURCE;DEST")]
    pub add_data: Vec<String>,

    /// Module the bundling tool must include despite not detecting it
    /// statically (repeatable; overrides the manifest list when given)
    #[arg(long = "hidden-import", value_name = "MODULE")]
    pub hidden_import: Vec<String>,

    /// Keep a console window with the running application
    #[arg(long)]
    pub console: bool,

    /// Directory receiving the dist tree (default: dist)
    #[arg(long, value_name = "DIR")]
    pub dist_dir: Option<PathBuf>,

    /// Directory for intermediate build files (default: build)
    #[arg(long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Python interpreter to build with (default: python3/python on PATH)
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Skip the pip install step; the bundling tool must already be
    /// importable
    #[arg(long)]
    pub skip_install: bool,

    /// Never pause for acknowledgment after completion
    #[arg(long)]
    pub no_pause: bool,

    /// Write a JSON build report to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    ///
    /// Full validation of paths and modules happens inside the pipeline;
    /// this catches shapes clap cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("Output name cannot be empty".to_string());
        }

        if let Some(entry) = &self.entry
            && entry.as_os_str().is_empty()
        {
            return Err("Entry script path cannot be empty".to_string());
        }

        if self.hidden_import.iter().any(|m| m.trim().is_empty()) {
            return Err("Hidden import names cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(
            args.verbose > 0,
            false, // Never quiet
        );

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print message to stdout
    pub fn println(&self, message: &str) -> std::io::Result<()> {
        self.output.println(message)
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn empty_name_is_rejected() {
        let args = Args::parse_from(["pyfreeze", "--entry", "app.py", "--name", " "]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn runtime_config_forwards_stdout_writes() {
        let args = Args::parse_from(["pyfreeze", "--entry", "app.py"]);
        let config = RuntimeConfig::from(&args);
        assert!(config.println("packaging summary").is_ok());
        assert!(config.indent("detail line").is_ok());
    }

    #[test]
    fn repeated_flags_accumulate() {
        let args = Args::parse_from([
            "pyfreeze",
            "--entry",
            "Py_Cam.py",
            "--hidden-import",
            "cv2",
            "--hidden-import",
            "PIL.ImageTk",
            "--add-data",
            "pycam.ico;.",
        ]);
        assert!(args.validate().is_ok());
        assert_eq!(args.hidden_import.len(), 2);
        assert_eq!(args.add_data.len(), 1);
    }
}
