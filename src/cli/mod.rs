//! Command line interface for the packager.
//!
//! Parses arguments, merges the manifest recipe, drives the freeze pipeline,
//! and writes the optional build report.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{BuildReport, DataFile, Packager, Settings, SettingsBuilder};
use crate::error::{CliError, Result};
use crate::manifest::{self, FreezeManifest};
use std::io::IsTerminal;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(args.verbose);

    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let runtime_config = RuntimeConfig::from(&args);
    let started = std::time::Instant::now();

    let manifest = load_manifest(&args)?;
    let settings = build_settings(&args, manifest)?;

    let packager = Packager::new(settings);
    let run = packager.package(&runtime_config).await?;

    let _ = runtime_config.section("Build complete");
    let _ = runtime_config.success(&format!("Executable: {}", run.artifact.executable.display()));
    let _ = runtime_config.println(&format!("  size:     {} bytes", run.artifact.size));
    let _ = runtime_config.println(&format!("  sha256:   {}", run.artifact.checksum));

    if let Some(report_path) = &args.report {
        let report = BuildReport::new(&run, started.elapsed());
        report.write(report_path)?;
        let _ = runtime_config.success(&format!("Report: {}", report_path.display()));
    }

    if !args.no_pause {
        pause_for_acknowledgment()?;
    }

    Ok(0)
}

/// Initializes logging from `-v` occurrences.
///
/// Defaults are derived from the flag count, not from environment variables.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Loads the manifest recipe.
///
/// An explicit `--manifest` path must exist; otherwise the default file is
/// discovered beside the working directory and its absence means an empty
/// recipe.
fn load_manifest(args: &Args) -> Result<FreezeManifest> {
    if let Some(path) = &args.manifest {
        return manifest::load(path);
    }

    match manifest::discover(&std::env::current_dir()?) {
        Some(path) => manifest::load(&path),
        None => Ok(FreezeManifest::default()),
    }
}

/// Merges command-line flags over the manifest recipe into settings.
///
/// Scalar flags override scalar recipe values; repeatable flags replace the
/// corresponding recipe list entirely when given.
fn build_settings(args: &Args, manifest: FreezeManifest) -> Result<Settings> {
    let entry = args
        .entry
        .clone()
        .or(manifest.app.entry)
        .ok_or_else(|| CliError::MissingArgument {
            argument: "--entry".to_string(),
        })?;

    let name = match args.name.clone().or(manifest.app.name) {
        Some(name) => name,
        None => entry
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| CliError::InvalidArguments {
                reason: format!(
                    "cannot derive an output name from entry script {}",
                    entry.display()
                ),
            })?,
    };

    let console = args.console || manifest.app.console.unwrap_or(false);

    let mut builder = SettingsBuilder::new()
        .entry_script(entry)
        .output_name(name)
        .console(console)
        .skip_install(args.skip_install)
        .upgrade(manifest.tool.upgrade.unwrap_or(true));

    if let Some(icon) = args.icon.clone().or(manifest.resources.icon) {
        builder = builder.icon(icon);
    }

    let data_files: Vec<DataFile> = if args.add_data.is_empty() {
        manifest.resources.data
    } else {
        args.add_data
            .iter()
            .map(|raw| raw.parse::<DataFile>())
            .collect::<std::result::Result<_, _>>()?
    };
    builder = builder.data_files(data_files);

    let hidden_imports = if args.hidden_import.is_empty() {
        manifest.resources.hidden_imports
    } else {
        args.hidden_import.clone()
    };
    builder = builder.hidden_imports(hidden_imports);

    if let Some(dist_dir) = &args.dist_dir {
        builder = builder.dist_dir(dist_dir);
    }
    if let Some(work_dir) = &args.work_dir {
        builder = builder.work_dir(work_dir);
    }
    if let Some(python) = args.python.clone().or(manifest.python.interpreter) {
        builder = builder.python(python);
    }
    if let Some(requirement) = manifest.tool.requirement {
        builder = builder.requirement(requirement);
    }

    Ok(builder.build()?)
}

/// Pauses for operator acknowledgment on interactive terminals.
///
/// Non-interactive runs (CI, tests, pipes) never block.
fn pause_for_acknowledgment() -> std::io::Result<()> {
    use std::io::{BufRead, Write};

    if !std::io::stdin().is_terminal() {
        return Ok(());
    }

    print!("Press Enter to exit...");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
