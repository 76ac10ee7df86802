//! Main packager orchestration and coordination.
//!
//! This module provides the [`Packager`] orchestrator that runs the freeze
//! pipeline stage by stage and verifies the resulting artifact.

use crate::bundler::{
    Result, Settings,
    error::{Error, ErrorExt},
    freeze, python,
    python::PythonInterpreter,
    resources::icons,
    utils,
};

use super::checksum::calculate_sha256;
use std::path::PathBuf;

/// A verified frozen artifact.
///
/// Produced only after the executable has been confirmed to exist, so a
/// value of this type is the exit-code-0 contract made concrete.
#[derive(Debug, Clone)]
pub struct FrozenArtifact {
    /// Output name of the distributable.
    pub name: String,
    /// Bundle directory (`<dist>/<name>/`).
    pub dist_dir: PathBuf,
    /// Path of the executable inside the bundle.
    pub executable: PathBuf,
    /// Total size of the bundle tree in bytes.
    pub size: u64,
    /// SHA-256 digest over the bundle tree.
    pub checksum: String,
}

/// Outcome of a completed packaging run.
#[derive(Debug, Clone)]
pub struct PackageRun {
    /// The verified artifact.
    pub artifact: FrozenArtifact,
    /// Version of the interpreter that performed the build.
    pub python_version: String,
    /// Version of the bundling tool that performed the build.
    pub tool_version: String,
}

/// Main packager orchestrator.
///
/// Runs the pipeline strictly sequentially:
///
/// 1. Locate the Python interpreter
/// 2. Validate inputs (entry script, icon, data files, hidden imports)
/// 3. Install or upgrade the bundling tool, then gate on its version
/// 4. Invoke the tool with the composed recipe
/// 5. Verify the artifact and summarize it
///
/// Validation precedes every side-effecting step, so a missing entry script
/// terminates the run before any artifact or network activity.
///
/// # Examples
///
/// ```no_run
/// use pyfreeze::bundler::{Packager, Settings};
/// use pyfreeze::cli::RuntimeConfig;
///
/// # async fn example(settings: Settings, rc: RuntimeConfig) -> pyfreeze::bundler::Result<()> {
/// let packager = Packager::new(settings);
/// let run = packager.package(&rc).await?;
/// println!("Created {}", run.artifact.executable.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager {
    settings: Settings,
}

impl Packager {
    /// Creates a new packager with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the packager settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Executes the full freeze pipeline.
    ///
    /// # Returns
    ///
    /// A [`PackageRun`] whose artifact is guaranteed to exist on disk.
    pub async fn package(
        &self,
        runtime_config: &crate::cli::RuntimeConfig,
    ) -> Result<PackageRun> {
        // 1. Locate interpreter
        let _ = runtime_config.section("Locating Python interpreter");
        let python = PythonInterpreter::locate(self.settings.python_override()).await?;
        let _ = runtime_config.success(&format!(
            "Python {} at {}",
            python.version(),
            python.path().display()
        ));

        // 2. Validate inputs
        let _ = runtime_config.section("Validating inputs");
        self.validate_inputs(&python).await?;
        let _ = runtime_config.success("Inputs validated");

        // 3. Install step + version gate
        let _ = runtime_config.section("Preparing bundling tool");
        if self.settings.skip_install() {
            log::debug!("Install step skipped by request");
            let _ = runtime_config.verbose_println("Install step skipped (--skip-install)");
        } else {
            python::install_tool(
                &python,
                self.settings.requirement(),
                self.settings.upgrade(),
            )
            .await?;
        }
        let tool_version = python::tool_version(&python).await?;
        python::check_tool_version(&tool_version)?;
        let _ = runtime_config.success(&format!("Bundling tool {} ready", tool_version));

        // 4. Build step
        let _ = runtime_config.section("Freezing application");
        utils::fs::create_dir_all(self.settings.dist_dir(), false).await?;
        utils::fs::create_dir_all(self.settings.work_dir(), false).await?;
        freeze::freeze_project(&self.settings, &python, runtime_config).await?;

        // 5. Verify artifact
        let _ = runtime_config.section("Verifying artifact");
        let artifact = self.verify_artifact().await?;
        let _ = runtime_config.success(&format!(
            "{} ({} bytes, sha256 {})",
            artifact.executable.display(),
            artifact.size,
            &artifact.checksum[..12]
        ));

        Ok(PackageRun {
            artifact,
            python_version: python.version().to_string(),
            tool_version: tool_version.to_string(),
        })
    }

    /// Validates every declared input before any side-effecting stage.
    async fn validate_inputs(&self, python: &PythonInterpreter) -> Result<()> {
        // Entry script must exist and be a regular file
        let entry = self.settings.entry_script();
        match tokio::fs::metadata(entry).await {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => return Err(Error::EntryScriptNotFile(entry.to_path_buf())),
            Err(_) => return Err(Error::EntryScriptMissing(entry.to_path_buf())),
        }

        // Icon must exist and decode when configured
        if let Some(icon_path) = self.settings.icon() {
            let info = icons::load_icon(icon_path)?;
            log::info!(
                "✓ Icon {} ({}x{} {})",
                info.path.display(),
                info.width,
                info.height,
                info.format
            );
        }

        // Every data-file source must exist
        for data_file in self.settings.data_files() {
            if !data_file.source.exists() {
                return Err(Error::DataFileMissing(data_file.source.clone()));
            }
        }

        // Every declared hidden import must resolve
        python::resolve_hidden_imports(python, self.settings.hidden_imports()).await?;

        Ok(())
    }

    /// Verifies the exit-code-0 contract: the executable exists inside the
    /// bundle directory. Summarizes the bundle with its size and checksum.
    async fn verify_artifact(&self) -> Result<FrozenArtifact> {
        let bundle_dir = self.settings.bundle_dir();
        let executable = self.settings.executable_path();

        match tokio::fs::metadata(&executable).await {
            Ok(metadata) if metadata.is_file() => {}
            _ => return Err(Error::ArtifactMissing(executable)),
        }

        let mut size = 0u64;
        for entry in walkdir::WalkDir::new(&bundle_dir)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let metadata = tokio::fs::metadata(entry.path())
                .await
                .fs_context("reading artifact metadata", entry.path())?;
            size += metadata.len();
        }

        let checksum = calculate_sha256(&bundle_dir).await?;

        Ok(FrozenArtifact {
            name: self.settings.output_name().to_string(),
            dist_dir: bundle_dir,
            executable,
            size,
            checksum,
        })
    }
}
