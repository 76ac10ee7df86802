//! Core Settings struct and implementations.

use super::{AppSettings, DataFile, ResourceSettings};
use std::path::{Path, PathBuf};

/// Main settings for packager operations.
///
/// Central configuration for a freeze run, constructed via
/// [`SettingsBuilder`]. Holds application settings, resource declarations,
/// the output directory layout, and interpreter/tool behaviour.
///
/// # Examples
///
/// ```no_run
/// use pyfreeze::bundler::SettingsBuilder;
///
/// # fn example() -> pyfreeze::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .entry_script("Py_Cam.py")
///     .output_name("Py_Cam")
///     .hidden_import("cv2")
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
/// - [`AppSettings`] - Application identity and console mode
/// - [`ResourceSettings`] - Icon, data files, and hidden imports
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Application identity.
    app: AppSettings,

    /// Bundled resources.
    resources: ResourceSettings,

    /// Directory receiving the dist tree.
    dist_dir: PathBuf,

    /// Directory for the bundling tool's intermediate build files.
    work_dir: PathBuf,

    /// Directory receiving the generated tool spec file.
    spec_dir: PathBuf,

    /// Explicit interpreter override; None means PATH discovery.
    python: Option<PathBuf>,

    /// Requirement string passed to pip for the bundling tool.
    requirement: String,

    /// Whether pip installs with its upgrade flag.
    upgrade: bool,

    /// Skip the install step entirely; the tool must already be importable.
    skip_install: bool,
}

impl Settings {
    /// Returns the entry script path.
    pub fn entry_script(&self) -> &Path {
        &self.app.entry_script
    }

    /// Returns the output name assigned to the distributable.
    pub fn output_name(&self) -> &str {
        &self.app.name
    }

    /// Returns whether the frozen application keeps a console window.
    pub fn console(&self) -> bool {
        self.app.console
    }

    /// Returns the configured icon path, if any.
    pub fn icon(&self) -> Option<&Path> {
        self.resources.icon.as_deref()
    }

    /// Returns the declared data files.
    pub fn data_files(&self) -> &[DataFile] {
        &self.resources.data_files
    }

    /// Returns the declared hidden imports.
    pub fn hidden_imports(&self) -> &[String] {
        &self.resources.hidden_imports
    }

    /// Returns the dist directory.
    ///
    /// The bundle lands at `<dist_dir>/<output_name>/`.
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Returns the work directory for intermediate build files.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Returns the directory receiving the generated spec file.
    pub fn spec_dir(&self) -> &Path {
        &self.spec_dir
    }

    /// Returns the explicit interpreter override, if any.
    pub fn python_override(&self) -> Option<&Path> {
        self.python.as_deref()
    }

    /// Returns the pip requirement for the bundling tool.
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// Returns whether pip installs with its upgrade flag.
    pub fn upgrade(&self) -> bool {
        self.upgrade
    }

    /// Returns whether the install step is skipped.
    pub fn skip_install(&self) -> bool {
        self.skip_install
    }

    /// Returns the directory the verified bundle lands in.
    pub fn bundle_dir(&self) -> PathBuf {
        self.dist_dir.join(&self.app.name)
    }

    /// Returns the full path of the executable inside the bundle.
    ///
    /// Automatically appends `.exe` extension on Windows.
    pub fn executable_path(&self) -> PathBuf {
        let mut path = self.bundle_dir().join(&self.app.name);

        if cfg!(target_os = "windows") {
            path.set_extension("exe");
        }

        path
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        app: AppSettings,
        resources: ResourceSettings,
        dist_dir: PathBuf,
        work_dir: PathBuf,
        spec_dir: PathBuf,
        python: Option<PathBuf>,
        requirement: String,
        upgrade: bool,
        skip_install: bool,
    ) -> Self {
        Self {
            app,
            resources,
            dist_dir,
            work_dir,
            spec_dir,
            python,
            requirement,
            upgrade,
            skip_install,
        }
    }
}
