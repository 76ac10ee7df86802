//! Builder for constructing Settings.

use super::{AppSettings, DataFile, ResourceSettings, Settings};
use crate::bundler::error::Context;
use std::path::{Path, PathBuf};

/// Default pip requirement for the bundling tool.
pub const DEFAULT_REQUIREMENT: &str = "pyinstaller";

/// Default dist directory, matching the bundling tool's own convention.
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Default work directory for intermediate build files.
pub const DEFAULT_WORK_DIR: &str = "build";

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for assembling a freeze recipe with validation.
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
///     .icon("pycam.ico")
///     .data_file("pycam.ico;.".parse()?)
///     .hidden_import("cv2")
///     .hidden_import("PIL.ImageTk")
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`Settings`] - The built settings struct
#[derive(Default)]
pub struct SettingsBuilder {
    entry_script: Option<PathBuf>,
    output_name: Option<String>,
    console: bool,
    resources: ResourceSettings,
    dist_dir: Option<PathBuf>,
    work_dir: Option<PathBuf>,
    spec_dir: Option<PathBuf>,
    python: Option<PathBuf>,
    requirement: Option<String>,
    upgrade: bool,
    skip_install: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Self {
            upgrade: true,
            ..Default::default()
        }
    }

    /// Sets the entry script path.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn entry_script<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.entry_script = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output name assigned to the distributable.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn output_name<S: Into<String>>(mut self, name: S) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Sets whether the frozen application keeps a console window.
    ///
    /// Defaults to false (windowed GUI build).
    pub fn console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Sets the icon resource path.
    pub fn icon<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.resources.icon = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a single data file declaration.
    pub fn data_file(mut self, data_file: DataFile) -> Self {
        self.resources.data_files.push(data_file);
        self
    }

    /// Replaces the data file declarations.
    pub fn data_files(mut self, data_files: Vec<DataFile>) -> Self {
        self.resources.data_files = data_files;
        self
    }

    /// Adds a single hidden import.
    pub fn hidden_import<S: Into<String>>(mut self, module: S) -> Self {
        self.resources.hidden_imports.push(module.into());
        self
    }

    /// Replaces the hidden import list.
    pub fn hidden_imports(mut self, modules: Vec<String>) -> Self {
        self.resources.hidden_imports = modules;
        self
    }

    /// Sets the dist directory.
    ///
    /// Defaults to `dist`, the bundling tool's own convention.
    pub fn dist_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dist_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the work directory for intermediate build files.
    ///
    /// Defaults to `build`.
    pub fn work_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.work_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory receiving the generated spec file.
    ///
    /// Defaults to the current directory.
    pub fn spec_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.spec_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets an explicit Python interpreter.
    ///
    /// When unset, the interpreter is discovered on PATH.
    pub fn python<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.python = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the pip requirement for the bundling tool.
    ///
    /// Defaults to [`DEFAULT_REQUIREMENT`].
    pub fn requirement<S: Into<String>>(mut self, requirement: S) -> Self {
        self.requirement = Some(requirement.into());
        self
    }

    /// Sets whether pip installs with its upgrade flag.
    ///
    /// Defaults to true, matching the reference recipe.
    pub fn upgrade(mut self, upgrade: bool) -> Self {
        self.upgrade = upgrade;
        self
    }

    /// Skips the install step; the tool must already be importable.
    pub fn skip_install(mut self, skip: bool) -> Self {
        self.skip_install = skip;
        self
    }

    /// Builds the settings, validating required fields.
    ///
    /// # Errors
    ///
    /// Fails when the entry script or output name is missing, or the output
    /// name is empty.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let entry_script = self.entry_script.context("entry script is required")?;
        let name = self.output_name.context("output name is required")?;
        if name.trim().is_empty() {
            crate::bail!("output name cannot be empty");
        }

        Ok(Settings::new(
            AppSettings {
                entry_script,
                name,
                console: self.console,
            },
            self.resources,
            self.dist_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
            self.work_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WORK_DIR)),
            self.spec_dir.unwrap_or_else(|| PathBuf::from(".")),
            self.python,
            self.requirement
                .unwrap_or_else(|| DEFAULT_REQUIREMENT.to_string()),
            self.upgrade,
            self.skip_install,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let settings = SettingsBuilder::new()
            .entry_script("Py_Cam.py")
            .output_name("Py_Cam")
            .build()
            .unwrap();

        assert_eq!(settings.entry_script(), Path::new("Py_Cam.py"));
        assert_eq!(settings.output_name(), "Py_Cam");
        assert!(!settings.console());
        assert_eq!(settings.dist_dir(), Path::new(DEFAULT_DIST_DIR));
        assert_eq!(settings.work_dir(), Path::new(DEFAULT_WORK_DIR));
        assert_eq!(settings.requirement(), DEFAULT_REQUIREMENT);
        assert!(settings.upgrade());
        assert!(!settings.skip_install());
    }

    #[test]
    fn requires_entry_script() {
        let err = SettingsBuilder::new()
            .output_name("Py_Cam")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("entry script"));
    }

    #[test]
    fn rejects_empty_output_name() {
        let err = SettingsBuilder::new()
            .entry_script("Py_Cam.py")
            .output_name("  ")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("output name"));
    }

    #[test]
    fn executable_path_lands_inside_bundle_dir() {
        let settings = SettingsBuilder::new()
            .entry_script("Py_Cam.py")
            .output_name("Py_Cam")
            .dist_dir("out/dist")
            .build()
            .unwrap();

        let expected = if cfg!(target_os = "windows") {
            PathBuf::from("out/dist/Py_Cam/Py_Cam.exe")
        } else {
            PathBuf::from("out/dist/Py_Cam/Py_Cam")
        };
        assert_eq!(settings.executable_path(), expected);
    }
}
