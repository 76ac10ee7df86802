//! Build recipe loading from pyfreeze.toml.
//!
//! The manifest is the on-disk form of the invocation recipe: a static set
//! of bundler options re-executed on each build. Command-line flags override
//! manifest values.

use crate::bundler::settings::DataFile;
use crate::error::{CliError, PackagerError, Result};
use std::path::{Path, PathBuf};

/// Default manifest file name, discovered beside the working directory.
pub const MANIFEST_FILE_NAME: &str = "pyfreeze.toml";

/// The build recipe parsed from pyfreeze.toml.
///
/// ```toml
/// [app]
/// entry = "Py_Cam.py"
/// name = "Py_Cam"
/// console = false
///
/// [resources]
/// icon = "pycam.ico"
/// data = ["pycam.ico;."]
/// hidden-imports = ["cv2", "PIL.ImageTk", "numpy"]
///
/// [python]
/// interpreter = "/usr/bin/python3"
///
/// [tool]
/// requirement = "pyinstaller"
/// upgrade = true
/// ```
///
/// Every table and field is optional; an empty file is a valid manifest.
#[derive(Debug, Default, serde::Deserialize)]
pub struct FreezeManifest {
    /// Application identity ([app] table).
    #[serde(default)]
    pub app: AppTable,

    /// Bundled resources ([resources] table).
    #[serde(default)]
    pub resources: ResourceTable,

    /// Interpreter selection ([python] table).
    #[serde(default)]
    pub python: PythonTable,

    /// Bundling-tool behaviour ([tool] table).
    #[serde(default)]
    pub tool: ToolTable,
}

/// Application identity.
#[derive(Debug, Default, serde::Deserialize)]
pub struct AppTable {
    /// Path to the entry script.
    #[serde(default)]
    pub entry: Option<PathBuf>,

    /// Name assigned to the distributable.
    #[serde(default)]
    pub name: Option<String>,

    /// Whether the frozen application keeps a console window.
    #[serde(default)]
    pub console: Option<bool>,
}

/// Bundled resources.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ResourceTable {
    /// Icon file path.
    #[serde(default)]
    pub icon: Option<PathBuf>,

    /// Data file declarations in `SOURCE;DEST` syntax.
    #[serde(default)]
    pub data: Vec<DataFile>,

    /// Hidden import module names.
    #[serde(default, rename = "hidden-imports")]
    pub hidden_imports: Vec<String>,
}

/// Interpreter selection.
#[derive(Debug, Default, serde::Deserialize)]
pub struct PythonTable {
    /// Explicit interpreter path or executable name.
    #[serde(default)]
    pub interpreter: Option<PathBuf>,
}

/// Bundling-tool behaviour.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ToolTable {
    /// pip requirement string for the bundling tool.
    #[serde(default)]
    pub requirement: Option<String>,

    /// Whether pip installs with its upgrade flag (default true).
    #[serde(default)]
    pub upgrade: Option<bool>,
}

/// Loads a manifest from the given path.
///
/// Reads and parses the file exactly once; a missing file is an error here
/// because the caller only passes explicitly configured or discovered paths.
pub fn load(path: &Path) -> Result<FreezeManifest> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        PackagerError::Cli(CliError::ExecutionFailed {
            command: "read_manifest".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let manifest: FreezeManifest = toml::from_str(&text)?;
    log::debug!("Loaded manifest from {}", path.display());
    Ok(manifest)
}

/// Looks for the default manifest in the given directory.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(MANIFEST_FILE_NAME);
    candidate.is_file().then_some(candidate)
}
