//! Packager core: settings, Python toolchain, freeze execution, and
//! artifact verification.
//!
//! The pipeline is a single sequential job: locate the interpreter, validate
//! inputs, install the bundling tool, invoke it, verify the artifact. No
//! state machine and no concurrency beyond draining the child's output
//! streams.

pub mod builder;
pub mod error;
pub mod freeze;
pub mod python;
pub mod report;
pub mod resources;
pub mod settings;
pub mod utils;

// Re-export commonly used types
pub use builder::{FrozenArtifact, PackageRun, Packager};
pub use error::{Error, Result};
pub use report::BuildReport;
pub use settings::{
    AppSettings, DEFAULT_REQUIREMENT, DataFile, ResourceSettings, Settings, SettingsBuilder,
};
