//! Packager library for freezing Python GUI applications into standalone
//! executable directories.
//!
//! Wraps the PyInstaller bundling tool with interpreter discovery, input
//! validation, a durable manifest recipe, and artifact verification.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod manifest;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
