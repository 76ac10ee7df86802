//! Configuration structures for freeze operations.
//!
//! This module provides the build configuration types: application identity,
//! resource declarations, output layout, and the builder pattern for
//! assembling them into validated [`Settings`].

mod app;
mod builder;
mod core;
mod resources;

// Re-export all public types
pub use app::AppSettings;
pub use builder::{DEFAULT_DIST_DIR, DEFAULT_REQUIREMENT, DEFAULT_WORK_DIR, SettingsBuilder};
pub use core::Settings;
pub use resources::{DataFile, ResourceSettings};
