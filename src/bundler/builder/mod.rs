//! Packager orchestration and artifact verification.

pub mod checksum;
mod orchestrator;

pub use orchestrator::{FrozenArtifact, PackageRun, Packager};
