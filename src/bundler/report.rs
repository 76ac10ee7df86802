//! JSON build reports.
//!
//! With `--report <path>` the verified artifact summary is serialized to
//! JSON for consumption by release scripts or CI.

use crate::bundler::builder::PackageRun;
use crate::bundler::error::{ErrorExt, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Serialized summary of a completed packaging run.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Output name of the distributable.
    pub name: String,
    /// Bundle directory.
    pub dist_dir: PathBuf,
    /// Executable path inside the bundle.
    pub executable: PathBuf,
    /// Total bundle size in bytes.
    pub size: u64,
    /// SHA-256 digest over the bundle tree.
    pub checksum: String,
    /// Interpreter version used for the build.
    pub python_version: String,
    /// Bundling-tool version used for the build.
    pub tool_version: String,
    /// UTC timestamp of report creation.
    pub created_at: DateTime<Utc>,
    /// Wall-clock duration of the run in seconds.
    pub duration_secs: f64,
}

impl BuildReport {
    /// Builds a report from a completed run.
    pub fn new(run: &PackageRun, duration: Duration) -> Self {
        Self {
            name: run.artifact.name.clone(),
            dist_dir: run.artifact.dist_dir.clone(),
            executable: run.artifact.executable.clone(),
            size: run.artifact.size,
            checksum: run.artifact.checksum.clone(),
            python_version: run.python_version.clone(),
            tool_version: run.tool_version.clone(),
            created_at: Utc::now(),
            duration_secs: duration.as_secs_f64(),
        }
    }

    /// Writes the report as pretty-printed JSON, creating parent directories
    /// as needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).fs_context("creating report directory", parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).fs_context("writing build report", path)?;

        log::info!("✓ Build report written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::builder::FrozenArtifact;

    fn sample_run() -> PackageRun {
        PackageRun {
            artifact: FrozenArtifact {
                name: "Py_Cam".to_string(),
                dist_dir: PathBuf::from("dist/Py_Cam"),
                executable: PathBuf::from("dist/Py_Cam/Py_Cam"),
                size: 4096,
                checksum: "ab".repeat(32),
            },
            python_version: "3.12.2".to_string(),
            tool_version: "6.6.0".to_string(),
        }
    }

    #[test]
    fn serializes_artifact_metadata() {
        let report = BuildReport::new(&sample_run(), Duration::from_secs(42));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"name\":\"Py_Cam\""));
        assert!(json.contains("\"size\":4096"));
        assert!(json.contains("\"tool_version\":\"6.6.0\""));
    }

    #[test]
    fn writes_report_creating_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/build.json");

        let report = BuildReport::new(&sample_run(), Duration::from_millis(1500));
        report.write(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Py_Cam"));
        assert!(text.contains("checksum"));
    }
}
