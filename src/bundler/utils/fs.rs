//! File system utilities for packaging.
//!
//! Idempotent directory operations with path-context error reporting.

use crate::bundler::error::{ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if
/// specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        // Try removal, ignore NotFound (idempotent)
        match fs::remove_dir_all(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).fs_context("removing directory", path),
        }
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_dir_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c");

        create_dir_all(&path, false).await.unwrap();
        create_dir_all(&path, false).await.unwrap();
        assert!(path.is_dir());
    }

    #[tokio::test]
    async fn create_dir_all_with_erase_clears_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out");
        create_dir_all(&path, false).await.unwrap();
        tokio::fs::write(path.join("stale"), b"x").await.unwrap();

        create_dir_all(&path, true).await.unwrap();
        assert!(path.is_dir());
        assert!(!path.join("stale").exists());
    }
}
