//! Artifact checksum calculation.
//!
//! This module provides SHA256 checksum calculation for frozen artifacts,
//! supporting both single files and directory trees (the one-directory
//! bundle layout produces a tree, not a single file).

use crate::{bail, bundler::Result, bundler::error::ErrorExt};
use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

/// Calculates SHA256 checksum of a file or directory.
///
/// For files: Reads in 8KB chunks and computes the SHA-256 hash.
/// For directories: Recursively hashes all files in deterministic order.
///
/// # Arguments
///
/// * `path` - Path to file or directory to hash
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If path cannot be read or is neither file nor directory
pub async fn calculate_sha256(path: &std::path::Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading checksum target metadata", path)?;

    if metadata.is_file() {
        calculate_file_sha256(path).await
    } else if metadata.is_dir() {
        calculate_directory_sha256(path).await
    } else {
        bail!("Path is neither file nor directory: {}", path.display())
    }
}

/// Calculates SHA256 checksum of a single file.
///
/// Reads the file in 8KB chunks to handle large files efficiently.
async fn calculate_file_sha256(file_path: &std::path::Path) -> Result<String> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Calculates SHA256 checksum of a directory tree.
///
/// Traverses the tree, hashing each file's relative path and content in
/// sorted order so that two runs over equivalent trees produce the same
/// digest regardless of filesystem iteration order.
///
/// # Algorithm
///
/// 1. Recursively collect all files using walkdir
/// 2. Sort paths lexicographically for deterministic order
/// 3. For each file: hash(relative_path + file_content)
/// 4. Return final combined hash
async fn calculate_directory_sha256(dir_path: &std::path::Path) -> Result<String> {
    // Collect all files recursively
    let mut entries: Vec<_> = walkdir::WalkDir::new(dir_path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();

    // Sort by path for deterministic ordering
    entries.sort_by_key(|e| e.path().to_path_buf());

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    for entry in entries {
        // Include relative path in hash (preserves directory structure)
        if let Ok(rel_path) = entry.path().strip_prefix(dir_path) {
            hasher.update(rel_path.to_string_lossy().as_bytes());
        }

        let mut file = tokio::fs::File::open(entry.path())
            .await
            .fs_context("opening file for hashing", entry.path())?;

        loop {
            let n = file
                .read(&mut buffer)
                .await
                .fs_context("reading file for hash calculation", entry.path())?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashes_known_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        tokio::fs::write(&path, b"hello world").await.unwrap();

        let digest = calculate_sha256(&path).await.unwrap();
        assert_eq!(
            digest,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[tokio::test]
    async fn directory_digest_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("bundle");
        tokio::fs::create_dir_all(bundle.join("sub")).await.unwrap();
        tokio::fs::write(bundle.join("a.txt"), b"alpha").await.unwrap();
        tokio::fs::write(bundle.join("sub/b.txt"), b"beta").await.unwrap();

        let first = calculate_sha256(&bundle).await.unwrap();
        let second = calculate_sha256(&bundle).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[tokio::test]
    async fn equivalent_trees_hash_equal() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["one", "two"] {
            let bundle = dir.path().join(name);
            tokio::fs::create_dir_all(&bundle).await.unwrap();
            tokio::fs::write(bundle.join("app"), b"payload").await.unwrap();
        }

        let one = calculate_sha256(&dir.path().join("one")).await.unwrap();
        let two = calculate_sha256(&dir.path().join("two")).await.unwrap();
        assert_eq!(one, two);
    }
}
