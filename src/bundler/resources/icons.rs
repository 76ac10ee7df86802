//! Icon loading and validation.
//!
//! The icon resource is decoded before any side-effecting build step so that
//! an unreadable or truncated file fails the run up front instead of deep
//! inside the bundling tool.

use crate::bundler::error::{Error, Result};
use image::GenericImageView;
use std::path::{Path, PathBuf};

/// Supported icon container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    /// Windows ICO container.
    Ico,
    /// Portable Network Graphics.
    Png,
}

impl std::fmt::Display for IconFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconFormat::Ico => write!(f, "ICO"),
            IconFormat::Png => write!(f, "PNG"),
        }
    }
}

/// A validated icon resource with its decoded dimensions.
#[derive(Debug, Clone)]
pub struct IconInfo {
    /// Path to the icon file.
    pub path: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Container format, derived from the file extension.
    pub format: IconFormat,
}

/// Loads and validates an icon file.
///
/// Accepts ICO and PNG files; anything else is rejected by extension before
/// decoding is attempted.
///
/// # Errors
///
/// - [`Error::IconMissing`] when the file does not exist
/// - [`Error::IconFormat`] for unsupported extensions
/// - [`Error::IconDecode`] when the file cannot be decoded
pub fn load_icon(path: &Path) -> Result<IconInfo> {
    if !path.exists() {
        return Err(Error::IconMissing(path.to_path_buf()));
    }

    let format = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("ico") => IconFormat::Ico,
        Some("png") => IconFormat::Png,
        _ => return Err(Error::IconFormat(path.to_path_buf())),
    };

    let decoded = image::open(path).map_err(|e| Error::IconDecode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let (width, height) = decoded.dimensions();
    log::debug!(
        "Icon {} decoded: {}x{} {}",
        path.display(),
        width,
        height,
        format
    );

    Ok(IconInfo {
        path: path.to_path_buf(),
        width,
        height,
        format,
    })
}
