//! Source image discovery and loading.

use fruit_core::{Error, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Extensions accepted as source images (compared case-insensitively).
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Returns true when the path carries a recognized image extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Scans `dir` for image files, silently ignoring every other entry.
/// Results are sorted for stable processing order.
pub fn scan_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::NotFound(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }
    if !dir.is_dir() {
        return Err(Error::InvalidArgument(format!(
            "Path is not a directory: {}",
            dir.display()
        )));
    }

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file(&path) {
            images.push(path);
        }
    }

    images.sort();
    Ok(images)
}

/// Decodes an image file and converts it to RGB color mode.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = image::open(path)
        .map_err(|e| Error::Image(format!("Failed to load image {}: {}", path.display(), e)))?;
    Ok(image.to_rgb8())
}
