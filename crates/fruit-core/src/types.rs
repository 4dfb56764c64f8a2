//! Shared type definitions for dataset preparation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One unit of augmentation work: a source image and the number of
/// independent augmented copies requested for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmentationJob {
    /// Path to the source image file
    pub source: PathBuf,
    /// Number of augmented copies to produce
    pub copies: usize,
}

impl AugmentationJob {
    pub fn new(source: impl Into<PathBuf>, copies: usize) -> Self {
        Self {
            source: source.into(),
            copies,
        }
    }
}

/// Builds the output filename for the `index`-th augmented copy of
/// `original` (1-indexed). The original filename, extension included,
/// is preserved verbatim as the suffix.
pub fn augmented_file_name(index: usize, original: &str) -> String {
    format!("aug_{}_{}", index, original)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_augmented_file_name() {
        assert_eq!(augmented_file_name(1, "apple.jpg"), "aug_1_apple.jpg");
        assert_eq!(augmented_file_name(2, "apple.jpg"), "aug_2_apple.jpg");
        assert_eq!(
            augmented_file_name(10, "pear_2024.PNG"),
            "aug_10_pear_2024.PNG"
        );
    }

    #[test]
    fn test_augmentation_job() {
        let job = AugmentationJob::new("images/apple.jpg", 3);
        assert_eq!(job.source, PathBuf::from("images/apple.jpg"));
        assert_eq!(job.copies, 3);
    }
}
