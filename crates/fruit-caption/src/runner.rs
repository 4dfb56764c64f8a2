//! Directory-driver loop for caption generation.

use fruit_augment::loader;
use fruit_core::Result;
use std::path::Path;
use tracing::info;

use crate::manifest::{write_manifest, CaptionRecord};
use crate::service::CaptionService;

/// Counters reported after a caption pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptionSummary {
    /// Images captioned and recorded in the manifest
    pub captioned: usize,
}

/// Drives a [`CaptionService`] over a directory of images and writes the
/// resulting manifest.
///
/// Decode and captioner failures propagate to the caller; captioning is
/// supervised-label generation, so a partial manifest is not written.
pub struct CaptionRunner<S: CaptionService> {
    service: S,
}

impl<S: CaptionService> CaptionRunner<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Captions every image in `image_dir` and writes the manifest to
    /// `output_json`.
    pub fn run(&self, image_dir: &Path, output_json: &Path) -> Result<CaptionSummary> {
        let files = loader::scan_images(image_dir)?;
        info!(
            "Generating captions for {} images from {}",
            files.len(),
            image_dir.display()
        );

        let mut records = Vec::with_capacity(files.len());
        for path in &files {
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            let image = loader::load_rgb(path)?;
            let caption = self.service.caption(&image)?;

            info!("{} -> {}", name, caption);
            records.push(CaptionRecord {
                image: name,
                caption,
            });
        }

        write_manifest(output_json, &records)?;
        info!(
            "Saved {} captions to {}",
            records.len(),
            output_json.display()
        );

        Ok(CaptionSummary {
            captioned: records.len(),
        })
    }
}
