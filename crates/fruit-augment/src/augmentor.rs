//! Directory-level augmentation driver.

use fruit_core::{augmented_file_name, AugmentationConfig, AugmentationJob, Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::loader;
use crate::pipeline::AugmentationPipeline;

/// Per-run counters reported after a directory pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AugmentSummary {
    /// Source files augmented successfully
    pub processed: usize,
    /// Source files that failed to decode or process
    pub failed: usize,
    /// Augmented copies written
    pub written: usize,
}

/// Drives the augmentation pipeline over a directory of source images,
/// producing a fixed number of independent augmented copies per image.
///
/// A failure on one file is reported and skipped; the run continues
/// with the next file.
#[derive(Debug, Clone)]
pub struct DatasetAugmentor {
    pipeline: AugmentationPipeline,
    copies: usize,
    seed: Option<u64>,
}

impl DatasetAugmentor {
    /// Creates an augmentor from an explicit pipeline and copy count.
    pub fn new(pipeline: AugmentationPipeline, copies: usize) -> Result<Self> {
        if copies == 0 {
            return Err(Error::Config(
                "copies per image must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            pipeline,
            copies,
            seed: None,
        })
    }

    /// Builds the augmentor entirely from configuration, validating it
    /// before any file processing.
    pub fn from_config(config: &AugmentationConfig) -> Result<Self> {
        let pipeline = AugmentationPipeline::from_config(config)?;
        Self::new(pipeline, config.copies_per_image)
    }

    /// Fixes the base seed so every run over the same directory produces
    /// the same outputs. Without a seed each file uses fresh entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of copies generated per source image.
    pub fn copies(&self) -> usize {
        self.copies
    }

    /// Random source for the `index`-th file of a run. Derived from the
    /// base seed when one is set, fresh entropy otherwise.
    pub fn file_rng(&self, index: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => StdRng::from_entropy(),
        }
    }

    /// Materializes the unit of work for one source file, carrying the
    /// configured copy count.
    pub fn job(&self, source: impl Into<PathBuf>) -> AugmentationJob {
        AugmentationJob::new(source, self.copies)
    }

    /// Executes one augmentation job, writing `job.copies` independent
    /// outputs named `aug_{i}_{originalFilename}` into `output_dir`.
    /// Returns the number of copies written.
    pub fn process_job<R: Rng>(
        &self,
        job: &AugmentationJob,
        output_dir: &Path,
        rng: &mut R,
    ) -> Result<usize> {
        let file_name = job
            .source
            .file_name()
            .ok_or_else(|| {
                Error::InvalidArgument(format!("path has no file name: {}", job.source.display()))
            })?
            .to_string_lossy()
            .to_string();

        let image = loader::load_rgb(&job.source)?;

        let mut written = 0;
        for index in 1..=job.copies {
            let augmented = self.pipeline.run(&image, rng)?;
            let output_path = output_dir.join(augmented_file_name(index, &file_name));
            augmented
                .save(&output_path)
                .map_err(|e| Error::Image(format!("Failed to save {}: {}", output_path.display(), e)))?;
            written += 1;
        }

        Ok(written)
    }

    /// Enumerates the image files of `input_dir` and augments each one,
    /// creating `output_dir` (parents included) before any writes.
    ///
    /// Individual file failures are logged and counted, never fatal to
    /// the run. Returns the per-run summary.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<AugmentSummary> {
        let files = loader::scan_images(input_dir)?;
        fs::create_dir_all(output_dir)?;

        info!(
            "Augmenting {} images from {} ({} copies each)",
            files.len(),
            input_dir.display(),
            self.copies
        );

        let mut summary = AugmentSummary::default();
        for (index, source) in files.iter().enumerate() {
            let name = source.file_name().unwrap_or_default().to_string_lossy();
            let job = self.job(source);
            let mut rng = self.file_rng(index);

            match self.process_job(&job, output_dir, &mut rng) {
                Ok(written) => {
                    info!("Augmented {} -> {} new versions", name, written);
                    summary.processed += 1;
                    summary.written += written;
                }
                Err(e) => {
                    warn!("Could not process {}: {}", name, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Done: {} processed, {} failed, {} copies written to {}",
            summary.processed,
            summary.failed,
            summary.written,
            output_dir.display()
        );

        Ok(summary)
    }
}
