//! Composition of probability-gated transforms into one pipeline.

use fruit_core::{AugmentationConfig, Result};
use image::RgbImage;
use rand::Rng;

use crate::stage::TransformStage;

/// An ordered sequence of [`TransformStage`]s applied to one input image
/// to produce one output image.
///
/// Stage order is fixed at construction: Rotate, AffineShiftScale,
/// HorizontalFlip, NoiseInject. Every run re-samples all random
/// decisions independently.
#[derive(Debug, Clone)]
pub struct AugmentationPipeline {
    stages: Vec<TransformStage>,
}

impl AugmentationPipeline {
    /// Builds the pipeline from a validated configuration.
    pub fn from_config(config: &AugmentationConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            stages: vec![
                TransformStage::Rotate {
                    probability: config.rotation_probability,
                    degrees: config.rotation_degrees,
                },
                TransformStage::AffineShiftScale {
                    probability: config.affine_probability,
                    translate: config.translate_fraction,
                    scale: config.scale_range,
                },
                TransformStage::HorizontalFlip {
                    probability: config.flip_probability,
                },
                TransformStage::NoiseInject {
                    probability: config.noise_probability,
                    mean: config.noise_mean,
                    std: config.noise_std,
                },
            ],
        })
    }

    /// The configured stages, in application order.
    pub fn stages(&self) -> &[TransformStage] {
        &self.stages
    }

    /// Runs the image through every stage in order, threading each
    /// stage's output into the next. Each stage draws its own fire/skip
    /// decision and parameters from `rng`.
    pub fn run<R: Rng>(&self, image: &RgbImage, rng: &mut R) -> Result<RgbImage> {
        let mut current = image.clone();
        for stage in &self.stages {
            current = stage.apply(&current, rng)?;
        }
        Ok(current)
    }
}
