//! Configuration structures for dataset augmentation and captioning.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the stochastic augmentation pipeline.
///
/// Every stage carries an independent application probability; ranges are
/// sampled fresh on every pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmentationConfig {
    /// Number of augmented copies to generate per source image
    pub copies_per_image: usize,
    /// Rotation angle range in degrees (min, max)
    pub rotation_degrees: (f32, f32),
    /// Probability of applying the rotation stage
    pub rotation_probability: f32,
    /// Maximum translation as a fraction of width/height (dx, dy)
    pub translate_fraction: (f32, f32),
    /// Uniform scale factor range (min, max)
    pub scale_range: (f32, f32),
    /// Probability of applying the affine shift/scale stage
    pub affine_probability: f32,
    /// Probability of mirroring the image left-right
    pub flip_probability: f32,
    /// Mean of the additive Gaussian noise (normalized pixel space)
    pub noise_mean: f32,
    /// Standard deviation of the additive Gaussian noise
    pub noise_std: f32,
    /// Probability of applying the noise injection stage
    pub noise_probability: f32,
}

impl Default for AugmentationConfig {
    fn default() -> Self {
        Self {
            copies_per_image: 2,
            rotation_degrees: (-90.0, 90.0),
            rotation_probability: 0.5,
            translate_fraction: (0.2, 0.2),
            scale_range: (1.0, 1.1),
            affine_probability: 0.5,
            flip_probability: 0.5,
            noise_mean: 0.0,
            noise_std: 0.05,
            noise_probability: 0.3,
        }
    }
}

impl AugmentationConfig {
    /// Validates the configuration, failing fast before any file processing.
    pub fn validate(&self) -> Result<()> {
        if self.copies_per_image == 0 {
            return Err(Error::Config(
                "copies_per_image must be at least 1".to_string(),
            ));
        }

        for (name, p) in [
            ("rotation_probability", self.rotation_probability),
            ("affine_probability", self.affine_probability),
            ("flip_probability", self.flip_probability),
            ("noise_probability", self.noise_probability),
        ] {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(Error::Config(format!(
                    "{} must be in [0, 1], got {}",
                    name, p
                )));
            }
        }

        let (deg_min, deg_max) = self.rotation_degrees;
        if !deg_min.is_finite() || !deg_max.is_finite() || deg_min > deg_max {
            return Err(Error::Config(format!(
                "rotation_degrees must be a finite (min, max) with min <= max, got ({}, {})",
                deg_min, deg_max
            )));
        }

        let (dx, dy) = self.translate_fraction;
        if !dx.is_finite() || !dy.is_finite() || dx < 0.0 || dy < 0.0 {
            return Err(Error::Config(format!(
                "translate_fraction components must be finite and >= 0, got ({}, {})",
                dx, dy
            )));
        }

        let (scale_min, scale_max) = self.scale_range;
        if !scale_min.is_finite() || !scale_max.is_finite() || scale_min <= 0.0 || scale_min > scale_max
        {
            return Err(Error::Config(format!(
                "scale_range must satisfy 0 < min <= max, got ({}, {})",
                scale_min, scale_max
            )));
        }

        if !self.noise_mean.is_finite() {
            return Err(Error::Config(format!(
                "noise_mean must be finite, got {}",
                self.noise_mean
            )));
        }
        if !self.noise_std.is_finite() || self.noise_std < 0.0 {
            return Err(Error::Config(format!(
                "noise_std must be finite and >= 0, got {}",
                self.noise_std
            )));
        }

        Ok(())
    }
}

/// Configuration for the caption generation driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionConfig {
    /// Token generation limit passed to the captioning model
    pub max_new_tokens: usize,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self { max_new_tokens: 20 }
    }
}

impl CaptionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_new_tokens == 0 {
            return Err(Error::Config(
                "max_new_tokens must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_augmentation_config() {
        let config = AugmentationConfig::default();
        assert_eq!(config.copies_per_image, 2);
        assert_eq!(config.rotation_degrees, (-90.0, 90.0));
        assert_eq!(config.rotation_probability, 0.5);
        assert_eq!(config.scale_range, (1.0, 1.1));
        assert_eq!(config.noise_std, 0.05);
        assert_eq!(config.noise_probability, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_copies_rejected() {
        let config = AugmentationConfig {
            copies_per_image: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let config = AugmentationConfig {
            flip_probability: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AugmentationConfig {
            noise_probability: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_scale_range_rejected() {
        let config = AugmentationConfig {
            scale_range: (1.2, 1.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AugmentationConfig {
            scale_range: (0.0, 1.1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_noise_std_rejected() {
        let config = AugmentationConfig {
            noise_std: -0.05,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_rotation_range_rejected() {
        let config = AugmentationConfig {
            rotation_degrees: (90.0, -90.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_caption_config() {
        let config = CaptionConfig::default();
        assert_eq!(config.max_new_tokens, 20);
        assert!(config.validate().is_ok());

        let config = CaptionConfig { max_new_tokens: 0 };
        assert!(config.validate().is_err());
    }
}
