//! Probability-gated atomic image transforms.

use fruit_core::Result;
use image::{imageops, Rgb, RgbImage};
use imageproc::geometric_transformations::{rotate_about_center, warp, Interpolation, Projection};
use rand::Rng;

use crate::noise;

/// One atomic transform with an independent application probability.
///
/// Pixels exposed by the geometric transforms are filled with black
/// (zero) using bilinear interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformStage {
    /// Rotation about the image center by a uniformly sampled angle.
    Rotate {
        probability: f32,
        /// Angle range in degrees (min, max)
        degrees: (f32, f32),
    },
    /// Translation followed by scaling, both about the image center,
    /// applied as a single affine warp.
    AffineShiftScale {
        probability: f32,
        /// Maximum shift as a fraction of width/height (dx, dy)
        translate: (f32, f32),
        /// Uniform scale factor range (min, max)
        scale: (f32, f32),
    },
    /// Left-right mirror. A left-right-symmetric image maps to itself,
    /// so a fired flip does not guarantee a changed output.
    HorizontalFlip { probability: f32 },
    /// Additive Gaussian noise in normalized pixel space.
    NoiseInject {
        probability: f32,
        mean: f32,
        std: f32,
    },
}

impl TransformStage {
    /// The stage's configured application probability.
    pub fn probability(&self) -> f32 {
        match self {
            TransformStage::Rotate { probability, .. }
            | TransformStage::AffineShiftScale { probability, .. }
            | TransformStage::HorizontalFlip { probability }
            | TransformStage::NoiseInject { probability, .. } => *probability,
        }
    }

    /// Applies the transform to `image`, returning a new image.
    ///
    /// One uniform value in [0, 1) decides whether the stage fires; a
    /// skipped stage returns the input unchanged. Operation parameters
    /// are sampled fresh on every firing call. The input is never
    /// mutated.
    pub fn apply<R: Rng>(&self, image: &RgbImage, rng: &mut R) -> Result<RgbImage> {
        if rng.gen::<f32>() >= self.probability() {
            return Ok(image.clone());
        }

        match self {
            TransformStage::Rotate { degrees, .. } => {
                let angle = rng.gen_range(degrees.0..=degrees.1);
                Ok(rotate_about_center(
                    image,
                    angle.to_radians(),
                    Interpolation::Bilinear,
                    Rgb([0, 0, 0]),
                ))
            }
            TransformStage::AffineShiftScale {
                translate, scale, ..
            } => {
                let (width, height) = image.dimensions();
                let max_tx = translate.0 * width as f32;
                let max_ty = translate.1 * height as f32;
                let tx = rng.gen_range(-max_tx..=max_tx);
                let ty = rng.gen_range(-max_ty..=max_ty);
                let factor = rng.gen_range(scale.0..=scale.1);

                let cx = width as f32 / 2.0;
                let cy = height as f32 / 2.0;
                let projection = Projection::translate(tx, ty)
                    .and_then(Projection::translate(-cx, -cy))
                    .and_then(Projection::scale(factor, factor))
                    .and_then(Projection::translate(cx, cy));

                Ok(warp(
                    image,
                    &projection,
                    Interpolation::Bilinear,
                    Rgb([0, 0, 0]),
                ))
            }
            TransformStage::HorizontalFlip { .. } => Ok(imageops::flip_horizontal(image)),
            TransformStage::NoiseInject { mean, std, .. } => {
                let (width, height) = image.dimensions();
                let mut pixels = noise::normalize(image);
                noise::add_gaussian_noise(&mut pixels, *mean, *std, rng)?;
                noise::denormalize(&pixels, width, height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_image() -> RgbImage {
        RgbImage::from_fn(64, 48, |x, y| {
            if x < 32 && y < 24 {
                Rgb([255, 0, 0])
            } else if x >= 32 && y < 24 {
                Rgb([0, 255, 0])
            } else {
                Rgb([0, 0, 255])
            }
        })
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let image = test_image();

        let stages = [
            TransformStage::Rotate {
                probability: 0.0,
                degrees: (-90.0, 90.0),
            },
            TransformStage::AffineShiftScale {
                probability: 0.0,
                translate: (0.2, 0.2),
                scale: (1.0, 1.1),
            },
            TransformStage::HorizontalFlip { probability: 0.0 },
            TransformStage::NoiseInject {
                probability: 0.0,
                mean: 0.0,
                std: 0.05,
            },
        ];

        for stage in &stages {
            let out = stage.apply(&image, &mut rng).unwrap();
            assert_eq!(out, image);
        }
    }

    #[test]
    fn test_flip_matches_imageops() {
        let mut rng = StdRng::seed_from_u64(2);
        let image = test_image();

        let stage = TransformStage::HorizontalFlip { probability: 1.0 };
        let flipped = stage.apply(&image, &mut rng).unwrap();
        assert_eq!(flipped, imageops::flip_horizontal(&image));
    }

    #[test]
    fn test_flip_of_symmetric_image_is_identity() {
        let mut rng = StdRng::seed_from_u64(9);
        let image = RgbImage::from_fn(64, 48, |_, y| Rgb([y as u8, 0, 0]));

        let stage = TransformStage::HorizontalFlip { probability: 1.0 };
        let flipped = stage.apply(&image, &mut rng).unwrap();
        assert_eq!(flipped, image);
    }

    #[test]
    fn test_rotation_changes_content() {
        let mut rng = StdRng::seed_from_u64(3);
        let image = test_image();

        let stage = TransformStage::Rotate {
            probability: 1.0,
            degrees: (90.0, 90.0),
        };
        let rotated = stage.apply(&image, &mut rng).unwrap();
        assert_eq!(rotated.dimensions(), image.dimensions());
        assert_ne!(rotated, image);
    }

    #[test]
    fn test_degenerate_affine_is_near_identity() {
        let mut rng = StdRng::seed_from_u64(4);
        let image = test_image();

        // Zero translation and unit scale warp through the identity
        // projection, so every pixel lands exactly where it started.
        let stage = TransformStage::AffineShiftScale {
            probability: 1.0,
            translate: (0.0, 0.0),
            scale: (1.0, 1.0),
        };
        let out = stage.apply(&image, &mut rng).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn test_affine_changes_content() {
        let mut rng = StdRng::seed_from_u64(5);
        let image = test_image();

        let stage = TransformStage::AffineShiftScale {
            probability: 1.0,
            translate: (0.2, 0.2),
            scale: (1.05, 1.1),
        };
        let out = stage.apply(&image, &mut rng).unwrap();
        assert_eq!(out.dimensions(), image.dimensions());
        assert_ne!(out, image);
    }

    #[test]
    fn test_noise_changes_content_preserves_dimensions() {
        let mut rng = StdRng::seed_from_u64(6);
        let image = test_image();

        let stage = TransformStage::NoiseInject {
            probability: 1.0,
            mean: 0.0,
            std: 0.1,
        };
        let out = stage.apply(&image, &mut rng).unwrap();
        assert_eq!(out.dimensions(), image.dimensions());
        assert_ne!(out, image);
    }

    #[test]
    fn test_input_not_mutated() {
        let mut rng = StdRng::seed_from_u64(8);
        let image = test_image();
        let before = image.clone();

        let stage = TransformStage::NoiseInject {
            probability: 1.0,
            mean: 0.0,
            std: 0.1,
        };
        let _ = stage.apply(&image, &mut rng).unwrap();
        assert_eq!(image, before);
    }
}
