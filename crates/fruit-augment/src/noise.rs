//! Gaussian noise synthesis in normalized pixel space.
//!
//! Pixel intensities are lifted from 8-bit integers into [0.0, 1.0]
//! floats, perturbed with independent per-element Normal(mean, std)
//! samples, clamped back into range and re-quantized.

use fruit_core::{Error, Result};
use image::RgbImage;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Adds Gaussian noise drawn from Normal(mean, std) to every element,
/// clamping each result to [0.0, 1.0]. No value escapes that range.
pub fn add_gaussian_noise<R: Rng>(
    pixels: &mut [f32],
    mean: f32,
    std: f32,
    rng: &mut R,
) -> Result<()> {
    let distribution = Normal::new(mean, std)
        .map_err(|e| Error::InvalidArgument(format!("invalid noise distribution: {e}")))?;

    for value in pixels.iter_mut() {
        *value = (*value + distribution.sample(rng)).clamp(0.0, 1.0);
    }

    Ok(())
}

/// Converts an RGB image into a flat normalized buffer (row-major,
/// interleaved channels, u8 / 255).
pub fn normalize(image: &RgbImage) -> Vec<f32> {
    image.as_raw().iter().map(|&v| v as f32 / 255.0).collect()
}

/// Converts a normalized buffer back into an RGB image, clamping to
/// [0.0, 1.0] before re-quantizing.
pub fn denormalize(pixels: &[f32], width: u32, height: u32) -> Result<RgbImage> {
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(Error::InvalidArgument(format!(
            "expected {} values for a {}x{} image, got {}",
            expected,
            width,
            height,
            pixels.len()
        )));
    }

    let data = pixels
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();

    RgbImage::from_raw(width, height, data).ok_or_else(|| {
        Error::InvalidArgument(format!("buffer does not fit a {}x{} image", width, height))
    })
}
