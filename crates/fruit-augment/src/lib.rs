//! Stochastic image augmentation for caption-training data.
//!
//! This crate implements a composable sequence of randomized image
//! transforms, each gated by an independent application probability, and
//! a driver that fans a directory of source images out into augmented
//! copies with deterministic output naming.

pub mod augmentor;
pub mod loader;
pub mod noise;
pub mod pipeline;
pub mod stage;

pub use augmentor::{AugmentSummary, DatasetAugmentor};
pub use loader::{load_rgb, scan_images};
pub use pipeline::AugmentationPipeline;
pub use stage::TransformStage;
