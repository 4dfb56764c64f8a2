//! Caption-training data generation.
//!
//! Captioning itself is an external capability: a pretrained
//! vision-language model behind the [`CaptionService`] trait. This crate
//! provides that seam, a command-backed adapter, the JSON caption
//! manifest, and the simple directory-driver loop.

pub mod manifest;
pub mod runner;
pub mod service;

pub use manifest::{write_manifest, CaptionRecord};
pub use runner::{CaptionRunner, CaptionSummary};
pub use service::{CaptionService, CommandCaptioner};
