//! The captioning seam and its external-process adapter.

use fruit_core::{CaptionConfig, Error, Result};
use image::RgbImage;
use std::process::Command;

/// A black-box capability producing a natural-language caption for an
/// RGB image. Backed externally by a pretrained vision-language model.
pub trait CaptionService {
    fn caption(&self, image: &RgbImage) -> Result<String>;
}

/// Adapter that hands images to an external captioner process.
///
/// The image is written to a temporary PNG and the command is invoked as
/// `<program> [args..] --max-new-tokens <n> <image path>`; the caption
/// is read from stdout. Every failure (spawn, non-zero exit, empty
/// output) surfaces as [`Error::Caption`].
pub struct CommandCaptioner {
    program: String,
    args: Vec<String>,
    config: CaptionConfig,
}

impl CommandCaptioner {
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        config: CaptionConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            program: program.into(),
            args,
            config,
        })
    }
}

impl CaptionService for CommandCaptioner {
    fn caption(&self, image: &RgbImage) -> Result<String> {
        let file = tempfile::Builder::new()
            .prefix("caption-input-")
            .suffix(".png")
            .tempfile()?;
        image
            .save(file.path())
            .map_err(|e| Error::Caption(format!("failed to stage image for captioner: {e}")))?;

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("--max-new-tokens")
            .arg(self.config.max_new_tokens.to_string())
            .arg(file.path())
            .output()
            .map_err(|e| {
                Error::Caption(format!("failed to run captioner '{}': {e}", self.program))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Caption(format!(
                "captioner '{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let caption = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if caption.is_empty() {
            return Err(Error::Caption(format!(
                "captioner '{}' produced no output",
                self.program
            )));
        }

        Ok(caption)
    }
}
