//! JSON caption manifest for supervised caption training.

use fruit_core::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One image/caption pair in the training manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionRecord {
    /// Source image filename (not the full path)
    pub image: String,
    /// Generated caption text
    pub caption: String,
}

/// Writes the caption manifest as pretty-printed JSON.
pub fn write_manifest(path: &Path, records: &[CaptionRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}
