//! Caption generation tool.
//!
//! Loops over a directory of images, asks an external captioner command
//! (backed by a pretrained vision-language model) for a caption per
//! image, and writes the image/caption pairs to a JSON manifest.

use anyhow::{Context, Result};
use clap::Parser;
use fruit_caption::{CaptionRunner, CommandCaptioner};
use fruit_core::{setup_cli_logging, CaptionConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "caption")]
#[command(about = "Generate a caption manifest for a directory of images", long_about = None)]
struct Cli {
    /// Directory of images to caption
    #[arg(short, long)]
    image_dir: PathBuf,

    /// Output JSON manifest path
    #[arg(short, long, default_value = "dataset_captions.json")]
    output: PathBuf,

    /// External captioner command; invoked per image with
    /// `--max-new-tokens <n> <image path>` appended
    #[arg(short, long)]
    captioner: String,

    /// Extra arguments passed to the captioner before the image path
    #[arg(long, value_delimiter = ',')]
    captioner_args: Vec<String>,

    /// Token generation limit for the captioning model
    #[arg(long, default_value = "20")]
    max_new_tokens: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_cli_logging(cli.verbose)?;

    let config = CaptionConfig {
        max_new_tokens: cli.max_new_tokens,
    };
    let service = CommandCaptioner::new(cli.captioner, cli.captioner_args, config)
        .context("Invalid caption configuration")?;

    let runner = CaptionRunner::new(service);
    let summary = runner
        .run(&cli.image_dir, &cli.output)
        .context("Caption generation failed")?;

    info!("✓ Saved {} captions to {:?}", summary.captioned, cli.output);
    Ok(())
}
