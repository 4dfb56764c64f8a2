//! Data augmentation tool.
//!
//! Generates randomized augmented copies of every image in a directory,
//! writing them as `aug_{i}_{originalFilename}` into the output
//! directory. Source files are independent, so they are processed in
//! parallel; a failure on one file never aborts the run.

use anyhow::{Context, Result};
use clap::Parser;
use fruit_augment::{loader, DatasetAugmentor};
use fruit_core::{load_toml_config, setup_cli_logging, AugmentationConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "augment")]
#[command(about = "Generate randomized augmented copies of an image dataset", long_about = None)]
struct Cli {
    /// Input directory containing original images
    #[arg(short, long)]
    input_dir: PathBuf,

    /// Output directory for augmented images
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Number of augmented versions per image (overrides the config file)
    #[arg(short, long)]
    copies: Option<usize>,

    /// Optional TOML file with the full augmentation configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base seed for reproducible outputs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of parallel workers (default: num_cpus)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_cli_logging(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => load_toml_config::<AugmentationConfig>(path)?,
        None => AugmentationConfig::default(),
    };
    if let Some(copies) = cli.copies {
        config.copies_per_image = copies;
    }

    // Configuration problems are fatal before any file is touched.
    let mut augmentor =
        DatasetAugmentor::from_config(&config).context("Invalid augmentation configuration")?;
    if let Some(seed) = cli.seed {
        augmentor = augmentor.with_seed(seed);
    }

    if let Some(n) = cli.workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("Failed to set thread pool size")?;
    }

    let files = loader::scan_images(&cli.input_dir).context("Failed to scan input directory")?;
    fs::create_dir_all(&cli.output_dir).context("Failed to create output directory")?;

    info!(
        "Augmenting {} images from {:?} ({} copies each)",
        files.len(),
        cli.input_dir,
        augmentor.copies()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let processed = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);
    let written = AtomicUsize::new(0);

    files.par_iter().enumerate().for_each(|(index, source)| {
        let job = augmentor.job(source);
        let mut rng = augmentor.file_rng(index);

        match augmentor.process_job(&job, &cli.output_dir, &mut rng) {
            Ok(count) => {
                processed.fetch_add(1, Ordering::Relaxed);
                written.fetch_add(count, Ordering::Relaxed);
            }
            Err(e) => {
                let name = source.file_name().unwrap_or_default().to_string_lossy();
                warn!("Could not process {}: {}", name, e);
                failed.fetch_add(1, Ordering::Relaxed);
            }
        }

        pb.inc(1);
    });

    pb.finish_with_message("Done");

    info!(
        "✓ Augmentation complete: {} processed, {} failed, {} copies written to {:?}",
        processed.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        written.load(Ordering::Relaxed),
        cli.output_dir
    );

    Ok(())
}
