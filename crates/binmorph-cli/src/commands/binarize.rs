use std::path::PathBuf;

use anyhow::{Context, Result};
use binmorph_core::io::raster::{load_grayscale, save_binary};
use binmorph_core::threshold::{binarize, compute_threshold};
use clap::Args;

#[derive(Args)]
pub struct BinarizeArgs {
    /// Input image file
    pub file: PathBuf,

    /// Binarization threshold, 0-255 (default 128)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Select the threshold automatically with Otsu's method
    #[arg(long, conflicts_with = "threshold")]
    pub otsu: bool,

    /// Select the threshold as mean + SIGMA * stddev
    #[arg(long, value_name = "SIGMA", conflicts_with_all = ["threshold", "otsu"])]
    pub auto_sigma: Option<f32>,

    /// Output file path
    #[arg(short, long, default_value = "binarized.png")]
    pub output: PathBuf,
}

pub fn run(args: &BinarizeArgs) -> Result<()> {
    let grid = load_grayscale(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("Loaded {}x{} image", grid.ncols(), grid.nrows());

    let config = super::filter::threshold_config_from(args.threshold, args.otsu, args.auto_sigma);
    let threshold = compute_threshold(&grid, &config.method, config.sigma_multiplier)?;
    let mask = binarize(&grid, threshold)?;

    println!("Threshold: {threshold}");

    save_binary(&mask, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
