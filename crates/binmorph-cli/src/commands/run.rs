use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use binmorph_core::element::ElementRegistry;
use binmorph_core::pipeline::{run_pipeline, PipelineConfig};
use clap::Args;

#[derive(Args)]
pub struct RunArgs {
    /// Pipeline config file (TOML)
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let text = fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read {}", args.config.display()))?;
    let config: PipelineConfig = toml::from_str(&text)
        .with_context(|| format!("Invalid config in {}", args.config.display()))?;

    let registry = ElementRegistry::with_builtin();
    crate::summary::print_filter_summary(&config);

    let report = run_pipeline(&config, &registry)?;

    println!(
        "{}x{} image, threshold {}: {} -> {} foreground pixels",
        report.width,
        report.height,
        report.threshold,
        report.foreground_before,
        report.foreground_after
    );
    println!("Saved to {}", config.output.display());

    Ok(())
}
