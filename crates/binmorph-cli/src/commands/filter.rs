use std::path::PathBuf;

use anyhow::{Context, Result};
use binmorph_core::consts::{DEFAULT_SIGMA_MULTIPLIER, DEFAULT_THRESHOLD};
use binmorph_core::element::ElementRegistry;
use binmorph_core::pipeline::{run_pipeline, Operation, PipelineConfig, ThresholdConfig};
use binmorph_core::threshold::ThresholdMethod;
use clap::{Args, ValueEnum};

/// Operation names, kept compatible with the legacy tool.
#[derive(Clone, Copy, ValueEnum)]
pub enum OperationArg {
    /// Erosion: shrink foreground regions
    Erosao,
    /// Dilation: grow foreground regions
    Dilatacao,
    /// Opening: erosion followed by dilation
    Abertura,
    /// Closing: dilation followed by erosion
    Fechamento,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Erosao => Operation::Erode,
            OperationArg::Dilatacao => Operation::Dilate,
            OperationArg::Abertura => Operation::Open,
            OperationArg::Fechamento => Operation::Close,
        }
    }
}

#[derive(Args)]
pub struct FilterArgs {
    /// Input image file
    pub file: PathBuf,

    /// Morphological operation
    #[arg(long = "op", value_enum)]
    pub operation: OperationArg,

    /// Binarization threshold, 0-255 (default 128)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Select the threshold automatically with Otsu's method
    #[arg(long, conflicts_with = "threshold")]
    pub otsu: bool,

    /// Select the threshold as mean + SIGMA * stddev
    #[arg(long, value_name = "SIGMA", conflicts_with_all = ["threshold", "otsu"])]
    pub auto_sigma: Option<f32>,

    /// Structuring element preset (cruz, quadrado, quadrado5x5)
    #[arg(long, default_value = "quadrado")]
    pub element: String,

    /// Use the legacy erosion-first closing
    #[arg(long)]
    pub legacy_close: bool,

    /// Output file path
    #[arg(short, long, default_value = "filtered.png")]
    pub output: PathBuf,
}

pub fn run(args: &FilterArgs) -> Result<()> {
    let registry = ElementRegistry::with_builtin();
    let config = PipelineConfig {
        input: args.file.clone(),
        output: args.output.clone(),
        threshold: threshold_config(args),
        operation: args.operation.into(),
        element: args.element.clone(),
        legacy_close: args.legacy_close,
    };

    crate::summary::print_filter_summary(&config);

    let report = run_pipeline(&config, &registry)
        .with_context(|| format!("Failed to process {}", args.file.display()))?;

    println!(
        "{}x{} image, threshold {}: {} -> {} foreground pixels",
        report.width,
        report.height,
        report.threshold,
        report.foreground_before,
        report.foreground_after
    );
    println!("Saved to {}", args.output.display());

    Ok(())
}

pub(crate) fn threshold_config_from(
    threshold: Option<u8>,
    otsu: bool,
    auto_sigma: Option<f32>,
) -> ThresholdConfig {
    let method = if otsu {
        ThresholdMethod::Otsu
    } else if auto_sigma.is_some() {
        ThresholdMethod::MeanPlusSigma
    } else {
        ThresholdMethod::Fixed(threshold.unwrap_or(DEFAULT_THRESHOLD))
    };
    ThresholdConfig {
        method,
        sigma_multiplier: auto_sigma.unwrap_or(DEFAULT_SIGMA_MULTIPLIER),
    }
}

fn threshold_config(args: &FilterArgs) -> ThresholdConfig {
    threshold_config_from(args.threshold, args.otsu, args.auto_sigma)
}
