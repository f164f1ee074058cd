pub mod config;

use ndarray::Array2;
use tracing::info;

use crate::element::{ElementRegistry, StructuringElement};
use crate::error::Result;
use crate::io::raster::{load_grayscale, save_binary};
use crate::morphology::{self, foreground_count};
use crate::threshold::{binarize, compute_threshold};

pub use config::{Operation, PipelineConfig, ThresholdConfig};

/// What one pipeline run did, for reporting in the CLI.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    pub width: usize,
    pub height: usize,
    /// The threshold actually applied (relevant for the automatic methods).
    pub threshold: u8,
    pub foreground_before: usize,
    pub foreground_after: usize,
}

/// Run the full load -> binarize -> filter -> save pipeline.
///
/// Stages run to completion in order; the first failure aborts the rest and
/// nothing is written. The element name is resolved before any pixel work so
/// bad configuration never touches the input file.
pub fn run_pipeline(config: &PipelineConfig, registry: &ElementRegistry) -> Result<PipelineReport> {
    let element = registry.get(&config.element)?;

    let grid = load_grayscale(&config.input)?;
    let (h, w) = grid.dim();
    info!(width = w, height = h, "Image loaded");

    let threshold = compute_threshold(
        &grid,
        &config.threshold.method,
        config.threshold.sigma_multiplier,
    )?;
    let mask = binarize(&grid, threshold)?;
    let foreground_before = foreground_count(&mask);
    info!(threshold, foreground = foreground_before, "Binarization complete");

    let filtered = apply_operation(&mask, element, config.operation, config.legacy_close);
    let foreground_after = foreground_count(&filtered);
    info!(
        operation = %config.operation,
        foreground = foreground_after,
        "Filtering complete"
    );

    save_binary(&filtered, &config.output)?;
    info!(output = %config.output.display(), "Output saved");

    Ok(PipelineReport {
        width: w,
        height: h,
        threshold,
        foreground_before,
        foreground_after,
    })
}

/// Apply one morphological operation to a mask.
///
/// With `legacy_close`, closing runs erosion first, reproducing the behavior
/// of the legacy tool instead of the textbook composition.
pub fn apply_operation(
    mask: &Array2<bool>,
    element: &StructuringElement,
    operation: Operation,
    legacy_close: bool,
) -> Array2<bool> {
    match operation {
        Operation::Erode => morphology::erode(mask, element),
        Operation::Dilate => morphology::dilate(mask, element),
        Operation::Open => morphology::open(mask, element),
        Operation::Close if legacy_close => {
            morphology::dilate(&morphology::erode(mask, element), element)
        }
        Operation::Close => morphology::close(mask, element),
    }
}
