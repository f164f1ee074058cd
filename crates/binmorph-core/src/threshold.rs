use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_THRESHOLD, OTSU_HISTOGRAM_BINS};
use crate::error::{BinmorphError, Result};

/// Method used to separate foreground from background.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ThresholdMethod {
    /// User-specified cutoff in [0, 255].
    Fixed(u8),
    /// Otsu's method: maximizes between-class variance on the histogram.
    Otsu,
    /// Threshold = mean + sigma_multiplier * stddev, clamped to [0, 255].
    MeanPlusSigma,
}

impl Default for ThresholdMethod {
    fn default() -> Self {
        Self::Fixed(DEFAULT_THRESHOLD)
    }
}

/// Compute the threshold value using the configured method.
pub fn compute_threshold(
    grid: &Array2<u8>,
    method: &ThresholdMethod,
    sigma_mul: f32,
) -> Result<u8> {
    ensure_nonempty(grid)?;
    match method {
        ThresholdMethod::Fixed(v) => Ok(*v),
        ThresholdMethod::Otsu => otsu_threshold(grid),
        ThresholdMethod::MeanPlusSigma => {
            let (mean, std) = mean_stddev(grid);
            Ok((mean + sigma_mul as f64 * std).clamp(0.0, 255.0) as u8)
        }
    }
}

/// Binarize a grayscale grid with a strict `> threshold` test.
///
/// Samples equal to the threshold are classified as background. The output
/// has the same dimensions as the input.
pub fn binarize(grid: &Array2<u8>, threshold: u8) -> Result<Array2<bool>> {
    ensure_nonempty(grid)?;
    Ok(grid.mapv(|v| v > threshold))
}

/// Compute mean and standard deviation of the samples.
pub fn mean_stddev(grid: &Array2<u8>) -> (f64, f64) {
    let n = grid.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let sum: f64 = grid.iter().map(|&v| v as f64).sum();
    let mean = sum / n;
    let var: f64 = grid.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Otsu's thresholding: find the cutoff that maximizes between-class variance.
///
/// Returns the last histogram level assigned to the background class, so the
/// strict `> threshold` test in [`binarize`] splits exactly at the chosen
/// boundary.
pub fn otsu_threshold(grid: &Array2<u8>) -> Result<u8> {
    ensure_nonempty(grid)?;

    let mut histogram = vec![0u64; OTSU_HISTOGRAM_BINS];
    for &v in grid.iter() {
        histogram[v as usize] += 1;
    }

    let total = grid.len() as f64;
    let mut sum_all: f64 = 0.0;
    for (i, &count) in histogram.iter().enumerate() {
        sum_all += i as f64 * count as f64;
    }

    let mut weight_bg: f64 = 0.0;
    let mut sum_bg: f64 = 0.0;
    let mut best_variance = 0.0_f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_bin = i;
        }
    }

    Ok(best_bin as u8)
}

fn ensure_nonempty(grid: &Array2<u8>) -> Result<()> {
    let (h, w) = grid.dim();
    if h == 0 || w == 0 {
        return Err(BinmorphError::InvalidInput(format!("empty grid: {h}x{w}")));
    }
    Ok(())
}
