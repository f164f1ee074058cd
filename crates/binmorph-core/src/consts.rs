/// Default binarization cutoff for 8-bit samples.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Number of histogram bins for Otsu's thresholding (one per 8-bit level).
pub const OTSU_HISTOGRAM_BINS: usize = 256;

/// Default sigma multiplier for MeanPlusSigma thresholding.
pub const DEFAULT_SIGMA_MULTIPLIER: f32 = 2.0;

/// Pixel value written for foreground mask cells.
pub const FOREGROUND_PIXEL: u8 = 255;

/// Pixel value written for background mask cells.
pub const BACKGROUND_PIXEL: u8 = 0;

/// Name of the default structuring element preset.
pub const DEFAULT_ELEMENT: &str = "quadrado";
