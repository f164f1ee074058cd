use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ELEMENT, DEFAULT_SIGMA_MULTIPLIER};
use crate::threshold::ThresholdMethod;

/// Morphological operation applied to the binarized mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Erode,
    Dilate,
    Open,
    Close,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Erode => write!(f, "erosion"),
            Self::Dilate => write!(f, "dilation"),
            Self::Open => write!(f, "opening"),
            Self::Close => write!(f, "closing"),
        }
    }
}

/// Configuration for one pipeline run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub threshold: ThresholdConfig,
    pub operation: Operation,
    /// Structuring element name, resolved through the registry.
    #[serde(default = "default_element")]
    pub element: String,
    /// Route `Close` through erosion-then-dilation, matching the legacy tool.
    #[serde(default)]
    pub legacy_close: bool,
}

/// Threshold selection settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub method: ThresholdMethod,
    /// Sigma multiplier for the MeanPlusSigma method.
    #[serde(default = "default_sigma_multiplier")]
    pub sigma_multiplier: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            method: ThresholdMethod::default(),
            sigma_multiplier: DEFAULT_SIGMA_MULTIPLIER,
        }
    }
}

fn default_sigma_multiplier() -> f32 {
    DEFAULT_SIGMA_MULTIPLIER
}

fn default_element() -> String {
    DEFAULT_ELEMENT.to_string()
}
