use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinmorphError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid input grid: {0}")]
    InvalidInput(String),

    #[error("Invalid structuring element: {0}")]
    InvalidStructuringElement(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, BinmorphError>;
