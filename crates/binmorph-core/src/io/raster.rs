use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;

use crate::consts::{BACKGROUND_PIXEL, FOREGROUND_PIXEL};
use crate::error::{BinmorphError, Result};

/// Load an image file and decode it to a single-channel 8-bit grid.
pub fn load_grayscale(path: &Path) -> Result<Array2<u8>> {
    if !path.exists() {
        return Err(BinmorphError::FileNotFound(path.to_path_buf()));
    }

    let gray = image::open(path)?.to_luma8();
    let (w, h) = gray.dimensions();
    let mut grid = Array2::<u8>::zeros((h as usize, w as usize));
    for row in 0..h as usize {
        for col in 0..w as usize {
            grid[[row, col]] = gray.get_pixel(col as u32, row as u32).0[0];
        }
    }

    Ok(grid)
}

/// Save a binary mask as an 8-bit grayscale image, foreground as 255.
pub fn save_binary(mask: &Array2<bool>, path: &Path) -> Result<()> {
    let (h, w) = mask.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = if mask[[row, col]] {
                FOREGROUND_PIXEL
            } else {
                BACKGROUND_PIXEL
            };
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }

    img.save(path)
        .map_err(|e| BinmorphError::Write(e.to_string()))
}

/// Basic metadata about an image file.
#[derive(Clone, Debug)]
pub struct RasterInfo {
    pub width: u32,
    pub height: u32,
    pub color_type: String,
    pub bits_per_pixel: u16,
}

/// Read image metadata for the `info` command.
pub fn image_info(path: &Path) -> Result<RasterInfo> {
    if !path.exists() {
        return Err(BinmorphError::FileNotFound(path.to_path_buf()));
    }

    let img = image::open(path)?;
    let color = img.color();
    Ok(RasterInfo {
        width: img.width(),
        height: img.height(),
        color_type: format!("{color:?}"),
        bits_per_pixel: color.bits_per_pixel(),
    })
}
