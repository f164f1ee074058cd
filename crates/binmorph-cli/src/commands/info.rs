use std::path::PathBuf;

use anyhow::Result;
use binmorph_core::io::raster::image_info;
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let info = image_info(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!("Color type:  {}", info.color_type);
    println!("Bits/pixel:  {}", info.bits_per_pixel);

    Ok(())
}
