//! Conversions between images and the packed pixel sequences and palettes the quantizer works on.

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};

use crate::{
    color::pack_rgb,
    constants::MIN_PIXELS,
    error::{QuantizeError, Result},
    quantizer::Palette,
};

/// Packs the pixels row by row as `0xRRGGBB`.
pub fn extract_pixels(img: &RgbImage) -> Result<Vec<u32>> {
    let n = img.width() as usize * img.height() as usize;
    if n < MIN_PIXELS {
        return Err(QuantizeError::ImageTooSmall {
            pixels: n,
            min: MIN_PIXELS,
        });
    }

    Ok(img.pixels().map(|Rgb([r, g, b])| pack_rgb(*r, *g, *b)).collect())
}

/// Drops alpha and packs the pixels.
pub fn from_dynamic(img: &DynamicImage) -> Result<Vec<u32>> {
    extract_pixels(&img.to_rgb8())
}

/// Renders the palette as a 16x16 grid of `cell`-sized squares in network order.
pub fn swatch(palette: &Palette, cell: u32) -> RgbImage {
    let cols = 16u32;
    let rows = (palette.len() as u32).div_ceil(cols);
    let cell = cell.max(1);

    ImageBuffer::from_fn(cols * cell, rows * cell, |x, y| {
        let i = ((y / cell) * cols + x / cell) as usize;
        Rgb(palette.colors.get(i).copied().unwrap_or([0, 0, 0]))
    })
}
