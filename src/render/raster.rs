//! Raster rendering of a symbol to an RGBA buffer or PNG bytes.
use std::io::Cursor;

use image::{ImageOutputFormat, RgbaImage};

use super::{QUIET_ZONE, RenderOptions};
use crate::error::Error;
use crate::models::QrCode;

/// Render the symbol as an RGBA image of roughly `target_size` pixels.
///
/// Each module becomes a square of `floor(target_size / canvas_side)`
/// pixels, at least 1, so the produced image may be smaller than the
/// request but never distorts the module grid.
pub fn to_image(
    qr: &QrCode,
    target_size: i32,
    options: &RenderOptions,
) -> Result<RgbaImage, Error> {
    if target_size <= 0 {
        return Err(Error::InvalidSize);
    }

    let size = qr.size();
    let canvas = options.canvas_side(size);
    let scale = ((target_size as usize) / canvas).max(1);
    let pixels = (canvas * scale) as u32;
    let offset = if options.border { QUIET_ZONE } else { 0 };

    let mut image = RgbaImage::from_pixel(pixels, pixels, options.background);
    for y in 0..size {
        for x in 0..size {
            if !qr.module(x, y) {
                continue;
            }
            let px = ((x + offset) * scale) as u32;
            let py = ((y + offset) * scale) as u32;
            for dy in 0..scale as u32 {
                for dx in 0..scale as u32 {
                    image.put_pixel(px + dx, py + dy, options.foreground);
                }
            }
        }
    }
    Ok(image)
}

/// Render the symbol and encode it as PNG bytes.
pub fn to_png(qr: &QrCode, target_size: i32, options: &RenderOptions) -> Result<Vec<u8>, Error> {
    let image = to_image(qr, target_size, options)?;
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .map_err(|_| Error::InternalConsistency("png encoding failed"))?;
    Ok(bytes)
}
