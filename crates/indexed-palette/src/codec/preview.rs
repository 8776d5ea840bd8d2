//! Raster preview: a PNG strip of square swatches.

use std::io::Cursor;

use super::CodecError;
use crate::palette::{PaletteEntry, PALETTE_SIZE};

/// Swatch edge length used when none is given.
pub const DEFAULT_PREVIEW_SIZE: u32 = 8;

/// Largest accepted swatch edge.
pub(crate) const MAX_PREVIEW_SIZE: u32 = 1024;

const RGB_BYTES: usize = 3;

/// Encode `size x size` swatches left to right, one per entry.
///
/// Swatches are filled from the entry's HSL form, the same color a CSS
/// `hsl()` string of that entry would show.
pub(crate) fn encode_preview(
    entries: &[PaletteEntry; PALETTE_SIZE],
    size: u32,
) -> Result<Vec<u8>, CodecError> {
    if size == 0 || size > MAX_PREVIEW_SIZE {
        return Err(CodecError::InvalidPreviewSize(size));
    }
    let width = size * PALETTE_SIZE as u32;
    let pixels = swatch_pixels(entries, size as usize);

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, size);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&pixels)
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Row-major RGB8 data for the swatch strip.
fn swatch_pixels(entries: &[PaletteEntry; PALETTE_SIZE], size: usize) -> Vec<u8> {
    let row: Vec<u8> = entries
        .iter()
        .flat_map(|entry| {
            let rgb = entry.color.to_hsl().to_rgb();
            std::iter::repeat(rgb).take(size).flatten()
        })
        .collect();
    debug_assert_eq!(row.len(), size * PALETTE_SIZE * RGB_BYTES);
    row.repeat(size)
}
