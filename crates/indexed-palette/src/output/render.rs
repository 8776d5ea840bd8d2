//! Compositor: index map + palette -> RGBA pixels.
//!
//! Every pixel is looked up by index in the palette, converted from HSV to
//! RGB and written as `[R, G, B, 255]`. The source image's alpha is not
//! carried over.

use thiserror::Error;

use crate::color::Hsv;
use crate::palette::{Palette, PALETTE_SIZE};
use crate::quantize::BYTES_PER_PIXEL;

/// Errors from the compositor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A pixel references an index with no palette entry.
    ///
    /// Indicates a quantizer/compositor mismatch, not bad input. The render
    /// is aborted; palette and index map are not modified.
    #[error("pixel {pixel} references unknown palette index {index}")]
    UnknownIndex { pixel: usize, index: u8 },
    /// Index map length differs from `width * height`
    #[error("index map has {actual} entries, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// `width * height` does not fit in memory
    #[error("image dimensions {width}x{height} overflow")]
    DimensionOverflow { width: usize, height: usize },
}

/// Render an index map to a new RGBA buffer of `4 * width * height` bytes.
pub fn render(
    index_map: &[u8],
    width: usize,
    height: usize,
    palette: &Palette,
) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    render_into(index_map, width, height, palette, &mut out)?;
    Ok(out)
}

/// Render an index map into `out`, reusing its allocation.
///
/// `out` is resized to exactly `4 * width * height` bytes and every byte is
/// overwritten, so nothing from a previous render survives. On error the
/// contents of `out` are unspecified.
pub fn render_into(
    index_map: &[u8],
    width: usize,
    height: usize,
    palette: &Palette,
    out: &mut Vec<u8>,
) -> Result<(), RenderError> {
    let pixels = width
        .checked_mul(height)
        .ok_or(RenderError::DimensionOverflow { width, height })?;
    if index_map.len() != pixels {
        return Err(RenderError::DimensionMismatch {
            expected: pixels,
            actual: index_map.len(),
        });
    }

    // Convert each palette color once, not once per pixel.
    let lut = rgba_lookup(palette);

    out.clear();
    out.resize(pixels * BYTES_PER_PIXEL, 0);

    for (pixel, (&index, dst)) in index_map
        .iter()
        .zip(out.chunks_exact_mut(BYTES_PER_PIXEL))
        .enumerate()
    {
        let rgba = lut
            .iter()
            .find(|(slot, _)| *slot == index)
            .map(|(_, rgba)| rgba)
            .ok_or(RenderError::UnknownIndex { pixel, index })?;
        dst.copy_from_slice(rgba);
    }

    Ok(())
}

fn rgba_lookup(palette: &Palette) -> [(u8, [u8; 4]); PALETTE_SIZE] {
    let mut lut = [(0u8, [0u8; 4]); PALETTE_SIZE];
    for (slot, entry) in lut.iter_mut().zip(palette.iter()) {
        *slot = (entry.index, opaque(entry.color));
    }
    lut
}

#[inline]
fn opaque(color: Hsv) -> [u8; 4] {
    let [r, g, b] = color.to_rgb();
    [r, g, b, 255]
}
