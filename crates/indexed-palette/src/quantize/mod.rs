//! Exact-match four-color quantization
//!
//! The quantizer accepts pixel-art sources that use exactly four distinct
//! colors. It is not a perceptual or clustering quantizer: two pixels are
//! the same color only if their rounded HSV triples are identical.
//!
//! # Algorithm
//!
//! 1. Scan pixels in order, converting each to HSV, and record distinct
//!    triples in discovery order. Stop at the fifth distinct color.
//! 2. Fewer than four distinct colors after the full scan is a failure.
//! 3. Stably sort the four colors ascending by Value, so ties keep their
//!    discovery order.
//! 4. Re-scan and emit `slot + 1` for every pixel.
//! 5. Zip the sorted colors into the initial [`Palette`].
//!
//! Both passes are linear in pixel count. Membership is a linear scan over
//! at most four elements.

use thiserror::Error;

use crate::color::Hsv;
use crate::palette::{sort_by_value, Palette, PALETTE_SIZE};

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Reasons quantization can fail.
///
/// `TooManyColors` and `TooFewColors` are expected outcomes for images that
/// are not four-color pixel art and are meant to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// A fifth distinct color was found
    #[error("Image contains more colors than 4!")]
    TooManyColors,
    /// The whole image has fewer than four distinct colors
    #[error("Image contains less colors than 4! (found {found})")]
    TooFewColors { found: usize },
    /// Buffer length is not a whole number of RGBA pixels
    #[error("pixel buffer length {0} is not a multiple of 4")]
    TruncatedPixel(usize),
    /// A pixel matched none of the discovered colors on the second pass.
    ///
    /// Cannot happen unless RGB to HSV conversion is non-deterministic;
    /// treat as a fatal invariant violation.
    #[error("internal error: pixel {pixel} matches no discovered color")]
    UnmatchedPixel { pixel: usize },
}

/// Successful quantization: the per-pixel index map and its initial palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantized {
    /// One index in `1..=4` per pixel, row-major
    pub index_map: Vec<u8>,
    /// Palette with entry `k` holding the k-th darkest source color
    pub palette: Palette,
}

/// Distinct colors in discovery order, at most four.
struct ColorSet {
    colors: [Hsv; PALETTE_SIZE],
    len: usize,
}

impl ColorSet {
    fn new() -> Self {
        Self {
            colors: [Hsv::default(); PALETTE_SIZE],
            len: 0,
        }
    }

    fn as_slice(&self) -> &[Hsv] {
        &self.colors[..self.len]
    }

    fn position(&self, color: &Hsv) -> Option<usize> {
        self.as_slice().iter().position(|c| c == color)
    }

    /// Insert if unseen. Returns `false` when the set is already full and
    /// `color` would be a fifth distinct color.
    fn insert(&mut self, color: Hsv) -> bool {
        if self.position(&color).is_some() {
            return true;
        }
        if self.len == PALETTE_SIZE {
            return false;
        }
        self.colors[self.len] = color;
        self.len += 1;
        true
    }
}

#[inline]
fn pixel_hsv(px: &[u8]) -> Hsv {
    // alpha is ignored
    Hsv::from_rgb(px[0], px[1], px[2])
}

/// Quantize a flat RGBA buffer (row-major, 4 bytes per pixel).
///
/// # Errors
///
/// See [`QuantizeError`]. No state is shared between calls, so a failure
/// leaves nothing half-updated.
///
/// # Example
///
/// ```
/// use indexed_palette::quantize;
///
/// let rgba = [
///     255, 255, 255, 255,   0, 0, 0, 255,
///     85, 85, 85, 255,    170, 170, 170, 255,
/// ];
/// let q = quantize(&rgba).unwrap();
/// assert_eq!(q.index_map, vec![4, 1, 2, 3]);
/// ```
pub fn quantize(rgba: &[u8]) -> Result<Quantized, QuantizeError> {
    if rgba.len() % BYTES_PER_PIXEL != 0 {
        return Err(QuantizeError::TruncatedPixel(rgba.len()));
    }

    let mut discovered = ColorSet::new();
    for px in rgba.chunks_exact(BYTES_PER_PIXEL) {
        if !discovered.insert(pixel_hsv(px)) {
            tracing::debug!("Quantization stopped at fifth distinct color");
            return Err(QuantizeError::TooManyColors);
        }
    }

    if discovered.len < PALETTE_SIZE {
        tracing::debug!(found = discovered.len, "Quantization found too few colors");
        return Err(QuantizeError::TooFewColors {
            found: discovered.len,
        });
    }

    let mut sorted = discovered.colors;
    sort_by_value(&mut sorted);
    let sorted = ColorSet {
        colors: sorted,
        len: PALETTE_SIZE,
    };

    let mut index_map = Vec::with_capacity(rgba.len() / BYTES_PER_PIXEL);
    for (pixel, px) in rgba.chunks_exact(BYTES_PER_PIXEL).enumerate() {
        let slot = sorted
            .position(&pixel_hsv(px))
            .ok_or(QuantizeError::UnmatchedPixel { pixel })?;
        index_map.push(slot as u8 + 1);
    }

    tracing::debug!(pixels = index_map.len(), "Quantized image to 4 colors");

    Ok(Quantized {
        index_map,
        palette: Palette::from_sorted(sorted.colors),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(pixels: &[[u8; 3]]) -> Vec<u8> {
        pixels
            .iter()
            .flat_map(|&[r, g, b]| [r, g, b, 255])
            .collect()
    }

    const BLACK: [u8; 3] = [0, 0, 0];
    const DARK: [u8; 3] = [85, 85, 85];
    const LIGHT: [u8; 3] = [170, 170, 170];
    const WHITE: [u8; 3] = [255, 255, 255];

    #[test]
    fn test_indices_follow_value_order() {
        let buf = rgba(&[WHITE, LIGHT, DARK, BLACK, BLACK, WHITE]);
        let q = quantize(&buf).unwrap();
        assert_eq!(q.index_map, vec![4, 3, 2, 1, 1, 4]);

        let values: Vec<f64> = q.palette.iter().map(|e| e.color.v).collect();
        assert_eq!(values, vec![0.0, 33.0, 67.0, 100.0]);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let mut buf = rgba(&[BLACK, DARK, LIGHT, WHITE]);
        buf[3] = 0;
        buf[7] = 12;
        let q = quantize(&buf).unwrap();
        assert_eq!(q.index_map, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_too_many_colors() {
        let buf = rgba(&[BLACK, DARK, LIGHT, WHITE, [255, 0, 0]]);
        assert_eq!(quantize(&buf), Err(QuantizeError::TooManyColors));
    }

    #[test]
    fn test_too_many_colors_short_circuits_before_end() {
        let mut pixels = vec![BLACK, DARK, LIGHT, WHITE, [0, 0, 255]];
        pixels.extend(std::iter::repeat(BLACK).take(1000));
        assert_eq!(quantize(&rgba(&pixels)), Err(QuantizeError::TooManyColors));
    }

    #[test]
    fn test_too_few_colors() {
        let buf = rgba(&[BLACK, WHITE, BLACK, DARK]);
        assert_eq!(
            quantize(&buf),
            Err(QuantizeError::TooFewColors { found: 3 })
        );
        assert_eq!(quantize(&[]), Err(QuantizeError::TooFewColors { found: 0 }));
    }

    #[test]
    fn test_truncated_buffer() {
        assert_eq!(
            quantize(&[0, 0, 0, 255, 1, 2]),
            Err(QuantizeError::TruncatedPixel(6))
        );
    }

    #[test]
    fn test_value_ties_keep_discovery_order() {
        // Pure red, green and blue all have V=100; they must keep the order
        // in which they first appear.
        let buf = rgba(&[[0, 0, 255], BLACK, [255, 0, 0], [0, 255, 0]]);
        let q = quantize(&buf).unwrap();
        let hues: Vec<f64> = q.palette.iter().map(|e| e.color.h).collect();
        assert_eq!(hues, vec![0.0, 240.0, 0.0, 120.0]);
        assert_eq!(q.index_map, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_distinct_rgb_with_equal_hsv_share_a_slot() {
        // (1,1,1) is V=0.39%, which rounds to the same triple as black
        assert_eq!(Hsv::from_rgb(1, 1, 1), Hsv::from_rgb(0, 0, 0));
        let buf = rgba(&[BLACK, [1, 1, 1], DARK, LIGHT, WHITE]);
        let q = quantize(&buf).unwrap();
        assert_eq!(q.index_map, vec![1, 1, 2, 3, 4]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QuantizeError::TooManyColors.to_string(),
            "Image contains more colors than 4!"
        );
        assert_eq!(
            QuantizeError::TooFewColors { found: 2 }.to_string(),
            "Image contains less colors than 4! (found 2)"
        );
    }
}
