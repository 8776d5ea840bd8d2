//! IndexedImage: the index map with its dimensions.
//!
//! The index map is created once at quantization time and never changes.
//! Edits change which color an index maps to, never which index a pixel
//! holds.

use super::render::{render, render_into, RenderError};
use crate::palette::Palette;

/// Per-pixel palette indices with dimension metadata.
///
/// # Example
///
/// ```
/// use indexed_palette::{Hsv, IndexedImage, Palette};
///
/// let palette = Palette::from_sorted([
///     Hsv::new(0.0, 0.0, 0.0),
///     Hsv::new(0.0, 0.0, 33.0),
///     Hsv::new(0.0, 0.0, 66.0),
///     Hsv::new(0.0, 0.0, 100.0),
/// ]);
///
/// let image = IndexedImage::new(vec![1, 4, 4, 1], 2, 2).unwrap();
/// let rgba = image.to_rgba(&palette).unwrap();
/// assert_eq!(rgba.len(), 2 * 2 * 4);
/// assert_eq!(&rgba[4..8], &[255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
}

impl IndexedImage {
    /// Wrap an index map with its dimensions.
    ///
    /// # Errors
    ///
    /// [`RenderError::DimensionMismatch`] if `indices.len() != width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize) -> Result<Self, RenderError> {
        let expected = width
            .checked_mul(height)
            .ok_or(RenderError::DimensionOverflow { width, height })?;
        if indices.len() != expected {
            return Err(RenderError::DimensionMismatch {
                expected,
                actual: indices.len(),
            });
        }
        Ok(Self {
            indices,
            width,
            height,
        })
    }

    /// The palette indices as a slice, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels holding each index, `counts[k - 1]` for index `k`.
    pub fn histogram(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for &idx in &self.indices {
            if (1..=4).contains(&idx) {
                counts[idx as usize - 1] += 1;
            }
        }
        counts
    }

    /// Render to a fresh RGBA buffer.
    pub fn to_rgba(&self, palette: &Palette) -> Result<Vec<u8>, RenderError> {
        render(&self.indices, self.width, self.height, palette)
    }

    /// Render into an existing buffer, resizing it as needed.
    pub fn render_into(&self, palette: &Palette, out: &mut Vec<u8>) -> Result<(), RenderError> {
        render_into(&self.indices, self.width, self.height, palette, out)
    }
}
