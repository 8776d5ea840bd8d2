//! Session: one loaded image and its editable palette.

use super::error::EngineError;
use crate::codec::{encode, EncodedPalette, PaletteFormat};
use crate::output::IndexedImage;
use crate::palette::{Channel, ChannelEdit, Palette, PaletteEntry, PALETTE_SIZE};
use crate::quantize::{quantize, BYTES_PER_PIXEL};

/// Owns the immutable index map of a quantized image and the palette that
/// colors it.
///
/// # Example
///
/// ```
/// use indexed_palette::{Channel, PaletteFormat, Session};
///
/// let rgba = [
///     0, 0, 0, 255,       85, 85, 85, 255,
///     170, 170, 170, 255, 255, 255, 255, 255,
/// ];
/// let mut session = Session::new(&rgba, 2, 2).unwrap();
///
/// session.apply_raw(4, Channel::Saturation, "100").unwrap();
/// session.apply_raw(4, Channel::Hue, "240").unwrap();
///
/// let pixels = session.render().unwrap();
/// assert_eq!(&pixels[12..16], &[0, 0, 255, 255]);
///
/// let pal = session.encode(PaletteFormat::JascPal).unwrap();
/// assert!(pal.bytes.starts_with(b"JASC-PAL\n0100\n4\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    image: IndexedImage,
    palette: Palette,
}

impl Session {
    /// Quantize an RGBA buffer of `width x height` pixels.
    ///
    /// # Errors
    ///
    /// - [`EngineError::BufferSize`] if `rgba.len() != 4 * width * height`
    /// - [`EngineError::Quantize`] if the image does not hold exactly four
    ///   distinct colors
    pub fn new(rgba: &[u8], width: usize, height: usize) -> Result<Self, EngineError> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .unwrap_or(usize::MAX);
        if rgba.len() != expected {
            return Err(EngineError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }

        let quantized = quantize(rgba)?;
        let image = IndexedImage::new(quantized.index_map, width, height)?;
        tracing::debug!(width, height, "Session created");
        Ok(Self {
            image,
            palette: quantized.palette,
        })
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn image(&self) -> &IndexedImage {
        &self.image
    }

    /// Per-pixel indices `1..=4`, row-major.
    #[inline]
    pub fn index_map(&self) -> &[u8] {
        self.image.indices()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.image.height()
    }

    /// Set one channel of one entry; the value is clamped.
    pub fn set_channel(&mut self, index: u8, channel: Channel, value: f64) -> Result<(), EngineError> {
        Ok(self.palette.set_channel(index, channel, value)?)
    }

    /// Set one channel from raw user input (see
    /// [`parse_channel_input`](crate::parse_channel_input)).
    pub fn apply_raw(&mut self, index: u8, channel: Channel, raw: &str) -> Result<(), EngineError> {
        Ok(self.palette.apply_raw(index, channel, raw)?)
    }

    pub fn apply_edit(&mut self, edit: &ChannelEdit) -> Result<(), EngineError> {
        Ok(edit.apply(&mut self.palette)?)
    }

    /// Replace all four colors with a named palette's hex colors.
    ///
    /// Indices are kept; on error the palette is left untouched.
    pub fn apply_named<S: AsRef<str>>(&mut self, colors: &[S]) -> Result<(), EngineError> {
        Ok(self.palette.apply_named(colors)?)
    }

    /// Recolor the index map with the current palette.
    pub fn render(&self) -> Result<Vec<u8>, EngineError> {
        Ok(self.image.to_rgba(&self.palette)?)
    }

    /// Recolor into an existing buffer, resized and fully overwritten.
    pub fn render_into(&self, out: &mut Vec<u8>) -> Result<(), EngineError> {
        Ok(self.image.render_into(&self.palette, out)?)
    }

    pub fn encode(&self, format: PaletteFormat) -> Result<EncodedPalette, EngineError> {
        Ok(encode(format, self.palette.entries())?)
    }

    /// Owned copy of the current entries.
    pub fn snapshot(&self) -> [PaletteEntry; PALETTE_SIZE] {
        self.palette.snapshot()
    }
}
