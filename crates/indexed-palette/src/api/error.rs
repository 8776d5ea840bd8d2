//! Unified error type for the indexed-palette public API.
//!
//! [`EngineError`] wraps every error type of the crate into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::codec::CodecError;
use crate::output::RenderError;
use crate::palette::{NamedPaletteError, PaletteError, ParseColorError};
use crate::quantize::QuantizeError;

/// Unified error type for the indexed-palette public API.
///
/// # Example
///
/// ```
/// use indexed_palette::{EngineError, Hsv};
///
/// fn parse(s: &str) -> Result<Hsv, EngineError> {
///     Ok(Hsv::from_hex(s)?)
/// }
///
/// assert!(parse("#FFAA00").is_ok());
/// assert!(matches!(parse("#FFAA0"), Err(EngineError::ParseColor(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Pixel buffer length is not `4 * width * height`
    #[error("pixel buffer has {actual} bytes, expected {expected} for the given dimensions")]
    BufferSize { expected: usize, actual: usize },
    /// The image is not four-color pixel art
    #[error(transparent)]
    Quantize(#[from] QuantizeError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    ParseColor(#[from] ParseColorError),
    #[error(transparent)]
    NamedPalette(#[from] NamedPaletteError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_message_passes_through() {
        let err: EngineError = QuantizeError::TooManyColors.into();
        assert_eq!(err.to_string(), "Image contains more colors than 4!");
    }

    #[test]
    fn test_named_palette_message_passes_through() {
        let err: EngineError = NamedPaletteError::WrongColorCount(5).into();
        assert_eq!(err.to_string(), "Palette must have exactly 4 colors.");
    }

    #[test]
    fn test_buffer_size_display() {
        let err = EngineError::BufferSize {
            expected: 16,
            actual: 15,
        };
        assert_eq!(
            err.to_string(),
            "pixel buffer has 15 bytes, expected 16 for the given dimensions"
        );
    }
}
