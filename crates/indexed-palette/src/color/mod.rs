//! Color types and conversion utilities
//!
//! HSV is the canonical in-memory representation: the palette stores HSV
//! triples and everything else (RGB bytes, HSL, hex strings) is derived on
//! demand.
//!
//! # Color Models
//!
//! - [`Hsv`]: Hue in degrees, saturation and value in percent. Used for editing.
//! - [`Hsl`]: Hue in degrees, saturation and lightness in percent. Used for
//!   CSS color strings and the raster palette preview.
//!
//! # Example
//!
//! ```
//! use indexed_palette::{Hsl, Hsv};
//!
//! // A pixel read from an image
//! let hsv = Hsv::from_rgb(255, 0, 0);
//! assert_eq!(hsv, Hsv::new(0.0, 100.0, 100.0));
//!
//! // Derived representations
//! assert_eq!(hsv.to_rgb(), [255, 0, 0]);
//! assert_eq!(hsv.to_hex(), "FF0000");
//! let hsl: Hsl = hsv.to_hsl();
//! assert_eq!(hsl.to_css(), "hsl(0 100% 50%)");
//! ```

mod hex;
mod hsl;
mod hsv;

pub use hex::{format_hex, parse_hex};
pub use hsl::Hsl;
pub use hsv::Hsv;

/// Round half up, the rounding every 8-bit channel and HSV component uses.
///
/// `f64::round` rounds half away from zero, which differs for negative
/// halves; the conversions here only ever round non-negative values but the
/// helper keeps the rule explicit.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Convert a 0.0..=255.0 float channel to a byte, rounding half up.
#[inline]
pub(crate) fn channel_to_u8(x: f64) -> u8 {
    round_half_up(x).clamp(0.0, 255.0) as u8
}
