//! HSL color type
//!
//! HSL only exists as a derived form of [`Hsv`](super::Hsv): it is what the
//! swatch CSS strings are written in, and the raster palette preview fills
//! each swatch with the RGB a CSS engine produces for that string.

use super::channel_to_u8;

/// A color in HSL space.
///
/// Hue in degrees, saturation and lightness in percent. Components are
/// left unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to 8-bit RGB using the CSS Color 4 `hsl()` algorithm,
    /// rounding half up.
    ///
    /// ```
    /// use indexed_palette::Hsl;
    /// assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb(), [0, 255, 0]);
    /// assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb(), [255, 255, 255]);
    /// ```
    pub fn to_rgb(self) -> [u8; 3] {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let a = s * l.min(1.0 - l);
        let f = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        [
            channel_to_u8(f(0.0) * 255.0),
            channel_to_u8(f(8.0) * 255.0),
            channel_to_u8(f(4.0) * 255.0),
        ]
    }

    /// CSS color string in the space-separated syntax, e.g. `hsl(120 100% 50%)`.
    pub fn to_css(self) -> String {
        format!("hsl({} {}% {}%)", self.h, self.s, self.l)
    }
}
