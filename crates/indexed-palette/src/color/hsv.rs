//! HSV color type
//!
//! HSV is what the user edits. Conversions from 8-bit RGB round every
//! component to an integer so that the triple can serve as an exact-match
//! identity during quantization.

use std::str::FromStr;

use super::hex::{format_hex, parse_hex};
use super::hsl::Hsl;
use super::{channel_to_u8, round_half_up};
use crate::palette::ParseColorError;

/// A color in HSV space.
///
/// - `h`: hue in degrees, `0.0..360.0`
/// - `s`: saturation in percent, `0.0..=100.0`
/// - `v`: value in percent, `0.0..=100.0`
///
/// Equality is exact component equality. Quantization relies on this: two
/// pixels belong to the same palette slot only if their converted triples
/// are bit-identical.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Value in percent
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV color. No range checking is done here; the palette
    /// store clamps edits on the way in.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Convert 8-bit RGB to HSV, rounding each component to the nearest integer.
    ///
    /// # Example
    /// ```
    /// use indexed_palette::Hsv;
    /// assert_eq!(Hsv::from_rgb(0, 0, 0), Hsv::new(0.0, 0.0, 0.0));
    /// assert_eq!(Hsv::from_rgb(15, 56, 15), Hsv::new(120.0, 73.0, 22.0));
    /// ```
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;

        let v = r.max(g).max(b);
        let diff = v - r.min(g).min(b);

        let (h, s) = if diff == 0.0 {
            (0.0, 0.0)
        } else {
            let diffc = |c: f64| (v - c) / 6.0 / diff + 0.5;
            let (rdif, gdif, bdif) = (diffc(r), diffc(g), diffc(b));

            let mut h = if r == v {
                bdif - gdif
            } else if g == v {
                1.0 / 3.0 + rdif - bdif
            } else {
                2.0 / 3.0 + gdif - rdif
            };

            if h < 0.0 {
                h += 1.0;
            } else if h > 1.0 {
                h -= 1.0;
            }

            (h, diff / v)
        };

        Self {
            h: round_half_up(h * 360.0),
            s: round_half_up(s * 100.0),
            v: round_half_up(v * 100.0),
        }
    }

    /// Convert an `[R, G, B]` byte array to HSV.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_rgb(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to 8-bit RGB, each channel rounded half up.
    ///
    /// # Example
    /// ```
    /// use indexed_palette::Hsv;
    /// assert_eq!(Hsv::new(0.0, 0.0, 33.0).to_rgb(), [84, 84, 84]);
    /// ```
    pub fn to_rgb(self) -> [u8; 3] {
        let [r, g, b] = self.to_rgb_f64();
        [channel_to_u8(r), channel_to_u8(g), channel_to_u8(b)]
    }

    /// Unrounded RGB in the 0.0..=255.0 range.
    fn to_rgb_f64(self) -> [f64; 3] {
        let h = self.h / 60.0;
        let s = self.s / 100.0;
        let v = self.v / 100.0;

        let sector = (h.floor() as i64).rem_euclid(6);
        let f = h - h.floor();

        let p = 255.0 * v * (1.0 - s);
        let q = 255.0 * v * (1.0 - s * f);
        let t = 255.0 * v * (1.0 - s * (1.0 - f));
        let v = 255.0 * v;

        match sector {
            0 => [v, t, p],
            1 => [q, v, p],
            2 => [p, v, t],
            3 => [p, q, v],
            4 => [t, p, v],
            _ => [v, p, q],
        }
    }

    /// Convert to HSL.
    ///
    /// `l = v * (1 - s/2)`, `s' = 0` when `l` is 0 or 1, otherwise
    /// `(v - l) / min(l, 1 - l)`. No rounding is applied; callers embedding
    /// the result into 8-bit channels go through [`Hsl::to_rgb`].
    pub fn to_hsl(self) -> Hsl {
        let v = self.v / 100.0;
        let l = v * (1.0 - (self.s / 100.0) / 2.0);
        let s = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };

        Hsl::new(self.h, s * 100.0, l * 100.0)
    }

    /// Six uppercase hex digits of the rounded RGB projection, no prefix.
    #[inline]
    pub fn to_hex(self) -> String {
        format_hex(self.to_rgb())
    }

    /// Parse a hex color string and convert it to HSV.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s).map(Self::from_bytes)
    }
}

impl FromStr for Hsv {
    type Err = ParseColorError;

    /// Parse an HSV color from a hex string (`#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_primaries() {
        assert_eq!(Hsv::from_rgb(255, 0, 0), Hsv::new(0.0, 100.0, 100.0));
        assert_eq!(Hsv::from_rgb(0, 255, 0), Hsv::new(120.0, 100.0, 100.0));
        assert_eq!(Hsv::from_rgb(0, 0, 255), Hsv::new(240.0, 100.0, 100.0));
        assert_eq!(Hsv::from_rgb(255, 255, 0), Hsv::new(60.0, 100.0, 100.0));
        assert_eq!(Hsv::from_rgb(255, 0, 255), Hsv::new(300.0, 100.0, 100.0));
    }

    #[test]
    fn test_from_rgb_greys_have_zero_hue_and_saturation() {
        for i in 0..=255u8 {
            let hsv = Hsv::from_rgb(i, i, i);
            assert_eq!(hsv.h, 0.0);
            assert_eq!(hsv.s, 0.0);
        }
        assert_eq!(Hsv::from_rgb(128, 128, 128).v, 50.0);
        assert_eq!(Hsv::from_rgb(255, 255, 255).v, 100.0);
    }

    #[test]
    fn test_from_rgb_components_are_integers() {
        for &(r, g, b) in &[(15, 56, 15), (48, 98, 48), (139, 172, 15), (155, 188, 15)] {
            let hsv = Hsv::from_rgb(r, g, b);
            assert_eq!(hsv.h, hsv.h.trunc());
            assert_eq!(hsv.s, hsv.s.trunc());
            assert_eq!(hsv.v, hsv.v.trunc());
        }
    }

    #[test]
    fn test_to_rgb_primaries() {
        assert_eq!(Hsv::new(0.0, 100.0, 100.0).to_rgb(), [255, 0, 0]);
        assert_eq!(Hsv::new(120.0, 100.0, 100.0).to_rgb(), [0, 255, 0]);
        assert_eq!(Hsv::new(240.0, 100.0, 100.0).to_rgb(), [0, 0, 255]);
    }

    #[test]
    fn test_to_rgb_hue_360_matches_hue_0() {
        let a = Hsv::new(0.0, 80.0, 60.0).to_rgb();
        let b = Hsv::new(360.0, 80.0, 60.0).to_rgb();
        assert_eq!(a, b);
    }

    #[test]
    fn test_to_rgb_greys_round_half_up() {
        assert_eq!(Hsv::new(0.0, 0.0, 0.0).to_rgb(), [0, 0, 0]);
        assert_eq!(Hsv::new(0.0, 0.0, 33.0).to_rgb(), [84, 84, 84]);
        assert_eq!(Hsv::new(0.0, 0.0, 66.0).to_rgb(), [168, 168, 168]);
        assert_eq!(Hsv::new(0.0, 0.0, 100.0).to_rgb(), [255, 255, 255]);
        // 0.5 * 255 = 127.5 rounds up
        assert_eq!(Hsv::new(0.0, 0.0, 50.0).to_rgb(), [128, 128, 128]);
    }

    /// RGB -> HSV -> RGB is lossy under rounding but the drift stays small.
    #[test]
    fn test_round_trip_drift_is_bounded() {
        let mut max_error = 0i32;
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(17) {
                    let back = Hsv::from_rgb(r, g, b).to_rgb();
                    for (orig, got) in [r, g, b].iter().zip(back.iter()) {
                        max_error = max_error.max((*orig as i32 - *got as i32).abs());
                    }
                }
            }
        }
        assert!(max_error <= 3, "round-trip drift {max_error} exceeds 3 LSB");
    }

    #[test]
    fn test_to_hsl_formula() {
        let hsl = Hsv::new(120.0, 100.0, 100.0).to_hsl();
        assert_eq!(hsl, Hsl::new(120.0, 100.0, 50.0));

        // Black and white collapse saturation to zero
        assert_eq!(Hsv::new(200.0, 50.0, 0.0).to_hsl().s, 0.0);
        assert_eq!(Hsv::new(200.0, 0.0, 100.0).to_hsl(), Hsl::new(200.0, 0.0, 100.0));
    }

    #[test]
    fn test_to_hsl_keeps_hue() {
        let hsl = Hsv::new(287.0, 40.0, 70.0).to_hsl();
        assert_eq!(hsl.h, 287.0);
        assert!((hsl.l - 56.0).abs() < 1e-9);
    }

    #[test]
    fn test_hex_round_trip() {
        let hsv: Hsv = "#9BBC0F".parse().unwrap();
        assert_eq!(hsv, Hsv::from_rgb(0x9b, 0xbc, 0x0f));
        assert_eq!(Hsv::new(0.0, 100.0, 100.0).to_hex(), "FF0000");
    }

    #[test]
    fn test_from_hex_error() {
        assert_eq!(Hsv::from_hex("12345"), Err(ParseColorError::InvalidLength));
    }
}
