//! Named palettes supplied from outside the engine.
//!
//! A named palette arrives as an ordered list of hex strings. It is
//! converted to HSV, stably sorted ascending by Value, and then written
//! over the existing palette slots with [`Palette::replace_all`].

use super::error::NamedPaletteError;
use super::palette::{Palette, PALETTE_SIZE};
use crate::color::Hsv;

/// Stable sort ascending by Value. Equal values keep their input order.
pub fn sort_by_value(colors: &mut [Hsv]) {
    colors.sort_by(|a, b| a.v.total_cmp(&b.v));
}

impl Palette {
    /// Apply a named palette given as hex strings.
    ///
    /// # Errors
    ///
    /// - [`NamedPaletteError::WrongColorCount`] unless exactly four colors are given
    /// - [`NamedPaletteError::InvalidColor`] if a color is not valid hex
    ///
    /// On error the palette is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use indexed_palette::{Hsv, Palette};
    ///
    /// let mut palette = Palette::from_sorted([Hsv::default(); 4]);
    /// palette
    ///     .apply_named(&["9bbc0f", "0f380f", "8bac0f", "306230"])
    ///     .unwrap();
    ///
    /// // Darkest color lands in slot 1 regardless of input order
    /// assert_eq!(palette.get(1).unwrap().to_hex(), "0F380F");
    /// ```
    pub fn apply_named<S: AsRef<str>>(&mut self, colors: &[S]) -> Result<(), NamedPaletteError> {
        if colors.len() != PALETTE_SIZE {
            return Err(NamedPaletteError::WrongColorCount(colors.len()));
        }

        let mut hsv = Vec::with_capacity(PALETTE_SIZE);
        for color in colors {
            let color = color.as_ref();
            let parsed = Hsv::from_hex(color).map_err(|source| NamedPaletteError::InvalidColor {
                color: color.to_string(),
                source,
            })?;
            hsv.push(parsed);
        }

        sort_by_value(&mut hsv);
        self.replace_all(&hsv)
            .map_err(|_| NamedPaletteError::WrongColorCount(hsv.len()))?;

        tracing::debug!(palette = ?self.colors(), "Applied named palette");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_value_is_stable() {
        let mut colors = vec![
            Hsv::new(10.0, 50.0, 80.0),
            Hsv::new(20.0, 50.0, 20.0),
            Hsv::new(30.0, 50.0, 80.0),
            Hsv::new(40.0, 50.0, 20.0),
        ];
        sort_by_value(&mut colors);
        let hues: Vec<f64> = colors.iter().map(|c| c.h).collect();
        assert_eq!(hues, vec![20.0, 40.0, 10.0, 30.0]);
    }

    #[test]
    fn test_apply_named_sorts_and_keeps_indices() {
        let mut palette = Palette::from_sorted([Hsv::default(); 4]);
        palette
            .apply_named(&["ffffff", "000000", "#555555", "aaaaaa"])
            .unwrap();

        // Greys drift by one step through integer HSV
        let hex: Vec<String> = palette.iter().map(|e| e.color.to_hex()).collect();
        assert_eq!(hex, vec!["000000", "545454", "ABABAB", "FFFFFF"]);
        for k in 1..=4u8 {
            assert_eq!(palette.entry(k).unwrap().index, k);
        }
    }

    #[test]
    fn test_apply_named_wrong_count() {
        let mut palette = Palette::from_sorted([Hsv::default(); 4]);
        let before = palette.clone();

        assert_eq!(
            palette.apply_named(&["000000", "ffffff", "ff0000"]),
            Err(NamedPaletteError::WrongColorCount(3))
        );
        assert_eq!(
            palette.apply_named(&["123456"; 5]),
            Err(NamedPaletteError::WrongColorCount(5))
        );
        assert_eq!(palette, before);
    }

    #[test]
    fn test_apply_named_invalid_color_leaves_palette() {
        let mut palette = Palette::from_sorted([Hsv::default(); 4]);
        let before = palette.clone();

        let err = palette
            .apply_named(&["000000", "zzzzzz", "aaaaaa", "ffffff"])
            .unwrap_err();
        assert!(matches!(err, NamedPaletteError::InvalidColor { ref color, .. } if color == "zzzzzz"));
        assert_eq!(palette, before);
    }
}
