//! The four-entry palette store.
//!
//! A [`Palette`] is created once per loaded image by the quantizer (or once
//! per applied named palette) and mutated in place by channel edits. Entry
//! indices are assigned at creation by ascending Value and are never
//! renumbered afterwards: edits and palette swaps only change colors.

use super::edit::{parse_channel_input, Channel};
use super::error::PaletteError;
use crate::color::Hsv;

/// Number of entries in every palette.
pub const PALETTE_SIZE: usize = 4;

/// A palette slot: a stable 1-based index and its current color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    /// Slot identity, `1..=4`
    pub index: u8,
    /// Current color of the slot
    pub color: Hsv,
}

/// Exactly four palette entries with unique indices `1..=4`, in index order.
///
/// The fixed-size array makes the length invariant structural: a `Palette`
/// cannot hold more or fewer than four entries.
///
/// # Example
///
/// ```
/// use indexed_palette::{Hsv, Palette};
///
/// let mut palette = Palette::from_sorted([
///     Hsv::new(0.0, 0.0, 0.0),
///     Hsv::new(0.0, 0.0, 33.0),
///     Hsv::new(0.0, 0.0, 66.0),
///     Hsv::new(0.0, 0.0, 100.0),
/// ]);
///
/// palette.set_saturation(2, 150.0).unwrap();
/// assert_eq!(palette.get(2).unwrap().s, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: [PaletteEntry; PALETTE_SIZE],
}

impl Palette {
    /// Build a palette from four colors already sorted ascending by Value.
    ///
    /// Entry `i` (0-based) receives index `i + 1`.
    pub fn from_sorted(colors: [Hsv; PALETTE_SIZE]) -> Self {
        let mut index = 0u8;
        let entries = colors.map(|color| {
            index += 1;
            PaletteEntry { index, color }
        });
        Self { entries }
    }

    /// All entries in index order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Iterate entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Owned copy of the entries, safe to hand to an encoder while the
    /// palette keeps being edited.
    pub fn snapshot(&self) -> [PaletteEntry; PALETTE_SIZE] {
        self.entries
    }

    /// Current colors in index order.
    pub fn colors(&self) -> [Hsv; PALETTE_SIZE] {
        self.entries.map(|entry| entry.color)
    }

    /// Always [`PALETTE_SIZE`].
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Look up an entry by its index.
    pub fn entry(&self, index: u8) -> Result<&PaletteEntry, PaletteError> {
        self.entries
            .iter()
            .find(|entry| entry.index == index)
            .ok_or(PaletteError::UnknownIndex(index))
    }

    fn entry_mut(&mut self, index: u8) -> Result<&mut PaletteEntry, PaletteError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.index == index)
            .ok_or(PaletteError::UnknownIndex(index))
    }

    /// Color of the entry with the given index.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownIndex`] if `index` is not in `1..=4`.
    pub fn get(&self, index: u8) -> Result<Hsv, PaletteError> {
        self.entry(index).map(|entry| entry.color)
    }

    /// Set the hue of an entry. The input is normalized into `[0, 360)`.
    pub fn set_hue(&mut self, index: u8, degrees: f64) -> Result<(), PaletteError> {
        self.set_channel(index, Channel::Hue, degrees)
    }

    /// Set the saturation of an entry, clamped to `[0, 100]`.
    pub fn set_saturation(&mut self, index: u8, percent: f64) -> Result<(), PaletteError> {
        self.set_channel(index, Channel::Saturation, percent)
    }

    /// Set the value of an entry, clamped to `[0, 100]`.
    pub fn set_value(&mut self, index: u8, percent: f64) -> Result<(), PaletteError> {
        self.set_channel(index, Channel::Value, percent)
    }

    /// Set one channel of an entry, clamping the input to the channel's range.
    pub fn set_channel(
        &mut self,
        index: u8,
        channel: Channel,
        value: f64,
    ) -> Result<(), PaletteError> {
        let value = channel.clamp(value);
        let color = &mut self.entry_mut(index)?.color;
        match channel {
            Channel::Hue => color.h = value,
            Channel::Saturation => color.s = value,
            Channel::Value => color.v = value,
        }
        Ok(())
    }

    /// Apply raw text input (as typed into a field) to one channel.
    ///
    /// Empty or non-numeric input sets the channel to 0; see
    /// [`parse_channel_input`].
    pub fn apply_raw(&mut self, index: u8, channel: Channel, raw: &str) -> Result<(), PaletteError> {
        self.set_channel(index, channel, parse_channel_input(raw))
    }

    /// Overwrite all four colors, keeping the index assignment.
    ///
    /// Entry `i` gets `colors[i]`; callers pass colors sorted ascending by
    /// Value so that the darkest slot stays the darkest.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidLength`] if `colors` does not hold exactly four
    /// colors. The palette is left untouched in that case.
    pub fn replace_all(&mut self, colors: &[Hsv]) -> Result<(), PaletteError> {
        if colors.len() != PALETTE_SIZE {
            return Err(PaletteError::InvalidLength(colors.len()));
        }
        for (entry, &color) in self.entries.iter_mut().zip(colors) {
            entry.color = color;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
