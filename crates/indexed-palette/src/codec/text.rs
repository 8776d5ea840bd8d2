//! Text palette formats: JASC-PAL, Paint.NET, GIMP and plain hex.

use std::fmt::Write;

use crate::palette::{PaletteEntry, PALETTE_SIZE};

const JASC_HEADER: &str = "JASC-PAL\n0100\n4\n";
const GIMP_HEADER: &str = "GIMP Palette\nName: My 2-bit color palette\n";

/// `JASC-PAL\n0100\n4\n` then `R G B` per color.
pub(crate) fn jasc_pal(entries: &[PaletteEntry; PALETTE_SIZE]) -> String {
    let mut out = String::from(JASC_HEADER);
    for entry in entries {
        let [r, g, b] = entry.color.to_rgb();
        let _ = writeln!(out, "{r} {g} {b}");
    }
    out
}

/// `FF` alpha prefix plus `RRGGBB` per line.
pub(crate) fn paint(entries: &[PaletteEntry; PALETTE_SIZE]) -> String {
    entries
        .iter()
        .map(|entry| format!("FF{}\n", entry.color.to_hex()))
        .collect()
}

/// GIMP header then `R   G   B   color <index>` per color.
pub(crate) fn gimp(entries: &[PaletteEntry; PALETTE_SIZE]) -> String {
    let mut out = String::from(GIMP_HEADER);
    for entry in entries {
        let [r, g, b] = entry.color.to_rgb();
        let _ = writeln!(out, "{r}   {g}   {b}   color {}", entry.index);
    }
    out
}

pub(crate) fn hex_list(entries: &[PaletteEntry; PALETTE_SIZE]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\n", entry.color.to_hex()))
        .collect()
}
