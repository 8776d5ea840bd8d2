//! Palette file encoders.
//!
//! Every encoder takes the four [`PaletteEntry`] values of a palette,
//! iterates them in index order 1 to 4 and returns a byte buffer paired
//! with the format's fixed file extension.
//!
//! | Format | Menu id | Extension |
//! |---|---|---|
//! | Raster preview | `png-1`, `png-8`, `png-32` | `png` |
//! | JASC-PAL | `pal` | `pal` |
//! | Adobe Swatch Exchange | `photoshop-ase` | `ase` |
//! | Paint.NET hex list | `paint` | `txt` |
//! | GIMP palette | `gimp` | `gpl` |
//! | Plain hex list | `hex` | `hex` |
//!
//! # Example
//!
//! ```
//! use indexed_palette::{encode, Hsv, Palette, PaletteFormat};
//!
//! let palette = Palette::from_sorted([
//!     Hsv::new(0.0, 0.0, 0.0),
//!     Hsv::new(0.0, 0.0, 33.0),
//!     Hsv::new(0.0, 0.0, 66.0),
//!     Hsv::new(0.0, 0.0, 100.0),
//! ]);
//!
//! let encoded = encode(PaletteFormat::Hex, palette.entries()).unwrap();
//! assert_eq!(encoded.file_name("2-bit-palette"), "2-bit-palette.hex");
//! assert_eq!(encoded.bytes, b"000000\n545454\nA8A8A8\nFFFFFF\n");
//! ```

mod ase;
mod preview;
mod text;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::palette::{PaletteEntry, PALETTE_SIZE};

pub use preview::DEFAULT_PREVIEW_SIZE;

/// File stem used for every export unless the caller picks another.
pub const DEFAULT_FILE_STEM: &str = "2-bit-palette";

/// Swatch sizes offered by the download menu.
pub const MENU_PREVIEW_SIZES: [u32; 3] = [1, 8, 32];

/// Errors from the palette encoders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Encoders only accept exactly four entries
    #[error("palette must have exactly 4 entries, got {0}")]
    InvalidPaletteLength(usize),
    /// Entry indices are not a permutation of 1..=4
    #[error("palette entries must use each index 1 to 4 exactly once")]
    InvalidIndices,
    /// Swatch size of zero or too large for a PNG dimension
    #[error("invalid preview swatch size {0}")]
    InvalidPreviewSize(u32),
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
    /// Format identifier not in the download menu
    #[error("unknown palette format '{0}'")]
    UnknownFormat(String),
}

/// One of the supported palette file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteFormat {
    /// PNG strip of `size x size` swatches, left to right by index
    Png { size: u32 },
    /// JASC-PAL text (Paint Shop Pro, Aseprite)
    JascPal,
    /// Adobe Swatch Exchange binary
    Ase,
    /// Paint.NET palette text, one `FFRRGGBB` per line
    Paint,
    /// GIMP palette text
    Gimp,
    /// One `RRGGBB` per line
    Hex,
}

impl PaletteFormat {
    /// The fixed file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            PaletteFormat::Png { .. } => "png",
            PaletteFormat::JascPal => "pal",
            PaletteFormat::Ase => "ase",
            PaletteFormat::Paint => "txt",
            PaletteFormat::Gimp => "gpl",
            PaletteFormat::Hex => "hex",
        }
    }

    /// Every entry of the download menu, in menu order.
    pub fn menu() -> Vec<PaletteFormat> {
        MENU_PREVIEW_SIZES
            .iter()
            .map(|&size| PaletteFormat::Png { size })
            .chain([
                PaletteFormat::JascPal,
                PaletteFormat::Ase,
                PaletteFormat::Paint,
                PaletteFormat::Gimp,
                PaletteFormat::Hex,
            ])
            .collect()
    }
}

impl fmt::Display for PaletteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteFormat::Png { size } => write!(f, "png-{size}"),
            PaletteFormat::JascPal => f.write_str("pal"),
            PaletteFormat::Ase => f.write_str("photoshop-ase"),
            PaletteFormat::Paint => f.write_str("paint"),
            PaletteFormat::Gimp => f.write_str("gimp"),
            PaletteFormat::Hex => f.write_str("hex"),
        }
    }
}

/// Parse a menu identifier.
///
/// `png` alone selects the default swatch size and `png-<n>` accepts any
/// positive size, not only the three menu sizes.
impl FromStr for PaletteFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        match id.as_str() {
            "png" => Ok(PaletteFormat::Png {
                size: DEFAULT_PREVIEW_SIZE,
            }),
            "pal" | "jasc" => Ok(PaletteFormat::JascPal),
            "photoshop-ase" | "ase" => Ok(PaletteFormat::Ase),
            "paint" => Ok(PaletteFormat::Paint),
            "gimp" | "gpl" => Ok(PaletteFormat::Gimp),
            "hex" => Ok(PaletteFormat::Hex),
            other => {
                let size = other
                    .strip_prefix("png-")
                    .and_then(|n| n.parse::<u32>().ok())
                    .ok_or_else(|| CodecError::UnknownFormat(s.to_string()))?;
                if size == 0 {
                    return Err(CodecError::InvalidPreviewSize(size));
                }
                Ok(PaletteFormat::Png { size })
            }
        }
    }
}

/// An encoded palette file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPalette {
    pub format: PaletteFormat,
    pub bytes: Vec<u8>,
}

impl EncodedPalette {
    /// The format's fixed extension.
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    /// `<stem>.<extension>`
    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension())
    }
}

/// Encode palette entries into `format`.
///
/// Entries may arrive in any order; they are written by ascending index.
///
/// # Errors
///
/// - [`CodecError::InvalidPaletteLength`] unless there are exactly 4 entries
/// - [`CodecError::InvalidIndices`] unless indices are exactly 1 to 4
/// - [`CodecError::InvalidPreviewSize`] / [`CodecError::PngEncode`] for the
///   raster preview
pub fn encode(format: PaletteFormat, entries: &[PaletteEntry]) -> Result<EncodedPalette, CodecError> {
    let ordered = in_index_order(entries)?;
    let bytes = match format {
        PaletteFormat::Png { size } => preview::encode_preview(&ordered, size)?,
        PaletteFormat::JascPal => text::jasc_pal(&ordered).into_bytes(),
        PaletteFormat::Ase => ase::encode_ase(&ordered),
        PaletteFormat::Paint => text::paint(&ordered).into_bytes(),
        PaletteFormat::Gimp => text::gimp(&ordered).into_bytes(),
        PaletteFormat::Hex => text::hex_list(&ordered).into_bytes(),
    };
    tracing::debug!(%format, bytes = bytes.len(), "Encoded palette");
    Ok(EncodedPalette { format, bytes })
}

/// Validate the entry count and indices, then sort by index.
fn in_index_order(entries: &[PaletteEntry]) -> Result<[PaletteEntry; PALETTE_SIZE], CodecError> {
    let mut ordered: [PaletteEntry; PALETTE_SIZE] = entries
        .try_into()
        .map_err(|_| CodecError::InvalidPaletteLength(entries.len()))?;
    ordered.sort_by_key(|entry| entry.index);

    let expected = 1..=PALETTE_SIZE as u8;
    if !ordered.iter().map(|e| e.index).eq(expected) {
        return Err(CodecError::InvalidIndices);
    }
    Ok(ordered)
}
