#![allow(clippy::module_inception)]

//! indexed-palette: four-color palette engine for pixel art
//!
//! This library reduces a four-color source image to an index map plus a
//! four-entry HSV palette, recolors the index map as the palette is edited
//! and writes the palette to common palette file formats.
//!
//! # Quick Start
//!
//! The [`Session`] type is the primary entry point:
//!
//! ```
//! use indexed_palette::{PaletteFormat, Session};
//!
//! // 2x2 image: black, dark grey, light grey, white
//! let rgba = [
//!     0, 0, 0, 255,       85, 85, 85, 255,
//!     170, 170, 170, 255, 255, 255, 255, 255,
//! ];
//! let mut session = Session::new(&rgba, 2, 2).unwrap();
//! assert_eq!(session.index_map(), &[1, 2, 3, 4]);
//!
//! // Swap in a named palette, darkest color first after sorting
//! session.apply_named(&["9bbc0f", "0f380f", "8bac0f", "306230"]).unwrap();
//! let pixels = session.render().unwrap();
//! assert_eq!(&pixels[..4], &[15, 56, 15, 255]);
//!
//! let ase = session.encode(PaletteFormat::Ase).unwrap();
//! assert_eq!(&ase.bytes[..4], b"ASEF");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA bytes
//!     |
//!     v
//! quantize()           exact HSV equality, fails unless exactly 4 colors
//!     |
//!     +---> index map  (immutable, 1..=4 per pixel, darkest = 1)
//!     +---> Palette    (4 HSV entries, edited in place)
//!                |
//!     +----------+----------+
//!     v                     v
//! render()              encode()
//! RGBA, alpha 255       png / pal / ase / txt / gpl / hex
//! ```
//!
//! # Color Handling
//!
//! HSV is canonical. Pixels are converted to HSV with every component
//! rounded to an integer, so two RGB values that round to the same HSV
//! triple are treated as one color. RGB, HSL and hex forms are derived on
//! demand and the HSV to RGB round trip may drift by a few units per
//! channel.
//!
//! # Module Organization
//!
//! - [`color`]: HSV, HSL and hex conversions
//! - [`quantize`]: exact four-color quantizer
//! - [`palette`]: palette store, channel edits and named palettes
//! - [`output`]: index map and compositor
//! - [`codec`]: palette file encoders
//! - [`api`]: [`Session`] and the unified [`EngineError`]

pub mod api;
pub mod codec;
pub mod color;
pub mod output;
pub mod palette;
pub mod quantize;


pub use api::{EngineError, Session};
pub use codec::{
    encode, CodecError, EncodedPalette, PaletteFormat, DEFAULT_FILE_STEM, DEFAULT_PREVIEW_SIZE,
    MENU_PREVIEW_SIZES,
};
pub use color::{format_hex, parse_hex, Hsl, Hsv};
pub use output::{render, render_into, IndexedImage, RenderError};
pub use palette::{
    parse_channel_input, sort_by_value, Channel, ChannelEdit, NamedPaletteError, Palette,
    PaletteEntry, PaletteError, ParseColorError, PALETTE_SIZE,
};
pub use quantize::{quantize, QuantizeError, Quantized, BYTES_PER_PIXEL};
