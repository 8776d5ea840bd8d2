//! Palette store and related types
//!
//! This module provides the four-entry [`Palette`], channel edits, named
//! palette handling, and the error types for parsing and validation.

mod edit;
mod error;
mod named;
mod palette;

pub use edit::{parse_channel_input, Channel, ChannelEdit};
pub use error::{NamedPaletteError, PaletteError, ParseColorError};
pub use named::sort_by_value;
pub use palette::{Palette, PaletteEntry, PALETTE_SIZE};
