//! Error types for palette operations
//!
//! This module provides error types for color parsing, palette lookups and
//! named palette validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette store operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// Index outside `1..=4`
    #[error("unknown palette index {0} (expected 1..=4)")]
    UnknownIndex(u8),
    /// `replace_all` called with a color count other than 4
    #[error("expected exactly 4 colors, got {0}")]
    InvalidLength(usize),
    /// Channel name is not one of `h`, `s`, `v`
    #[error("unknown channel `{0}` (expected h, s or v)")]
    UnknownChannel(String),
    /// Edit string does not follow `<index>:<channel>=<value>`
    #[error("malformed edit `{0}` (expected <index>:<channel>=<value>)")]
    MalformedEdit(String),
}

/// Error type for applying an externally supplied named palette.
///
/// These are expected outcomes reported to the user, not faults. The
/// display strings are the user-facing messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NamedPaletteError {
    /// The named palette does not have exactly four colors
    #[error("Palette must have exactly 4 colors.")]
    WrongColorCount(usize),
    /// One of the palette's colors is not a valid hex string
    #[error("invalid color `{color}`: {source}")]
    InvalidColor {
        color: String,
        #[source]
        source: ParseColorError,
    },
}
