//! Channel edits
//!
//! User edits arrive as `(index, channel, raw text)`. The raw text is parsed
//! leniently (leading integer prefix, empty means zero) and clamped to the
//! channel's range before it reaches the palette.

use std::fmt;
use std::str::FromStr;

use super::error::PaletteError;
use super::palette::Palette;

/// One of the three HSV channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Saturation,
    Value,
}

impl Channel {
    /// Upper bound of the channel (exclusive for hue, inclusive otherwise).
    pub fn max(self) -> f64 {
        match self {
            Channel::Hue => 360.0,
            Channel::Saturation | Channel::Value => 100.0,
        }
    }

    /// Bring a value into the channel's range.
    ///
    /// Saturation and value clamp to `[0, 100]`. Hue is normalized into
    /// `[0, 360)`, so 370 becomes 10 and -30 becomes 330. NaN becomes 0.
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        match self {
            Channel::Hue => {
                let h = value.rem_euclid(360.0);
                if h.is_finite() && h < 360.0 {
                    h
                } else {
                    0.0
                }
            }
            Channel::Saturation | Channel::Value => value.clamp(0.0, self.max()),
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Channel::Hue => "h",
            Channel::Saturation => "s",
            Channel::Value => "v",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Channel {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "hue" => Ok(Channel::Hue),
            "s" | "sat" | "saturation" => Ok(Channel::Saturation),
            "v" | "val" | "value" => Ok(Channel::Value),
            other => Err(PaletteError::UnknownChannel(other.to_string())),
        }
    }
}

/// Parse raw field input the way an HTML number field hands it over.
///
/// Takes the leading integer prefix (after optional whitespace and sign)
/// and ignores the rest, so `"42"`, `"42.9"` and `"42px"` all give 42.
/// Empty or non-numeric input gives 0.
///
/// ```
/// use indexed_palette::parse_channel_input;
///
/// assert_eq!(parse_channel_input(""), 0.0);
/// assert_eq!(parse_channel_input("150"), 150.0);
/// assert_eq!(parse_channel_input(" 42.9"), 42.0);
/// assert_eq!(parse_channel_input("abc"), 0.0);
/// ```
pub fn parse_channel_input(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() {
        return 0.0;
    }
    digits.parse::<f64>().map(|v| sign * v).unwrap_or(0.0)
}

/// A single channel edit, written as `<index>:<channel>=<raw>`.
///
/// ```
/// use indexed_palette::{Channel, ChannelEdit};
///
/// let edit: ChannelEdit = "2:s=40".parse().unwrap();
/// assert_eq!(edit.index, 2);
/// assert_eq!(edit.channel, Channel::Saturation);
/// assert_eq!(edit.value, 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelEdit {
    pub index: u8,
    pub channel: Channel,
    /// Parsed but not yet clamped input
    pub value: f64,
}

impl ChannelEdit {
    pub fn new(index: u8, channel: Channel, value: f64) -> Self {
        Self {
            index,
            channel,
            value,
        }
    }

    /// Apply the edit to a palette.
    pub fn apply(&self, palette: &mut Palette) -> Result<(), PaletteError> {
        palette.set_channel(self.index, self.channel, self.value)
    }
}

impl FromStr for ChannelEdit {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PaletteError::MalformedEdit(s.to_string());

        let (index, rest) = s.split_once(':').ok_or_else(malformed)?;
        let (channel, raw) = rest.split_once('=').ok_or_else(malformed)?;
        let index: u8 = index.trim().parse().map_err(|_| malformed())?;
        let channel: Channel = channel.parse()?;

        Ok(Self::new(index, channel, parse_channel_input(raw)))
    }
}
