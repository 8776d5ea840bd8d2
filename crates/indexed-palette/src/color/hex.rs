//! Hex string parsing and formatting for 8-bit RGB triples.

use crate::palette::ParseColorError;

/// Parse a hex color string into an `[R, G, B]` byte triple.
///
/// Supports the following formats:
/// - `#RRGGBB` / `RRGGBB` - standard 6-digit hex
/// - `#RGB` / `RGB` - shorthand 3-digit hex (expands to RRGGBB)
///
/// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use indexed_palette::parse_hex;
///
/// assert_eq!(parse_hex("#9bbc0f").unwrap(), [0x9b, 0xbc, 0x0f]);
/// assert_eq!(parse_hex("F00").unwrap(), [255, 0, 0]);
/// ```
pub fn parse_hex(s: &str) -> Result<[u8; 3], ParseColorError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    if !s.is_ascii() {
        return Err(ParseColorError::InvalidLength);
    }

    match s.len() {
        3 => {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            let r = u8::from_str_radix(&s[0..1], 16)? * 17;
            let g = u8::from_str_radix(&s[1..2], 16)? * 17;
            let b = u8::from_str_radix(&s[2..3], 16)? * 17;
            Ok([r, g, b])
        }
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16)?;
            let g = u8::from_str_radix(&s[2..4], 16)?;
            let b = u8::from_str_radix(&s[4..6], 16)?;
            Ok([r, g, b])
        }
        _ => Err(ParseColorError::InvalidLength),
    }
}

/// Format an `[R, G, B]` triple as six uppercase hex digits, no prefix.
///
/// ```
/// use indexed_palette::format_hex;
///
/// assert_eq!(format_hex([0x0f, 0x38, 0x0f]), "0F380F");
/// ```
pub fn format_hex(rgb: [u8; 3]) -> String {
    hex::encode_upper(rgb)
}
