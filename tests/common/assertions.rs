//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

use twobit::services::{decode_png, LoadedImage};

/// Assert a file exists and is a PNG; return its decoded pixels
pub fn assert_png_file(path: &Path) -> LoadedImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected file {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    decode_png(bytes.as_slice()).expect("PNG should decode")
}

/// Assert every pixel of an RGBA buffer is opaque
pub fn assert_opaque(rgba: &[u8]) {
    for (i, px) in rgba.chunks(4).enumerate() {
        assert_eq!(px[3], 255, "pixel {i} is not opaque");
    }
}

/// Assert a hex list has exactly `count` lines of six hex digits
pub fn assert_hex_lines(text: &str, count: usize) {
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), count, "Hex list: {text:?}");
    for line in lines {
        assert!(
            line.len() == 6 && line.chars().all(|c| c.is_ascii_hexdigit()),
            "Not a hex color line: {line:?}"
        );
    }
}
