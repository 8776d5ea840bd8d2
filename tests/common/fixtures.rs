//! Test fixtures and constants.

/// Source colors of the Game Boy test image, darkest to lightest.
pub mod colors {
    pub const DARKEST: [u8; 3] = [15, 56, 15];
    pub const DARK: [u8; 3] = [48, 98, 48];
    pub const LIGHT: [u8; 3] = [139, 172, 15];
    pub const LIGHTEST: [u8; 3] = [155, 188, 15];
}

/// Named palette documents in the Lospec JSON shape
pub mod palettes {
    pub const ICE_CREAM_GB: &str = r#"{
        "name": "Ice Cream GB",
        "author": "Kerrie Lake",
        "colors": ["7c3f58", "eb6b6f", "f9a875", "fff6d3"]
    }"#;

    pub const FIVE_COLORS: &str = r#"{
        "name": "Too Many",
        "author": "",
        "colors": ["000000", "333333", "666666", "999999", "ffffff"]
    }"#;
}

/// 4x4 RGBA image using the four Game Boy colors in a checker-like layout.
///
/// Row `y` holds colors `[y, y+1, y+2, y+3] mod 4` so every color appears
/// in every row and column.
pub fn gameboy_rgba() -> Vec<u8> {
    let cycle = [
        colors::LIGHTEST,
        colors::DARKEST,
        colors::LIGHT,
        colors::DARK,
    ];
    let mut rgba = Vec::with_capacity(4 * 4 * 4);
    for y in 0..4 {
        for x in 0..4 {
            let [r, g, b] = cycle[(x + y) % 4];
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
    }
    rgba
}

/// Expected index map of [`gameboy_rgba`]: lightest=4, darkest=1,
/// light=3, dark=2.
pub fn gameboy_index_map() -> Vec<u8> {
    let cycle = [4u8, 1, 3, 2];
    (0..4)
        .flat_map(|y| (0..4).map(move |x| cycle[(x + y) % 4]))
        .collect()
}

/// Same image with one extra color in the last pixel.
pub fn five_color_rgba() -> Vec<u8> {
    let mut rgba = gameboy_rgba();
    let n = rgba.len();
    rgba[n - 4..].copy_from_slice(&[255, 0, 255, 255]);
    rgba
}

/// Encode an RGBA buffer as PNG.
pub fn encode_png(rgba: &[u8], width: u32, height: u32) -> Vec<u8> {
    let mut buf = std::io::Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(rgba).unwrap();
    }
    buf.into_inner()
}
