//! PNG decoding into the RGBA8 buffer the quantizer expects.

use std::io::Read;
use std::path::Path;

use indexed_palette::Session;

use crate::error::AppError;

/// Largest accepted image, in pixels.
pub const MAX_PIXELS: u64 = 4096 * 4096;

/// A decoded image as RGBA8, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Read and decode a PNG file.
pub fn load_png(path: &Path) -> Result<LoadedImage, AppError> {
    let file = std::fs::File::open(path)?;
    let image = decode_png(std::io::BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "Loaded image"
    );
    Ok(image)
}

/// Load a PNG and quantize it into a new session.
pub fn open_session(path: &Path) -> Result<Session, AppError> {
    let image = load_png(path)?;
    let session = Session::new(&image.rgba, image.width as usize, image.height as usize)?;
    Ok(session)
}

/// Decode PNG data of any color type and bit depth to RGBA8.
///
/// Palette images are expanded, 16-bit channels are reduced to their high
/// byte and images without alpha get alpha 255.
pub fn decode_png<R: Read>(reader: R) -> Result<LoadedImage, AppError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(AppError::ImageTooLarge {
            width: width as usize,
            height: height as usize,
        });
    }

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    buf.truncate(frame.buffer_size());

    let rgba = match frame.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        other => return Err(AppError::UnsupportedColorType(other)),
    };

    Ok(LoadedImage {
        width,
        height,
        rgba,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(
        width: u32,
        height: u32,
        color: png::ColorType,
        depth: png::BitDepth,
        palette: Option<&[u8]>,
        data: &[u8],
    ) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            if let Some(plte) = palette {
                encoder.set_palette(plte);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf.into_inner()
    }

    #[test]
    fn test_decode_rgba() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let png = encode(2, 1, png::ColorType::Rgba, png::BitDepth::Eight, None, &data);
        let image = decode_png(png.as_slice()).unwrap();
        assert_eq!(image.width, 2);
        assert_eq!(image.height, 1);
        assert_eq!(image.rgba, data.to_vec());
    }

    #[test]
    fn test_decode_rgb_adds_alpha() {
        let png = encode(
            2,
            1,
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            None,
            &[10, 20, 30, 40, 50, 60],
        );
        let image = decode_png(png.as_slice()).unwrap();
        assert_eq!(image.rgba, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_decode_grayscale() {
        let png = encode(
            2,
            1,
            png::ColorType::Grayscale,
            png::BitDepth::Eight,
            None,
            &[0, 200],
        );
        let image = decode_png(png.as_slice()).unwrap();
        assert_eq!(image.rgba, vec![0, 0, 0, 255, 200, 200, 200, 255]);
    }

    #[test]
    fn test_decode_gray_alpha() {
        let png = encode(
            1,
            1,
            png::ColorType::GrayscaleAlpha,
            png::BitDepth::Eight,
            None,
            &[90, 17],
        );
        let image = decode_png(png.as_slice()).unwrap();
        assert_eq!(image.rgba, vec![90, 90, 90, 17]);
    }

    #[test]
    fn test_decode_indexed_two_bit() {
        // Four pixels using palette entries 0..=3, packed into one byte
        let plte = [0, 0, 0, 85, 85, 85, 170, 170, 170, 255, 255, 255];
        let png = encode(
            4,
            1,
            png::ColorType::Indexed,
            png::BitDepth::Two,
            Some(&plte),
            &[0b00_01_10_11],
        );
        let image = decode_png(png.as_slice()).unwrap();
        assert_eq!(
            image.rgba,
            vec![0, 0, 0, 255, 85, 85, 85, 255, 170, 170, 170, 255, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_decode_sixteen_bit() {
        let png = encode(
            1,
            1,
            png::ColorType::Rgb,
            png::BitDepth::Sixteen,
            None,
            &[0xAB, 0xCD, 0x12, 0x34, 0xFF, 0xFF],
        );
        let image = decode_png(png.as_slice()).unwrap();
        assert_eq!(image.rgba, vec![0xAB, 0x12, 0xFF, 255]);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_png(&b"not a png"[..]),
            Err(AppError::PngDecode(_))
        ));
    }

    #[test]
    fn test_open_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let png = encode(
            2,
            2,
            png::ColorType::Grayscale,
            png::BitDepth::Eight,
            None,
            &[255, 0, 85, 170],
        );
        std::fs::write(&path, png).unwrap();

        let session = open_session(&path).unwrap();
        assert_eq!(session.index_map(), &[4, 1, 2, 3]);
    }

    #[test]
    fn test_open_session_too_few_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.png");
        let png = encode(
            2,
            1,
            png::ColorType::Grayscale,
            png::BitDepth::Eight,
            None,
            &[0, 0],
        );
        std::fs::write(&path, png).unwrap();

        let err = open_session(&path).unwrap_err();
        assert_eq!(err.to_string(), "Image contains less colors than 4! (found 1)");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_png(&dir.path().join("missing.png")),
            Err(AppError::Io(_))
        ));
    }
}
