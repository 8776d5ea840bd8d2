//! Writes palette exports and recolored images to disk.

use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use indexed_palette::{encode, PaletteFormat, Session};

use crate::error::AppError;
use crate::models::ExportConfig;

/// A file written by the exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    /// `None` for the recolored image
    pub format: Option<PaletteFormat>,
    pub bytes: usize,
}

/// Writes `<stem>.<extension>` files into one directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    out_dir: PathBuf,
    stem: String,
    optimize: bool,
}

impl Exporter {
    pub fn new(out_dir: impl Into<PathBuf>, stem: impl Into<String>, optimize: bool) -> Self {
        Self {
            out_dir: out_dir.into(),
            stem: stem.into(),
            optimize,
        }
    }

    pub fn from_config(config: &ExportConfig, out_dir: impl Into<PathBuf>) -> Self {
        Self::new(out_dir, config.output_stem.clone(), config.optimize_png)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Encode and write every format from one palette snapshot.
    ///
    /// Formats that would write the same file name are rejected before
    /// anything is written.
    pub fn export(
        &self,
        session: &Session,
        formats: &[PaletteFormat],
    ) -> Result<Vec<ExportedFile>, AppError> {
        let mut names = HashSet::new();
        for format in formats {
            let name = format!("{}.{}", self.stem, format.extension());
            if !names.insert(name.clone()) {
                return Err(AppError::DuplicateOutput(name));
            }
        }

        std::fs::create_dir_all(&self.out_dir)?;
        let snapshot = session.snapshot();

        let mut written = Vec::with_capacity(formats.len());
        for &format in formats {
            let encoded = encode(format, &snapshot).map_err(indexed_palette::EngineError::from)?;
            let path = self.out_dir.join(encoded.file_name(&self.stem));
            let bytes = match format {
                PaletteFormat::Png { .. } if self.optimize => optimize_png(encoded.bytes),
                _ => encoded.bytes,
            };
            std::fs::write(&path, &bytes)?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), %format, "Exported palette");
            written.push(ExportedFile {
                path,
                format: Some(format),
                bytes: bytes.len(),
            });
        }
        Ok(written)
    }

    /// Render the session with its current palette and write it as RGBA PNG.
    pub fn write_recolored(&self, session: &Session, path: &Path) -> Result<ExportedFile, AppError> {
        let rgba = session.render()?;
        let (width, height) = (session.width(), session.height());
        let too_large = || AppError::ImageTooLarge { width, height };
        let width = u32::try_from(width).map_err(|_| too_large())?;
        let height = u32::try_from(height).map_err(|_| too_large())?;

        let mut bytes = encode_rgba_png(&rgba, width, height)?;
        if self.optimize {
            bytes = optimize_png(bytes);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote recolored image");

        Ok(ExportedFile {
            path: path.to_path_buf(),
            format: None,
            bytes: bytes.len(),
        })
    }
}

/// Encode an RGBA8 buffer as PNG.
fn encode_rgba_png(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Re-compress PNG data with oxipng, keeping the input if that fails.
pub fn optimize_png(bytes: Vec<u8>) -> Vec<u8> {
    oxipng::optimize_from_memory(
        &bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(bytes)
}
