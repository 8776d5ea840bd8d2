use std::path::PathBuf;

use indexed_palette::{EngineError, NamedPaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Shown verbatim to the user
    #[error("Palette not found.")]
    PaletteNotFound,

    #[error("Invalid palette document: {0}")]
    PaletteDocument(#[from] serde_json::Error),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported PNG color type: {0:?}")]
    UnsupportedColorType(png::ColorType),

    #[error("Image too large: {width}x{height}")]
    ImageTooLarge { width: usize, height: usize },

    #[error("Two selected formats write the same file: {0}")]
    DuplicateOutput(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<NamedPaletteError> for AppError {
    fn from(e: NamedPaletteError) -> Self {
        AppError::Engine(e.into())
    }
}
