pub mod config;
pub mod named_palette;

pub use config::{ExportConfig, CONFIG_ENV};
pub use named_palette::{slug, NamedPalette};
