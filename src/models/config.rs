use indexed_palette::{ChannelEdit, PaletteFormat, DEFAULT_FILE_STEM, DEFAULT_PREVIEW_SIZE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "TWOBIT_CONFIG";

/// Export configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    /// File stem for every exported palette file
    #[serde(default = "default_output_stem")]
    pub output_stem: String,

    /// Format identifiers to export (`png`, `png-8`, `pal`, ...)
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,

    /// Swatch size used for the plain `png` format
    #[serde(default = "default_preview_size")]
    pub preview_size: u32,

    /// Re-compress written PNG files with oxipng
    #[serde(default = "default_optimize_png")]
    pub optimize_png: bool,

    /// Named palette: a JSON file path or a name looked up in `palette_dir`
    #[serde(default)]
    pub palette: Option<String>,

    /// Directory holding named palette documents as `<slug>.json`
    #[serde(default = "default_palette_dir")]
    pub palette_dir: PathBuf,

    /// Channel edits applied after the named palette, e.g. `2:s=40`
    #[serde(default)]
    pub edits: Vec<String>,
}

fn default_output_stem() -> String {
    DEFAULT_FILE_STEM.to_string()
}

fn default_formats() -> Vec<String> {
    ["png", "pal", "photoshop-ase", "paint", "gimp", "hex"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_preview_size() -> u32 {
    DEFAULT_PREVIEW_SIZE
}

fn default_optimize_png() -> bool {
    true
}

fn default_palette_dir() -> PathBuf {
    PathBuf::from("palettes")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_stem: default_output_stem(),
            formats: default_formats(),
            preview_size: default_preview_size(),
            optimize_png: default_optimize_png(),
            palette: None,
            palette_dir: default_palette_dir(),
            edits: Vec::new(),
        }
    }
}

impl ExportConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration.
    ///
    /// An explicit `--config` path must exist. A path from
    /// [`CONFIG_ENV`] that does not exist, or any file that fails to parse,
    /// falls back to defaults with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(AppError::ConfigNotFound(path.to_path_buf()));
            }
            return Ok(Self::load_or_default(path));
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Ok(Self::load_or_default(Path::new(&path))),
            None => Ok(Self::default()),
        }
    }

    fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        formats = config.formats.len(),
                        edits = config.edits.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve format identifiers, dropping repeats.
    ///
    /// Plain `png` takes its swatch size from `preview_size`.
    pub fn resolve_formats(&self) -> Result<Vec<PaletteFormat>, AppError> {
        let mut formats = Vec::with_capacity(self.formats.len());
        for id in &self.formats {
            let format = if id.trim().eq_ignore_ascii_case("png") {
                PaletteFormat::Png {
                    size: self.preview_size,
                }
            } else {
                id.parse::<PaletteFormat>()
                    .map_err(indexed_palette::EngineError::from)?
            };
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        Ok(formats)
    }

    /// Parse the configured channel edits in order.
    pub fn parse_edits(&self) -> Result<Vec<ChannelEdit>, AppError> {
        self.edits
            .iter()
            .map(|raw| {
                raw.parse::<ChannelEdit>()
                    .map_err(|e| AppError::Engine(e.into()))
            })
            .collect()
    }
}
