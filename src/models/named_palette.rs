use indexed_palette::{NamedPaletteError, Session, PALETTE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// A named palette in the Lospec JSON shape.
///
/// Colors are hex strings, usually without a leading `#`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct NamedPalette {
    pub name: String,

    #[serde(default)]
    pub author: Option<String>,

    pub colors: Vec<String>,
}

/// Lookup key for a palette name: lower-cased, spaces replaced by `-`.
pub fn slug(query: &str) -> String {
    query.to_lowercase().replace(' ', "-")
}

impl NamedPalette {
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a palette document; a missing file is "Palette not found."
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AppError::PaletteNotFound,
            _ => AppError::Io(e),
        })?;
        Self::from_json(&content)
    }

    /// Resolve a `--palette` argument.
    ///
    /// An existing file is read directly. Anything else is treated as a
    /// palette name and looked up as `<dir>/<slug>.json`.
    pub fn locate(query: &str, dir: &Path) -> Result<Self, AppError> {
        let direct = Path::new(query);
        if direct.is_file() {
            return Self::load(direct);
        }
        let path = Self::path_for(query, dir);
        tracing::debug!(path = %path.display(), "Looking up named palette");
        Self::load(&path)
    }

    /// Where a palette called `query` is expected inside `dir`.
    pub fn path_for(query: &str, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", slug(query)))
    }

    /// The only palettes that can be applied have exactly four colors.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.colors.len() != PALETTE_SIZE {
            return Err(NamedPaletteError::WrongColorCount(self.colors.len()).into());
        }
        Ok(())
    }

    /// `By <author>`, or `By Lospec` without an author.
    pub fn byline(&self) -> String {
        let author = self
            .author
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or("Lospec");
        format!("By {author}")
    }

    /// CSS gradient with four hard-edged quarter stops, colors in document
    /// order.
    pub fn gradient(&self) -> Result<String, AppError> {
        self.validate()?;
        let stops: Vec<String> = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let color = color.trim_start_matches('#');
                format!("#{color} {}% {}%", i * 25, (i + 1) * 25)
            })
            .collect();
        Ok(format!("linear-gradient(to right, {})", stops.join(", ")))
    }

    /// Replace the session's colors with this palette's, darkest first.
    pub fn apply(&self, session: &mut Session) -> Result<(), AppError> {
        self.validate()?;
        session.apply_named(self.colors.as_slice())?;
        tracing::info!(name = %self.name, "Applied named palette");
        Ok(())
    }
}
