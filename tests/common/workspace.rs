//! Temporary directory with source images and palette documents.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::fixtures;

/// Isolated working directory for one test.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Output directory for exports (not created).
    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Directory holding named palette documents.
    pub fn palette_dir(&self) -> PathBuf {
        self.dir.path().join("palettes")
    }

    /// Write an RGBA image as PNG and return its path.
    pub fn write_image(&self, name: &str, rgba: &[u8], width: u32, height: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, fixtures::encode_png(rgba, width, height))
            .expect("Failed to write image");
        path
    }

    /// Write the 4x4 Game Boy test image.
    pub fn gameboy_image(&self) -> PathBuf {
        self.write_image("gameboy.png", &fixtures::gameboy_rgba(), 4, 4)
    }

    /// Store a palette document as `palettes/<slug>.json`.
    pub fn add_palette(&self, slug: &str, json: &str) -> PathBuf {
        let dir = self.palette_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create palette dir");
        let path = dir.join(format!("{slug}.json"));
        std::fs::write(&path, json).expect("Failed to write palette");
        path
    }

    pub fn read_string(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("Failed to read output")
    }
}
