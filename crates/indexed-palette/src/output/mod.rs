//! Output types for the recoloring pipeline.
//!
//! This module provides [`IndexedImage`], the immutable per-pixel index map
//! produced by quantization, and the compositor that turns an index map
//! plus the current [`Palette`](crate::palette::Palette) back into pixels.
//!
//! # Output Formats
//!
//! - **Indexed** ([`IndexedImage::indices`]): Raw `u8` slot indices `1..=4`
//! - **RGBA** ([`render`] / [`render_into`]): Opaque RGBA bytes for display

mod indexed_image;
mod render;

pub use indexed_image::IndexedImage;
pub use render::{render, render_into, RenderError};
