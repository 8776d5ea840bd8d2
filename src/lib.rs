//! Twobit - two-bit palette editor
//!
//! Loads four-color pixel art, swaps and edits its palette and exports the
//! palette in common palette file formats.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
