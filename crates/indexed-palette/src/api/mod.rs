//! Public API for the indexed-palette crate.
//!
//! This module provides [`Session`], the owner of one loaded image's index
//! map and palette, and the [`EngineError`] unified error type.

mod error;
mod session;

pub use error::EngineError;
pub use session::Session;
