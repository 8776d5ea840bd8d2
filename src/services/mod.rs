pub mod exporter;
pub mod image_loader;

pub use exporter::{optimize_png, ExportedFile, Exporter};
pub use image_loader::{decode_png, load_png, open_session, LoadedImage};
