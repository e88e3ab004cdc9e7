//! CLI command implementations

pub mod composite;
pub mod diff;
pub mod filters;
pub mod points;

use anyhow::{Context, Result};
use pixkit_core::PixelBuffer;
use std::fs;
use std::path::Path;

/// Load a PNG as RGBA.
pub fn load_rgba(path: &Path) -> Result<PixelBuffer> {
    pixkit_io::read_png_rgba(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a gray or RGB buffer as a pixmap.
pub fn save_pixmap(path: &Path, image: &PixelBuffer) -> Result<()> {
    pixkit_io::write_pixmap(path, image)
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote");
    Ok(())
}

/// Create the output directory if needed.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}
