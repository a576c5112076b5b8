//! Command implementations

pub mod mask_filter;
pub mod spectrum;

use anyhow::{Context, Result};
use spectra_core::Plane;
use spectra_io::ImageData;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<ImageData> {
    spectra_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Load image from path as a luminance plane in native units
pub fn load_luma(path: &Path) -> Result<Plane<f32>> {
    load_image(path)?
        .to_luma_plane()
        .with_context(|| format!("Failed to convert: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &ImageData) -> Result<()> {
    spectra_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}
