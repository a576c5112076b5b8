//! Benchmark-only crate for spectra-rs.
//!
//! Run with: `cargo bench -p spectra-bench`

use spectra_core::Plane;

/// Deterministic test image with structure at several frequencies.
pub fn test_image(width: u32, height: u32) -> Plane<f32> {
    let mut plane = Plane::new(width, height);
    for (i, v) in plane.data_mut().iter_mut().enumerate() {
        let x = (i % width as usize) as f32;
        let y = (i / width as usize) as f32;
        *v = 128.0 + 60.0 * (x * 0.21).sin() + 40.0 * (y * 0.07).cos() + ((i * 31) % 17) as f32;
    }
    plane
}

/// Centered circular low-pass mask.
pub fn lowpass_mask(width: u32, height: u32, radius: f32) -> Plane<f32> {
    let (cx, cy) = ((width / 2) as f32, (height / 2) as f32);
    let mut plane = Plane::new(width, height);
    for (i, v) in plane.data_mut().iter_mut().enumerate() {
        let dx = (i % width as usize) as f32 - cx;
        let dy = (i / width as usize) as f32 - cy;
        if dx * dx + dy * dy <= radius * radius {
            *v = 1.0;
        }
    }
    plane
}
