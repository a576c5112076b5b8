//! # spectra-io
//!
//! Image I/O for frequency-domain filtering.
//!
//! - **PNG** - 8/16-bit gray, gray+alpha, RGB, RGBA
//! - **TIFF** - 8/16-bit integer and 32-bit float, LZW on write
//!
//! Samples keep their native units: an 8-bit pixel of 200 is read as 200,
//! not 0.78. Filters downstream pick their own output ranges (0..255 for
//! byte output, 0..65535 for 16-bit output), so normalizing here would
//! break them.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use spectra_io::{read, write, ImageData};
//!
//! let image = read("input.png")?;
//! let luma = image.to_luma_plane()?;
//! // ... process ...
//! write("output.png", &ImageData::from_plane_u8(&result))?;
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `tiff` - TIFF support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "tiff")]
pub mod tiff;

pub use detect::Format;
pub use error::{IoError, IoResult};

use spectra_core::Plane;
use std::path::Path;
use tracing::{debug, trace};

/// Rec.709 luminance weights in the integer form used by the reader:
/// `(2125 R + 7154 G + 721 B) / 10000`.
const LUMA_WEIGHTS: [f64; 3] = [2125.0, 7154.0, 721.0];
const LUMA_DIVISOR: f64 = 10000.0;

/// Reads an image from a file, auto-detecting the format.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened (`IoError::Io`, e.g. NotFound)
/// - The format is not supported
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    trace!(path = %path.display(), ?format, "read");

    let image = match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path)?,

        #[cfg(feature = "tiff")]
        Format::Tiff => tiff::read(path)?,

        _ => return Err(unsupported(path)),
    };

    debug!(
        width = image.width,
        height = image.height,
        channels = image.channels,
        format = ?image.format,
        "Loaded image"
    );
    Ok(image)
}

/// Writes an image to a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created
/// - The format is not supported for writing
/// - The image layout is incompatible with the format
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    trace!(path = %path.display(), ?format, "write");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(feature = "tiff")]
        Format::Tiff => tiff::write(path, image),

        _ => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}

/// Image data container for I/O operations.
///
/// Holds interleaved samples in their native units along with the
/// channel count and sample format.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of channels (1 gray, 2 gray+alpha, 3 RGB, 4 RGBA).
    pub channels: u32,
    /// Pixel data format.
    pub format: PixelFormat,
    /// Raw pixel data.
    pub data: PixelData,
}

/// Pixel data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit unsigned integer per channel.
    U8,
    /// 16-bit unsigned integer per channel.
    U16,
    /// 32-bit float per channel.
    F32,
}

/// Raw pixel data storage.
#[derive(Debug, Clone)]
pub enum PixelData {
    /// 8-bit unsigned data.
    U8(Vec<u8>),
    /// 16-bit unsigned data.
    U16(Vec<u16>),
    /// 32-bit float data.
    F32(Vec<f32>),
}

impl ImageData {
    /// Creates ImageData from u8 pixel data.
    pub fn from_u8(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            format: PixelFormat::U8,
            data: PixelData::U8(data),
        }
    }

    /// Creates ImageData from u16 pixel data.
    pub fn from_u16(width: u32, height: u32, channels: u32, data: Vec<u16>) -> Self {
        Self {
            width,
            height,
            channels,
            format: PixelFormat::U16,
            data: PixelData::U16(data),
        }
    }

    /// Creates ImageData from f32 pixel data.
    pub fn from_f32(width: u32, height: u32, channels: u32, data: Vec<f32>) -> Self {
        Self {
            width,
            height,
            channels,
            format: PixelFormat::F32,
            data: PixelData::F32(data),
        }
    }

    /// Single-channel 8-bit image from a plane.
    pub fn from_plane_u8(plane: &Plane<u8>) -> Self {
        Self::from_u8(plane.width(), plane.height(), 1, plane.data().to_vec())
    }

    /// Single-channel 16-bit image from a plane.
    pub fn from_plane_u16(plane: &Plane<u16>) -> Self {
        Self::from_u16(plane.width(), plane.height(), 1, plane.data().to_vec())
    }

    /// Returns the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the total number of samples (pixels * channels).
    pub fn sample_count(&self) -> usize {
        self.pixel_count() * self.channels as usize
    }

    /// Samples as f32 in native units (no normalization).
    pub fn to_f32_raw(&self) -> Vec<f32> {
        match &self.data {
            PixelData::U8(data) => data.iter().map(|&v| v as f32).collect(),
            PixelData::U16(data) => data.iter().map(|&v| v as f32).collect(),
            PixelData::F32(data) => data.clone(),
        }
    }

    /// Largest representable alpha for this sample format.
    fn alpha_max(&self) -> f64 {
        match self.format {
            PixelFormat::U8 => u8::MAX as f64,
            PixelFormat::U16 => u16::MAX as f64,
            PixelFormat::F32 => 1.0,
        }
    }

    /// Collapses the image to a scalar luminance plane in native units.
    ///
    /// Gray passes through, RGB uses `(2125 R + 7154 G + 721 B) / 10000`,
    /// and alpha (when present) scales the result by `a / alpha_max`.
    pub fn to_luma_plane(&self) -> IoResult<Plane<f32>> {
        let samples = self.to_f32_raw();
        let channels = self.channels as usize;
        if !(1..=4).contains(&channels) {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{} channels",
                self.channels
            )));
        }
        if samples.len() != self.sample_count() {
            return Err(IoError::DecodeError(format!(
                "expected {} samples, got {}",
                self.sample_count(),
                samples.len()
            )));
        }

        let alpha_max = self.alpha_max();
        let rgb = |px: &[f32]| {
            (LUMA_WEIGHTS[0] * px[0] as f64
                + LUMA_WEIGHTS[1] * px[1] as f64
                + LUMA_WEIGHTS[2] * px[2] as f64)
                / LUMA_DIVISOR
        };

        let luma: Vec<f32> = samples
            .chunks_exact(channels)
            .map(|px| match channels {
                1 => px[0],
                2 => (px[0] as f64 * px[1] as f64 / alpha_max) as f32,
                3 => rgb(px) as f32,
                _ => (rgb(px) * px[3] as f64 / alpha_max) as f32,
            })
            .collect();

        Ok(Plane::from_data(self.width, self.height, luma)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gray_luma_keeps_native_units() {
        let image = ImageData::from_u8(2, 1, 1, vec![0, 200]);
        let luma = image.to_luma_plane().unwrap();
        assert_eq!(luma.data(), &[0.0, 200.0]);
    }

    #[test]
    fn test_rgb_luma_weights() {
        let image = ImageData::from_u8(2, 1, 3, vec![255, 255, 255, 100, 0, 0]);
        let luma = image.to_luma_plane().unwrap();
        assert_relative_eq!(luma.data()[0], 255.0, epsilon = 1e-3);
        assert_relative_eq!(luma.data()[1], 21.25, epsilon = 1e-3);
    }

    #[test]
    fn test_alpha_scales_luma() {
        let image = ImageData::from_u16(1, 1, 2, vec![1000, 32768]);
        let luma = image.to_luma_plane().unwrap();
        assert_relative_eq!(luma.data()[0], 1000.0 * 32768.0 / 65535.0, epsilon = 1e-2);

        let rgba = ImageData::from_u8(1, 1, 4, vec![255, 255, 255, 0]);
        assert_eq!(rgba.to_luma_plane().unwrap().data(), &[0.0]);
    }

    #[test]
    fn test_luma_rejects_short_buffer() {
        let image = ImageData::from_u8(2, 2, 1, vec![0; 3]);
        assert!(image.to_luma_plane().is_err());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read("/nonexistent/spectra/input.png").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn test_write_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let image = ImageData::from_u8(1, 1, 1, vec![0]);
        let err = write(dir.path().join("out.bmp"), &image).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(ext) if ext == "bmp"));
    }
}
