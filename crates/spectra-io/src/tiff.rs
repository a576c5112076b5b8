//! TIFF format support.
//!
//! Reads 8/16-bit Gray, GrayA, RGB and RGBA, plus 32-bit float Gray, RGB
//! and RGBA. Writes the same layouts with LZW compression, keeping the
//! sample format of the [`ImageData`].
//!
//! # Example
//!
//! ```rust,ignore
//! use spectra_io::tiff;
//!
//! let image = tiff::read("scan.tiff")?;
//! tiff::write("output.tiff", &image)?;
//! ```

use crate::{ImageData, IoError, IoResult, PixelData, PixelFormat};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a TIFF file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    use tiff::ColorType;
    use tiff::decoder::{Decoder, DecodingResult};

    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut decoder =
        Decoder::new(reader).map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;
    let color_type = decoder
        .colortype()
        .map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;

    let result = decoder
        .read_image()
        .map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;

    let channels = match color_type {
        ColorType::Gray(_) => 1,
        ColorType::GrayA(_) => 2,
        ColorType::RGB(_) => 3,
        ColorType::RGBA(_) => 4,
        ct => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "unsupported TIFF color type: {:?}",
                ct
            )));
        }
    };

    let (format, data) = match result {
        DecodingResult::U8(buf) => (PixelFormat::U8, PixelData::U8(buf)),
        DecodingResult::U16(buf) => (PixelFormat::U16, PixelData::U16(buf)),
        DecodingResult::F32(buf) => (PixelFormat::F32, PixelData::F32(buf)),
        _ => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "unsupported TIFF sample type for {:?}",
                color_type
            )));
        }
    };

    Ok(ImageData {
        width,
        height,
        channels,
        format,
        data,
    })
}

/// Writes an image to a TIFF file.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    use tiff::encoder::{TiffEncoder, colortype, compression};

    let file = File::create(path.as_ref())?;
    let mut encoder =
        TiffEncoder::new(file).map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;

    let (width, height) = (image.width, image.height);

    macro_rules! encode {
        ($color:ty, $data:expr) => {
            encoder
                .write_image_with_compression::<$color, compression::Lzw>(
                    width,
                    height,
                    compression::Lzw,
                    $data,
                )
                .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?
        };
    }

    match (&image.data, image.channels) {
        (PixelData::U8(d), 1) => encode!(colortype::Gray8, d),
        (PixelData::U8(d), 3) => encode!(colortype::RGB8, d),
        (PixelData::U8(d), 4) => encode!(colortype::RGBA8, d),
        (PixelData::U16(d), 1) => encode!(colortype::Gray16, d),
        (PixelData::U16(d), 3) => encode!(colortype::RGB16, d),
        (PixelData::U16(d), 4) => encode!(colortype::RGBA16, d),
        (PixelData::F32(d), 1) => encode!(colortype::Gray32Float, d),
        (PixelData::F32(d), 3) => encode!(colortype::RGB32Float, d),
        (PixelData::F32(d), 4) => encode!(colortype::RGBA32Float, d),
        (_, n) => {
            return Err(IoError::EncodeError(format!(
                "unsupported channel count: {}",
                n
            )));
        }
    }

    Ok(())
}
