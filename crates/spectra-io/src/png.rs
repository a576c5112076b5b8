//! PNG format support.
//!
//! Reads 8-bit and 16-bit gray, gray+alpha, RGB and RGBA files. Palette
//! and sub-byte gray images are expanded to 8 bits on read.
//!
//! Writes keep the sample format of the [`ImageData`]: `U8` is written as
//! 8-bit, `U16` as 16-bit. `F32` has no PNG equivalent and is clamped to
//! [0, 1] and stored as 16-bit.
//!
//! # Example
//!
//! ```rust,ignore
//! use spectra_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write("output.png", &image)?;
//! ```

use crate::{ImageData, IoError, IoResult, PixelData, PixelFormat};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let file = File::open(path.as_ref())?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let bytes = &buf[..info.buffer_size()];

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                other, info.bit_depth
            )));
        }
    };

    let (format, data) = match info.bit_depth {
        png::BitDepth::Eight => (PixelFormat::U8, PixelData::U8(bytes.to_vec())),
        png::BitDepth::Sixteen => (PixelFormat::U16, PixelData::U16(bytes_to_u16(bytes))),
        other => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                info.color_type, other
            )));
        }
    };

    Ok(ImageData {
        width: info.width,
        height: info.height,
        channels,
        format,
        data,
    })
}

/// Writes an image to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    let color_type = match image.channels {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => return Err(IoError::EncodeError(format!("unsupported channel count: {}", n))),
    };

    let (depth, bytes) = match &image.data {
        PixelData::U8(data) => (png::BitDepth::Eight, data.clone()),
        PixelData::U16(data) => (png::BitDepth::Sixteen, u16_to_bytes(data)),
        PixelData::F32(data) => {
            let u16_data: Vec<u16> = data
                .iter()
                .map(|&v| (v.clamp(0.0, 1.0) * 65535.0).round() as u16)
                .collect();
            (png::BitDepth::Sixteen, u16_to_bytes(&u16_data))
        }
    };

    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(color_type);
    encoder.set_depth(depth);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

/// Converts big-endian byte slice to u16 vector.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}

/// PNG stores 16-bit samples big-endian.
fn u16_to_bytes(data: &[u16]) -> Vec<u8> {
    data.iter().flat_map(|v| v.to_be_bytes()).collect()
}
