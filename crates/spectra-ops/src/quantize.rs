//! Conversion of real planes to integer pixel planes.
//!
//! [`quantize_u8`] and [`quantize_u16`] round to nearest and saturate at
//! the type bounds. [`to_byte_range`] decides how an arbitrary real plane
//! is brought into `[0, 255]` before quantization.
//!
//! # Byte mapping
//!
//! | Condition                       | Mapping                          |
//! |---------------------------------|----------------------------------|
//! | `max - min > 255`, `min < 0`    | shift by `-min`, rescale [0,255] |
//! | `max - min > 255`, `min >= 0`   | rescale [0, 255]                 |
//! | `max - min <= 255`, `min < 0`   | shift by `-min`                  |
//! | otherwise                       | values unchanged                 |
//!
//! The shift before rescaling does not change the result: rescaling maps
//! the plane's own minimum to 0 whatever it is. The branch is kept so the
//! recorded [`ByteMapping`] says which path a plane took.

use crate::intensity::{min_max, rescale_intensity, shift_scale};
use spectra_core::Plane;
use tracing::debug;

/// Largest value of the byte range.
const BYTE_MAX: f32 = u8::MAX as f32;

/// Rounds each sample to the nearest `u8`, saturating at 0 and 255.
/// NaN becomes 0.
pub fn quantize_u8(plane: &Plane<f32>) -> Plane<u8> {
    // float-to-int `as` saturates and maps NaN to 0
    plane.map(|&v| v.round() as u8)
}

/// Rounds each sample to the nearest `u16`, saturating at 0 and 65535.
/// NaN becomes 0.
pub fn quantize_u16(plane: &Plane<f32>) -> Plane<u16> {
    plane.map(|&v| v.round() as u16)
}

/// Which path [`to_byte_range`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteMapping {
    /// Range exceeds 255: stretched onto `[0, 255]`.
    Rescale {
        /// The plane was shifted by `-min` first (minimum was negative).
        shifted: bool,
    },
    /// Range fits but the minimum is negative: shifted by `-min`.
    Shift,
    /// Already fits: quantized directly.
    Cast,
}

impl ByteMapping {
    /// Picks the mapping for a plane with the given extrema.
    ///
    /// ```rust
    /// use spectra_ops::ByteMapping;
    ///
    /// assert_eq!(ByteMapping::choose(-10.0, 300.0), ByteMapping::Rescale { shifted: true });
    /// assert_eq!(ByteMapping::choose(0.0, 300.0), ByteMapping::Rescale { shifted: false });
    /// assert_eq!(ByteMapping::choose(-10.0, 100.0), ByteMapping::Shift);
    /// assert_eq!(ByteMapping::choose(0.0, 255.0), ByteMapping::Cast);
    /// ```
    pub fn choose(min: f32, max: f32) -> Self {
        let range = max - min;
        if range > BYTE_MAX {
            Self::Rescale { shifted: min < 0.0 }
        } else if min < 0.0 {
            Self::Shift
        } else {
            Self::Cast
        }
    }
}

/// Result of [`to_byte_range`].
#[derive(Debug, Clone)]
pub struct ByteConversion {
    /// Quantized image.
    pub image: Plane<u8>,
    /// Path taken.
    pub mapping: ByteMapping,
    /// Minimum of the input plane.
    pub min: f32,
    /// Maximum of the input plane.
    pub max: f32,
}

/// Brings a real plane into the byte range and quantizes it.
pub fn to_byte_range(plane: &Plane<f32>) -> ByteConversion {
    let (min, max) = min_max(plane);
    let mapping = ByteMapping::choose(min, max);
    debug!(min, max, range = max - min, ?mapping, "Byte range mapping");

    let mapped = match mapping {
        ByteMapping::Rescale { shifted: true } => {
            rescale_intensity(&shift_scale(plane, -min, 1.0), 0.0, BYTE_MAX)
        }
        ByteMapping::Rescale { shifted: false } => rescale_intensity(plane, 0.0, BYTE_MAX),
        ByteMapping::Shift => shift_scale(plane, -min, 1.0),
        ByteMapping::Cast => plane.clone(),
    };

    ByteConversion {
        image: quantize_u8(&mapped),
        mapping,
        min,
        max,
    }
}
