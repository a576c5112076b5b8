//! Spectrum masking.
//!
//! A mask is a real plane laid out like the spectrum it filters. Two
//! interpretations are supported:
//!
//! - [`MaskMode::Binary`]: nonzero mask samples pass the spectrum through
//!   unchanged, zero samples block it. A mask painted at 255 behaves the
//!   same as one painted at 1.
//! - [`MaskMode::Multiply`]: the spectrum is weighted by the mask value,
//!   which allows soft roll-offs.

use crate::{OpsError, OpsResult, Spectrum};
use rustfft::num_complex::Complex;
use spectra_core::Plane;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// How mask samples act on the spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskMode {
    /// Pass where the mask is nonzero, zero elsewhere.
    #[default]
    Binary,
    /// Multiply by the mask value.
    Multiply,
}

impl FromStr for MaskMode {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" | "pass" => Ok(Self::Binary),
            "multiply" | "mul" | "weight" => Ok(Self::Multiply),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown mask mode '{}' (expected binary or multiply)",
                other
            ))),
        }
    }
}

impl fmt::Display for MaskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => f.write_str("binary"),
            Self::Multiply => f.write_str("multiply"),
        }
    }
}

/// Applies `mask` to `spectrum`.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if the planes differ in size.
pub fn apply_mask(spectrum: &Spectrum, mask: &Plane<f32>, mode: MaskMode) -> OpsResult<Spectrum> {
    if !spectrum.same_dimensions(mask) {
        return Err(OpsError::SizeMismatch(format!(
            "spectrum is {}x{}, mask is {}x{}",
            spectrum.width(),
            spectrum.height(),
            mask.width(),
            mask.height()
        )));
    }
    trace!(%mode, width = mask.width(), height = mask.height(), "apply_mask");

    let zero = Complex::new(0.0f32, 0.0);
    let mut out = spectrum.clone();
    for (c, &m) in out.data_mut().iter_mut().zip(mask.data()) {
        *c = match mode {
            MaskMode::Binary if m != 0.0 => *c,
            MaskMode::Binary => zero,
            MaskMode::Multiply => *c * m,
        };
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum() -> Spectrum {
        Plane::from_data(
            2,
            2,
            vec![
                Complex::new(1.0, 1.0),
                Complex::new(2.0, -2.0),
                Complex::new(3.0, 0.5),
                Complex::new(-4.0, 4.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_binary_passes_nonzero() {
        let mask = Plane::from_data(2, 2, vec![255.0, 0.0, 1.0, 0.0]).unwrap();
        let out = apply_mask(&spectrum(), &mask, MaskMode::Binary).unwrap();
        assert_eq!(out.data()[0], Complex::new(1.0, 1.0));
        assert_eq!(out.data()[1], Complex::new(0.0, 0.0));
        assert_eq!(out.data()[2], Complex::new(3.0, 0.5));
        assert_eq!(out.data()[3], Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_multiply_weights() {
        let mask = Plane::from_data(2, 2, vec![0.5, 0.0, 2.0, 1.0]).unwrap();
        let out = apply_mask(&spectrum(), &mask, MaskMode::Multiply).unwrap();
        assert_eq!(out.data()[0], Complex::new(0.5, 0.5));
        assert_eq!(out.data()[1], Complex::new(0.0, 0.0));
        assert_eq!(out.data()[2], Complex::new(6.0, 1.0));
        assert_eq!(out.data()[3], Complex::new(-4.0, 4.0));
    }

    #[test]
    fn test_size_mismatch() {
        let mask = Plane::filled(3, 2, 1.0f32);
        let err = apply_mask(&spectrum(), &mask, MaskMode::Binary).unwrap_err();
        assert!(matches!(err, OpsError::SizeMismatch(_)));
        assert!(err.to_string().contains("mask is 3x2"));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("binary".parse::<MaskMode>().unwrap(), MaskMode::Binary);
        assert_eq!("Multiply".parse::<MaskMode>().unwrap(), MaskMode::Multiply);
        assert!("bogus".parse::<MaskMode>().is_err());
        assert_eq!(MaskMode::Multiply.to_string(), "multiply");
    }
}
