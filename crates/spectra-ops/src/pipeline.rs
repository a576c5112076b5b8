//! Fixed filter chains.
//!
//! # Mask filter
//!
//! ```text
//! image ─► forward_fft ─┐
//!                       ├─► apply_mask ─► inverse_fft ─► to_byte_range ─► u8
//! mask ─► fft_shift⁻¹ ──┘
//! ```
//!
//! The mask is authored in centered layout (DC in the middle), so it is
//! shifted back into FFT layout before it meets the spectrum.
//!
//! # Spectrum display
//!
//! ```text
//! image ─► forward_fft ─► modulus ─► intensity_window ─► u16 ─► fft_shift
//! ```

use crate::fft::{forward_fft, inverse_fft};
use crate::intensity::{Window, intensity_window, modulus};
use crate::mask::{MaskMode, apply_mask};
use crate::quantize::{ByteConversion, quantize_u16, to_byte_range};
use crate::shift::{ShiftDirection, fft_shift};
use crate::{OpsError, OpsResult};
use spectra_core::Plane;
use tracing::{debug, info};

/// Filters `image` in the frequency domain with a centered `mask` and
/// returns the 8-bit result.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if the mask and image differ in size.
pub fn mask_filter(image: &Plane<f32>, mask: &Plane<f32>, mode: MaskMode) -> OpsResult<ByteConversion> {
    if !image.same_dimensions(mask) {
        return Err(OpsError::SizeMismatch(format!(
            "input is {}x{}, mask is {}x{}",
            image.width(),
            image.height(),
            mask.width(),
            mask.height()
        )));
    }
    info!(width = image.width(), height = image.height(), %mode, "Mask filter");

    let mask = fft_shift(mask, ShiftDirection::Inverse);
    let spectrum = forward_fft(image);
    let filtered = apply_mask(&spectrum, &mask, mode)?;
    let spatial = inverse_fft(&filtered);

    let result = to_byte_range(&spatial);
    info!(min = result.min, max = result.max, mapping = ?result.mapping, "Filtered");
    Ok(result)
}

/// Renders the centered, windowed modulus of `image`'s spectrum as a
/// 16-bit plane.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] for an empty or inverted window.
pub fn spectrum(image: &Plane<f32>, window: Window) -> OpsResult<Plane<u16>> {
    info!(width = image.width(), height = image.height(), ?window, "Spectrum");

    let magnitude = modulus(&forward_fft(image));
    let windowed = intensity_window(&magnitude, window, 0.0, u16::MAX as f32)?;
    let quantized = quantize_u16(&windowed);
    debug!("Centering spectrum");
    Ok(fft_shift(&quantized, ShiftDirection::Forward))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteMapping;

    fn gradient(width: u32, height: u32) -> Plane<f32> {
        let data = (0..width * height)
            .map(|i| ((i % width) * 11 + (i / width) * 5) as f32)
            .collect();
        Plane::from_data(width, height, data).unwrap()
    }

    #[test]
    fn test_identity_mask_roundtrip() {
        let image = gradient(16, 16);
        assert!(image.data().iter().all(|&v| v <= 255.0));

        for mask_value in [1.0f32, 255.0] {
            let mask = Plane::filled(16, 16, mask_value);
            let out = mask_filter(&image, &mask, MaskMode::Binary).unwrap();
            let expected: Vec<u8> = image.data().iter().map(|&v| v as u8).collect();
            assert_eq!(out.image.data(), expected.as_slice());
        }
    }

    #[test]
    fn test_identity_mask_full_byte_range() {
        // 0..=255 exactly: reconstruction may overshoot by rounding error
        // and land in any branch, but the bytes must survive.
        let data: Vec<f32> = (0..256).map(|v| v as f32).collect();
        let image = Plane::from_data(16, 16, data).unwrap();
        let mask = Plane::filled(16, 16, 1.0f32);

        let out = mask_filter(&image, &mask, MaskMode::Binary).unwrap();
        let expected: Vec<u8> = (0..=255).collect();
        assert_eq!(out.image.data(), expected.as_slice());
    }

    #[test]
    fn test_multiply_mask_scales_image() {
        let image = gradient(8, 8).map(|&v| v / 2.0);
        let mask = Plane::filled(8, 8, 2.0f32);
        let out = mask_filter(&image, &mask, MaskMode::Multiply).unwrap();
        let expected: Vec<u8> = image.data().iter().map(|&v| (v * 2.0).round() as u8).collect();
        assert_eq!(out.image.data(), expected.as_slice());
    }

    #[test]
    fn test_dc_only_mask_gives_mean() {
        let image = Plane::from_data(4, 4, (0..16).map(|v| v as f32 * 10.0).collect()).unwrap();
        // Centered mask: DC sits at (w/2, h/2)
        let mut mask = Plane::<f32>::new(4, 4);
        mask.set(2, 2, 1.0);

        let out = mask_filter(&image, &mask, MaskMode::Binary).unwrap();
        assert_eq!(out.mapping, ByteMapping::Cast);
        assert!(out.image.data().iter().all(|&v| v == 75));
    }

    #[test]
    fn test_large_range_is_rescaled() {
        let image = gradient(8, 8).map(|&v| v + 1.0);
        let mask = Plane::filled(8, 8, 10.0f32);
        let out = mask_filter(&image, &mask, MaskMode::Multiply).unwrap();
        assert_eq!(out.mapping, ByteMapping::Rescale { shifted: false });
        assert_eq!(out.image.data()[0], 0);
        assert_eq!(*out.image.data().iter().max().unwrap(), 255);
    }

    #[test]
    fn test_mask_size_mismatch() {
        let image = gradient(8, 8);
        let mask = Plane::filled(8, 4, 1.0f32);
        let err = mask_filter(&image, &mask, MaskMode::Binary).unwrap_err();
        assert!(matches!(err, OpsError::SizeMismatch(_)));
    }

    #[test]
    fn test_spectrum_of_constant_image() {
        // DC = 100 * 64 = 6400 -> 6400 / 20000 * 65535
        let image = Plane::filled(8, 8, 100.0f32);
        let out = spectrum(&image, Window::SPECTRUM).unwrap();

        assert_eq!(out.get(4, 4), Some(20971));
        let nonzero = out.data().iter().filter(|&&v| v != 0).count();
        assert_eq!(nonzero, 1);
    }

    #[test]
    fn test_spectrum_saturates_bright_dc() {
        let image = Plane::filled(16, 16, 255.0f32);
        let out = spectrum(&image, Window::SPECTRUM).unwrap();
        assert_eq!(out.get(8, 8), Some(u16::MAX));
        assert_eq!(out.get(0, 0), Some(0));
    }

    #[test]
    fn test_spectrum_custom_window() {
        let image = Plane::filled(4, 4, 1.0f32);
        // DC = 16, window [0, 32] -> half scale
        let out = spectrum(&image, Window::new(0.0, 32.0).unwrap()).unwrap();
        assert_eq!(out.get(2, 2), Some(32768));
    }
}
