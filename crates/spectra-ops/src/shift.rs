//! Spectrum quadrant shift.
//!
//! A forward FFT leaves the zero-frequency term at `(0, 0)`. Shifting by
//! half the image size in each axis moves it to the center, which is the
//! layout people expect when looking at a spectrum or painting a mask.
//!
//! For odd sizes the two directions differ by one pixel:
//!
//! | Direction | Offset per axis | DC moves            |
//! |-----------|-----------------|---------------------|
//! | Forward   | `n / 2`         | `0 -> n / 2`        |
//! | Inverse   | `n - n / 2`     | `n / 2 -> 0`        |
//!
//! For even sizes both directions are the same swap and each is its own
//! inverse.

use spectra_core::Plane;

/// Which way to move the quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftDirection {
    /// FFT layout to centered layout.
    #[default]
    Forward,
    /// Centered layout back to FFT layout.
    Inverse,
}

/// Cyclically shifts a plane so the DC term moves between the origin and
/// the center.
///
/// # Example
///
/// ```rust
/// use spectra_core::Plane;
/// use spectra_ops::{fft_shift, ShiftDirection};
///
/// let mut plane = Plane::<u8>::new(4, 4);
/// plane.set(0, 0, 9);
/// let centered = fft_shift(&plane, ShiftDirection::Forward);
/// assert_eq!(centered.get(2, 2), Some(9));
/// ```
pub fn fft_shift<T: Copy>(plane: &Plane<T>, direction: ShiftDirection) -> Plane<T> {
    let (w, h) = (plane.width() as usize, plane.height() as usize);
    let (sx, sy) = match direction {
        ShiftDirection::Forward => (w / 2, h / 2),
        ShiftDirection::Inverse => (w - w / 2, h - h / 2),
    };

    let mut out = plane.clone();
    let dst = out.data_mut();
    for (y, row) in plane.rows().enumerate() {
        let dy = (y + sy) % h;
        let dst_row = &mut dst[dy * w..(dy + 1) * w];
        dst_row.copy_from_slice(row);
        dst_row.rotate_right(sx % w);
    }
    out
}
