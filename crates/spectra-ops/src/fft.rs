//! 2D Fast Fourier Transform over planes.
//!
//! The transform is separable: a 1D FFT over every row, a transpose, a 1D
//! FFT over every (former) column, and a transpose back. Row passes run on
//! rayon when the `parallel` feature is enabled.
//!
//! # Scaling
//!
//! [`forward_fft`] is unnormalized, so the DC term equals the sum of all
//! pixels. [`inverse_fft`] divides by `width * height`, which makes the
//! pair an exact inverse up to rounding. Spectrum windows such as
//! [`Window::SPECTRUM`](crate::Window::SPECTRUM) are expressed in these
//! unnormalized units.
//!
//! Any size is accepted; `rustfft` plans mixed-radix and Bluestein
//! transforms for lengths that are not powers of two.

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftDirection, FftPlanner};
use spectra_core::Plane;
use tracing::trace;

/// Complex frequency-domain image.
pub type Spectrum = Plane<Complex<f32>>;

/// Forward 2D DFT of a real image.
///
/// # Example
///
/// ```rust
/// use spectra_core::Plane;
/// use spectra_ops::forward_fft;
///
/// let image = Plane::filled(4, 4, 2.0f32);
/// let spectrum = forward_fft(&image);
/// assert!((spectrum.data()[0].re - 32.0).abs() < 1e-4);
/// ```
pub fn forward_fft(image: &Plane<f32>) -> Spectrum {
    let (width, height) = image.dimensions();
    trace!(width, height, "forward_fft");

    let mut spectrum = image.map(|&v| Complex::new(v, 0.0));
    transform_2d(
        spectrum.data_mut(),
        width as usize,
        height as usize,
        FftDirection::Forward,
    );
    spectrum
}

/// Inverse 2D DFT, returning the real component scaled by `1 / (w * h)`.
///
/// The imaginary residue is discarded. For a spectrum that came from a
/// real image and was masked symmetrically it is zero up to rounding.
pub fn inverse_fft(spectrum: &Spectrum) -> Plane<f32> {
    let (width, height) = spectrum.dimensions();
    trace!(width, height, "inverse_fft");

    let mut work = spectrum.clone();
    transform_2d(
        work.data_mut(),
        width as usize,
        height as usize,
        FftDirection::Inverse,
    );

    let scale = 1.0 / (width as f64 * height as f64);
    work.map(|c| (c.re as f64 * scale) as f32)
}

/// In-place separable 2D transform of a row-major buffer.
fn transform_2d(data: &mut [Complex<f32>], width: usize, height: usize, direction: FftDirection) {
    let mut planner = FftPlanner::<f32>::new();
    let fft_row = planner.plan_fft(width, direction);
    let fft_col = planner.plan_fft(height, direction);

    // Rows
    process_rows(data, width, &*fft_row);

    // Columns, as rows of the transpose
    let mut transposed = transpose(data, width, height);
    process_rows(&mut transposed, height, &*fft_col);

    let restored = transpose(&transposed, height, width);
    data.copy_from_slice(&restored);
}

/// Transposes a `width x height` row-major buffer into `height x width`.
fn transpose(src: &[Complex<f32>], width: usize, height: usize) -> Vec<Complex<f32>> {
    let mut dst = vec![Complex::new(0.0, 0.0); width * height];
    for y in 0..height {
        for x in 0..width {
            dst[x * height + y] = src[y * width + x];
        }
    }
    dst
}

#[cfg(feature = "parallel")]
fn process_rows(data: &mut [Complex<f32>], len: usize, fft: &dyn Fft<f32>) {
    use rayon::prelude::*;

    let scratch_len = fft.get_inplace_scratch_len();
    data.par_chunks_mut(len).for_each_init(
        || vec![Complex::new(0.0, 0.0); scratch_len],
        |scratch, row| fft.process_with_scratch(row, scratch),
    );
}

#[cfg(not(feature = "parallel"))]
fn process_rows(data: &mut [Complex<f32>], len: usize, fft: &dyn Fft<f32>) {
    let mut scratch = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];
    for row in data.chunks_mut(len) {
        fft.process_with_scratch(row, &mut scratch);
    }
}
