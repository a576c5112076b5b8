//! # spectra-ops
//!
//! Frequency-domain image operations.
//!
//! # Modules
//!
//! - [`fft`] - Forward and inverse 2D FFT over [`Plane`](spectra_core::Plane)s
//! - [`shift`] - Quadrant swap that centers (or un-centers) the DC term
//! - [`mask`] - Spectrum masking (binary pass-through or weighted)
//! - [`intensity`] - Modulus, min/max, shift-scale, rescale, windowing
//! - [`quantize`] - Rounding to 8/16-bit and the byte-range mapping
//! - [`pipeline`] - The mask-filter and spectrum-display chains
//!
//! # Example
//!
//! ```rust
//! use spectra_core::Plane;
//! use spectra_ops::{pipeline, MaskMode};
//!
//! let image = Plane::from_data(4, 4, (0..16).map(|v| v as f32 * 10.0).collect()).unwrap();
//! let mask = Plane::filled(4, 4, 1.0f32);
//!
//! let filtered = pipeline::mask_filter(&image, &mask, MaskMode::Binary).unwrap();
//! assert_eq!(filtered.image.data()[5], 50);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod fft;
pub mod intensity;
pub mod mask;
pub mod pipeline;
pub mod quantize;
pub mod shift;

pub use error::{OpsError, OpsResult};
pub use fft::{Spectrum, forward_fft, inverse_fft};
pub use intensity::Window;
pub use mask::MaskMode;
pub use quantize::{ByteConversion, ByteMapping};
pub use shift::{ShiftDirection, fft_shift};
