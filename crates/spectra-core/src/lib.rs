//! # spectra-core
//!
//! Core types shared by the spectra-rs crates.
//!
//! - [`Plane`] - Dense single-channel 2D buffer, generic over the sample type
//! - [`Error`] - Error type for buffer construction
//!
//! ## Crate Structure
//!
//! ```text
//! spectra-core (this crate)
//!    ^
//!    |
//!    +-- spectra-io (image I/O, luminance conversion)
//!    +-- spectra-ops (FFT, masking, intensity mapping)
//!    +-- spectra-cli (fft-mask-filter, fft-spectrum)
//! ```
//!
//! A real image is a `Plane<f32>`, a spectrum is a `Plane<Complex<f32>>`
//! and a quantized result is a `Plane<u8>` or `Plane<u16>`. Every stage of
//! a pipeline consumes one plane and produces another.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod plane;

pub use error::{Error, Result};
pub use plane::Plane;
