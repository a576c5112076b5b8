//! Intensity operations on real planes.
//!
//! - [`modulus`] - magnitude of a complex spectrum
//! - [`min_max`] - sample range
//! - [`shift_scale`] - `(x + shift) * scale`
//! - [`rescale_intensity`] - stretch the input range onto an output range
//! - [`intensity_window`] - linear map of a fixed window with clamping
//!
//! Arithmetic is carried out in f64 and stored back as f32.

use crate::{OpsError, OpsResult, Spectrum};
use spectra_core::Plane;
use tracing::trace;

/// Input interval for [`intensity_window`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// Values at or below map to the output minimum.
    pub min: f32,
    /// Values at or above map to the output maximum.
    pub max: f32,
}

impl Window {
    /// Fixed window for displaying an unnormalized spectrum modulus.
    pub const SPECTRUM: Window = Window {
        min: 0.0,
        max: 20000.0,
    };

    /// Creates a window, rejecting empty or inverted intervals.
    pub fn new(min: f32, max: f32) -> OpsResult<Self> {
        if !(max > min) {
            return Err(OpsError::InvalidParameter(format!(
                "window maximum ({}) must be greater than minimum ({})",
                max, min
            )));
        }
        Ok(Self { min, max })
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::SPECTRUM
    }
}

/// Magnitude `|c|` of every spectrum sample.
pub fn modulus(spectrum: &Spectrum) -> Plane<f32> {
    spectrum.map(|c| c.norm())
}

/// Smallest and largest sample. NaN samples are ignored unless every
/// sample is NaN.
pub fn min_max(plane: &Plane<f32>) -> (f32, f32) {
    plane
        .data()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// `(x + shift) * scale` for every sample.
pub fn shift_scale(plane: &Plane<f32>, shift: f32, scale: f32) -> Plane<f32> {
    trace!(shift, scale, "shift_scale");
    let (shift, scale) = (shift as f64, scale as f64);
    plane.map(|&v| ((v as f64 + shift) * scale) as f32)
}

/// Linearly maps the plane's own `[min, max]` onto `[out_min, out_max]`.
///
/// A constant plane has no range to stretch and maps to `out_min`.
pub fn rescale_intensity(plane: &Plane<f32>, out_min: f32, out_max: f32) -> Plane<f32> {
    let (in_min, in_max) = min_max(plane);
    let (in_min, in_max) = (in_min as f64, in_max as f64);
    let (out_min, out_max) = (out_min as f64, out_max as f64);

    let scale = if in_min != in_max {
        (out_max - out_min) / (in_max - in_min)
    } else {
        0.0
    };
    let shift = out_min - in_min * scale;
    trace!(in_min, in_max, scale, shift, "rescale_intensity");

    plane.map(|&v| (v as f64 * scale + shift) as f32)
}

/// Maps `window` linearly onto `[out_min, out_max]`, clamping samples
/// outside the window to the nearest bound.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if the window is empty or
/// inverted.
pub fn intensity_window(
    plane: &Plane<f32>,
    window: Window,
    out_min: f32,
    out_max: f32,
) -> OpsResult<Plane<f32>> {
    let window = Window::new(window.min, window.max)?;
    let (w_min, w_max) = (window.min as f64, window.max as f64);
    let (o_min, o_max) = (out_min as f64, out_max as f64);
    let scale = (o_max - o_min) / (w_max - w_min);
    trace!(w_min, w_max, o_min, o_max, "intensity_window");

    Ok(plane.map(|&v| {
        let v = v as f64;
        let out = if v <= w_min {
            o_min
        } else if v >= w_max {
            o_max
        } else {
            (v - w_min) * scale + o_min
        };
        out as f32
    }))
}
