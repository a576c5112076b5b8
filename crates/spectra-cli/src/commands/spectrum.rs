//! Spectrum command
//!
//! Writes the centered, windowed Fourier modulus of an image as 16-bit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use spectra_io::ImageData;
use spectra_ops::{Window, pipeline};

use crate::GlobalArgs;

/// Arguments for `fft-spectrum`.
#[derive(Parser, Debug)]
#[command(name = "fft-spectrum")]
#[command(version, about = "Render the Fourier spectrum of an image")]
#[command(long_about = "
Forward-transforms the input, takes the modulus, maps the window
[--window-min, --window-max] onto 0..65535 and centers the zero frequency.
The transform is unnormalized: the center pixel is the sum of all input
pixels.

Examples:
  fft-spectrum photo.png spectrum.png
  fft-spectrum scan.tiff spectrum.tiff --window-max 50000
")]
pub struct SpectrumArgs {
    /// Input image
    #[arg(value_name = "InputFileName")]
    pub input: PathBuf,

    /// Output image (16-bit; PNG or TIFF)
    #[arg(value_name = "OutputFileName")]
    pub output: PathBuf,

    /// Modulus mapped to black
    #[arg(long, default_value_t = Window::SPECTRUM.min, allow_negative_numbers = true)]
    pub window_min: f32,

    /// Modulus mapped to white
    #[arg(long, default_value_t = Window::SPECTRUM.max)]
    pub window_max: f32,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Run the spectrum renderer.
pub fn run(args: SpectrumArgs) -> Result<()> {
    trace!(input = %args.input.display(), "spectrum::run");

    let window = Window::new(args.window_min, args.window_max).context("Invalid window")?;
    let image = super::load_luma(&args.input)?;
    debug!(width = image.width(), height = image.height(), "Loaded input");

    let spectrum = pipeline::spectrum(&image, window)?;

    super::save_image(&args.output, &ImageData::from_plane_u16(&spectrum))?;
    info!(output = %args.output.display(), "Wrote spectrum");

    if args.global.verbose > 0 {
        println!("Spectrum {} -> {}", args.input.display(), args.output.display());
    }

    Ok(())
}
