//! Mask filter command
//!
//! Filters an image in the Fourier domain with a centered mask image and
//! writes an 8-bit result.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use spectra_io::ImageData;
use spectra_ops::{MaskMode, pipeline};

use crate::GlobalArgs;

/// Arguments for `fft-mask-filter`.
#[derive(Parser, Debug)]
#[command(name = "fft-mask-filter")]
#[command(version, about = "Filter an image in the Fourier domain with a mask")]
#[command(long_about = "
Forward-transforms the input, keeps the frequencies selected by the mask,
transforms back and writes the result as 8-bit.

The mask is drawn with the zero frequency in the middle, as a spectrum is
usually displayed, and must match the input size.

Examples:
  fft-mask-filter photo.png lowpass.png filtered.png
  fft-mask-filter photo.png soft_ring.png out.png --mask-mode multiply
")]
pub struct MaskFilterArgs {
    /// Input image
    #[arg(value_name = "InputFileName")]
    pub input: PathBuf,

    /// Mask image, same size as the input, zero frequency at the center
    #[arg(value_name = "MaskFileName")]
    pub mask: PathBuf,

    /// Output image (8-bit)
    #[arg(value_name = "OutputFileName")]
    pub output: PathBuf,

    /// How mask values act on the spectrum: binary, multiply
    #[arg(short = 'm', long, default_value = "binary")]
    pub mask_mode: MaskMode,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Run the mask filter.
pub fn run(args: MaskFilterArgs) -> Result<()> {
    trace!(input = %args.input.display(), mask = %args.mask.display(), mode = %args.mask_mode, "mask_filter::run");

    let image = super::load_luma(&args.input)?;
    let mask = super::load_luma(&args.mask)?;
    debug!(width = image.width(), height = image.height(), "Loaded input and mask");

    let result = pipeline::mask_filter(&image, &mask, args.mask_mode)?;
    info!(min = result.min, max = result.max, mapping = ?result.mapping, "Converted to byte range");

    super::save_image(&args.output, &ImageData::from_plane_u8(&result.image))?;

    if args.global.verbose > 0 {
        println!(
            "Filtered {} with {} -> {} ({:?})",
            args.input.display(),
            args.mask.display(),
            args.output.display(),
            result.mapping
        );
    }

    Ok(())
}
