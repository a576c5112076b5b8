//! fft-mask-filter - frequency-domain mask filter
//!
//! Usage: fft-mask-filter <InputFileName> <MaskFileName> <OutputFileName>

use anyhow::Result;
use spectra_cli::commands::mask_filter::{self, MaskFilterArgs};

fn main() -> Result<()> {
    let args: MaskFilterArgs = spectra_cli::parse_args();
    spectra_cli::init(&args.global)?;
    mask_filter::run(args)
}
