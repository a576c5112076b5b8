//! fft-spectrum - Fourier spectrum viewer
//!
//! Usage: fft-spectrum <InputFileName> <OutputFileName>

use anyhow::Result;
use spectra_cli::commands::spectrum::{self, SpectrumArgs};

fn main() -> Result<()> {
    let args: SpectrumArgs = spectra_cli::parse_args();
    spectra_cli::init(&args.global)?;
    spectrum::run(args)
}
