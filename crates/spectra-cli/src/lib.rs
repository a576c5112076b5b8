//! spectra - frequency-domain image filtering tools
//!
//! Two binaries share this library:
//!
//! - `fft-mask-filter` - filter an image with a spectrum mask
//! - `fft-spectrum` - render an image's centered Fourier spectrum
//!
//! Examples:
//!   fft-mask-filter photo.png lowpass.png filtered.png
//!   fft-mask-filter photo.png ring.png out.png --mask-mode multiply -v
//!   fft-spectrum photo.png spectrum.png
//!   fft-spectrum photo.tiff spectrum.tiff --window-max 50000
//!   RUST_LOG=spectra_ops=trace fft-spectrum photo.png out.png

use anyhow::{Context, Result};
use clap::Args;
use clap::error::ErrorKind;

pub mod commands;

/// Options shared by both binaries.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    pub threads: usize,
}

/// Parses command-line arguments.
///
/// Usage errors (wrong argument count, bad values) print clap's
/// diagnostic to stderr and exit with status 1. `--help` and `--version`
/// exit 0.
pub fn parse_args<T: clap::Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    }
}

/// Sets up logging and the worker pool.
pub fn init(global: &GlobalArgs) -> Result<()> {
    init_logging(global.verbose);

    if global.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(global.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }
    Ok(())
}

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
pub fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
