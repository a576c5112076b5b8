//! End-to-end tests for the fft-mask-filter and fft-spectrum binaries.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use spectra_io::{ImageData, PixelData, PixelFormat};

const MASK_FILTER: &str = env!("CARGO_BIN_EXE_fft-mask-filter");
const SPECTRUM: &str = env!("CARGO_BIN_EXE_fft-spectrum");

fn run(bin: &str, args: &[&Path]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn binary")
}

fn run_str(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn binary")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_gray8(path: &Path, width: u32, height: u32, data: Vec<u8>) {
    spectra_io::write(path, &ImageData::from_u8(width, height, 1, data)).expect("write fixture");
}

fn gradient(width: u32, height: u32) -> Vec<u8> {
    (0..width * height)
        .map(|i| ((i % width) * 9 + (i / width) * 6) as u8)
        .collect()
}

struct Fixture {
    _dir: tempfile::TempDir,
    input: PathBuf,
    mask: PathBuf,
    output: PathBuf,
}

fn fixture(mask_value: u8) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let mask = dir.path().join("mask.png");
    let output = dir.path().join("output.png");
    write_gray8(&input, 16, 16, gradient(16, 16));
    write_gray8(&mask, 16, 16, vec![mask_value; 256]);
    Fixture {
        _dir: dir,
        input,
        mask,
        output,
    }
}

#[test]
fn mask_filter_wrong_arg_count_is_usage_error() {
    let fx = fixture(255);

    for args in [
        vec![],
        vec![fx.input.as_path()],
        vec![fx.input.as_path(), fx.mask.as_path()],
        vec![fx.input.as_path(), fx.mask.as_path(), fx.output.as_path(), fx.output.as_path()],
    ] {
        let out = run(MASK_FILTER, &args);
        assert_eq!(out.status.code(), Some(1), "args: {:?}", args);
        assert!(stderr(&out).contains("Usage"), "stderr: {}", stderr(&out));
    }
    assert!(!fx.output.exists());
}

#[test]
fn spectrum_wrong_arg_count_is_usage_error() {
    let fx = fixture(255);

    for args in [
        vec![],
        vec![fx.input.as_path()],
        vec![fx.input.as_path(), fx.output.as_path(), fx.mask.as_path()],
    ] {
        let out = run(SPECTRUM, &args);
        assert_eq!(out.status.code(), Some(1), "args: {:?}", args);
        assert!(stderr(&out).contains("Usage"));
    }
    assert!(!fx.output.exists());
}

#[test]
fn help_exits_zero() {
    let out = run_str(MASK_FILTER, &["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("InputFileName"));

    let out = run_str(SPECTRUM, &["--help"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn missing_input_reports_error() {
    let fx = fixture(255);
    let missing = fx.input.with_file_name("does_not_exist.png");

    let out = run(MASK_FILTER, &[&missing, &fx.mask, &fx.output]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("Error"), "stderr: {}", err);
    assert!(err.contains("does_not_exist.png"), "stderr: {}", err);
    assert!(!fx.output.exists());

    let out = run(SPECTRUM, &[&missing, &fx.output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Failed to load"));
}

#[test]
fn mismatched_mask_reports_error() {
    let fx = fixture(255);
    write_gray8(&fx.mask, 8, 8, vec![255; 64]);

    let out = run(MASK_FILTER, &[&fx.input, &fx.mask, &fx.output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("size mismatch"));
}

#[test]
fn identity_mask_reproduces_input() {
    for mask_value in [1u8, 255] {
        let fx = fixture(mask_value);

        let out = run(MASK_FILTER, &[&fx.input, &fx.mask, &fx.output]);
        assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));

        let result = spectra_io::read(&fx.output).unwrap();
        assert_eq!((result.width, result.height, result.channels), (16, 16, 1));
        assert_eq!(result.format, PixelFormat::U8);
        match result.data {
            PixelData::U8(data) => assert_eq!(data, gradient(16, 16)),
            other => panic!("unexpected data: {:?}", other),
        }
    }
}

#[test]
fn multiply_mode_flag_is_accepted() {
    let fx = fixture(1);
    let out = Command::new(MASK_FILTER)
        .arg(&fx.input)
        .arg(&fx.mask)
        .arg(&fx.output)
        .args(["--mask-mode", "multiply"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert!(fx.output.exists());

    let out = Command::new(MASK_FILTER)
        .arg(&fx.input)
        .arg(&fx.mask)
        .arg(&fx.output)
        .args(["--mask-mode", "bogus"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn spectrum_is_16bit_with_centered_dc() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flat.png");
    let output = dir.path().join("spectrum.tiff");
    write_gray8(&input, 8, 8, vec![100; 64]);

    let out = run(SPECTRUM, &[&input, &output]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));

    let result = spectra_io::read(&output).unwrap();
    assert_eq!(result.format, PixelFormat::U16);
    let data = match result.data {
        PixelData::U16(data) => data,
        other => panic!("unexpected data: {:?}", other),
    };
    // DC = 100 * 64 = 6400 -> 6400 / 20000 * 65535
    assert_eq!(data[4 * 8 + 4], 20971);
    assert_eq!(data.iter().filter(|&&v| v != 0).count(), 1);
}

#[test]
fn spectrum_rejects_inverted_window() {
    let fx = fixture(255);
    let out = Command::new(SPECTRUM)
        .arg(&fx.input)
        .arg(&fx.output)
        .args(["--window-min", "100", "--window-max", "10"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Invalid window"));
}
