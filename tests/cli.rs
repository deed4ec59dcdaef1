//! Runs the spectral-scale binary.

use std::process::{Command, Output};

use hound::{SampleFormat, WavSpec, WavWriter};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spectral-scale"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn scales_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    let spec = WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(&input, spec).unwrap();
    for s in [100i16, -100, 50, -50] {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();

    let result = run(&[
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--factor",
        "-1",
        "--points",
        "2",
    ]);

    assert!(result.status.success(), "{}", stderr_string(&result));
    let stdout = stdout_string(&result);
    assert!(stdout.contains("Frequency bin 1: |S(1)| = "));
    assert!(stdout.contains("Time sample 1: "));
    assert!(!stdout.contains("Frequency bin 2"));
    assert!(output.exists());
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.wav");
    let result = run(&["/nonexistent/input.wav", output.to_str().unwrap(), "-k", "2"]);

    assert!(!result.status.success());
    assert!(stderr_string(&result).contains("cannot read"));
}

#[test]
fn factor_is_required() {
    let result = run(&["in.wav", "out.wav"]);
    assert!(!result.status.success());
}

#[test]
fn infinite_factor_is_rejected() {
    let result = run(&["in.wav", "out.wav", "--factor", "inf"]);
    assert!(!result.status.success());
    assert!(stderr_string(&result).contains("finite"));
}
