//! spectral-scale CLI
//!
//! Scales the spectral magnitude of a PCM WAV file and writes the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spectral_scale::{process_wav, ProcessOptions, DEFAULT_DISPLAY_POINTS};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "spectral-scale")]
#[command(about = "Scale the spectral magnitude of a WAV file, keeping phase", long_about = None)]
#[command(version)]
struct Cli {
    /// Input PCM WAV file
    input: PathBuf,

    /// Output WAV file, created or overwritten
    output: PathBuf,

    /// Magnitude multiplier applied to every frequency bin
    #[arg(short = 'k', long, allow_negative_numbers = true, value_parser = parse_factor)]
    factor: f64,

    /// Number of frequency bins and time samples to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_DISPLAY_POINTS)]
    points: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// Logging setup for the binary
#[derive(Debug, Clone)]
struct Config {
    verbose: bool,
    debug: bool,
}

fn init(config: &Config) {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(level)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn parse_factor(s: &str) -> Result<f64, String> {
    let factor: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if factor.is_finite() {
        Ok(factor)
    } else {
        Err(format!("factor must be finite, got {s}"))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init(&Config {
        verbose: cli.verbose,
        debug: cli.debug,
    });

    let options = ProcessOptions {
        magnitude_factor: cli.factor,
        num_points_to_display: cli.points,
    };
    info!("{} -> {}", cli.input.display(), cli.output.display());

    let mut stdout = std::io::stdout().lock();
    match process_wav(&cli.input, &cli.output, &options, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
