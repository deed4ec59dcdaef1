use std::{io::Write, path::Path};

use tracing::{info, warn};

use crate::{
    error::Result,
    fft::{self, Spectrum},
    format::AudioFormat,
    magnitude::scale_magnitude,
    report,
    sample::SampleMatrix,
    wav,
};

/// Bins and samples echoed to the diagnostics sink when nothing else is asked for.
pub const DEFAULT_DISPLAY_POINTS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessOptions {
    /// Multiplier applied to every spectral magnitude; any finite value.
    pub magnitude_factor: f64,
    pub num_points_to_display: usize,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            magnitude_factor: 1.0,
            num_points_to_display: DEFAULT_DISPLAY_POINTS,
        }
    }
}

/// Every intermediate of one in-memory pass.
#[derive(Debug, Clone)]
pub struct Rescaled {
    pub spectrum: Spectrum,
    pub modified: Spectrum,
    pub samples: SampleMatrix,
}

/// Forward transform, magnitude scaling and inverse transform without any I/O.
pub fn rescale_samples(samples: &SampleMatrix, factor: f64) -> Result<Rescaled> {
    let spectrum = fft::transform(samples)?;
    let modified = scale_magnitude(&spectrum, factor);
    let samples = fft::inverse_transform(&modified, samples.width())?;
    Ok(Rescaled {
        spectrum,
        modified,
        samples,
    })
}

/// Reads `input`, scales its spectral magnitude and writes the result to
/// `output` with the input's format. Returns the format written.
pub fn process_wav(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ProcessOptions,
    diagnostics: &mut impl Write,
) -> Result<AudioFormat> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let (format, raw) = wav::read_wav(input)?;
    info!(
        "read {}: {} frames, {} channels, {} bytes/sample, {} Hz",
        input.display(),
        format.frame_count,
        format.channel_count,
        format.sample_width_bytes,
        format.sample_rate
    );

    let samples = SampleMatrix::decode(raw, &format)?;
    let spectrum = fft::transform(&samples)?;
    if let Err(e) = report::write_spectrum_magnitudes(diagnostics, &spectrum, options.num_points_to_display) {
        warn!("failed to write spectrum diagnostics: {e}");
    }

    let modified = scale_magnitude(&spectrum, options.magnitude_factor);
    info!("scaled magnitudes by {}", options.magnitude_factor);

    let reconstructed = fft::inverse_transform(&modified, format.sample_width()?)?;
    if let Err(e) = report::write_time_samples(diagnostics, &reconstructed, options.num_points_to_display) {
        warn!("failed to write sample diagnostics: {e}");
    }

    wav::write_wav(output, &format, &reconstructed.encode())?;
    info!("wrote {}", output.display());
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleData;
    use ndarray::Array1;

    #[test]
    fn doubling_doubles_the_signal() {
        let samples = SampleMatrix::I16(SampleData::Mono(Array1::from(vec![100, -100, 50, -50])));
        let rescaled = rescale_samples(&samples, 2.0).unwrap();
        let expected = [200, -200, 100, -100];
        for (got, want) in rescaled.samples.to_i32_vec().iter().zip(expected) {
            assert!((got - want).abs() <= 1, "{got} vs {want}");
        }
    }

    #[test]
    fn modified_magnitudes_follow_the_factor() {
        let samples = SampleMatrix::I16(SampleData::Mono(Array1::from(vec![3, 1, -4, 1, 5, -9, 2, 6])));
        let rescaled = rescale_samples(&samples, 0.5).unwrap();
        for (before, after) in rescaled.spectrum.iter().zip(rescaled.modified.iter()) {
            assert!((before.norm() * 0.5 - after.norm()).abs() < 1e-9);
        }
    }

    #[test]
    fn defaults() {
        let options = ProcessOptions::default();
        assert_eq!(options.magnitude_factor, 1.0);
        assert_eq!(options.num_points_to_display, DEFAULT_DISPLAY_POINTS);
    }
}
