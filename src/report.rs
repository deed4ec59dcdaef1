//! Advisory console output: leading spectrum magnitudes and reconstructed samples.

use std::io::{self, Write};

use crate::{fft::Spectrum, sample::SampleMatrix};

/// `Frequency bin {i}: |S({i})| = {magnitude}` for the first `points` bins.
pub fn write_spectrum_magnitudes(out: &mut impl Write, spectrum: &Spectrum, points: usize) -> io::Result<()> {
    let magnitudes = spectrum.map(|c| c.norm());
    for i in 0..points.min(magnitudes.frame_count()) {
        if let Some(magnitude) = magnitudes.frame(i) {
            writeln!(out, "Frequency bin {i}: |S({i})| = {magnitude:?}")?;
        }
    }
    Ok(())
}

/// `Time sample {i}: {value}` for the first `points` frames.
pub fn write_time_samples(out: &mut impl Write, samples: &SampleMatrix, points: usize) -> io::Result<()> {
    for i in 0..points.min(samples.frame_count()) {
        if let Some(value) = samples.frame_label(i) {
            writeln!(out, "Time sample {i}: {value}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fft, sample::SampleData};
    use ndarray::{array, Array1};

    #[test]
    fn spectrum_lines() {
        let samples = SampleMatrix::I16(SampleData::Mono(Array1::from(vec![1, 1, 1, 1])));
        let spectrum = fft::transform(&samples).unwrap();
        let mut out = Vec::new();
        write_spectrum_magnitudes(&mut out, &spectrum, 2).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Frequency bin 0: |S(0)| = 4.0\nFrequency bin 1: |S(1)| = 0.0\n"
        );
    }

    #[test]
    fn multi_channel_magnitudes_keep_fractions() {
        let samples = SampleMatrix::I16(SampleData::Multi(array![[1, 2], [1, 2]]));
        let spectrum = fft::transform(&samples).unwrap();
        let mut out = Vec::new();
        write_spectrum_magnitudes(&mut out, &spectrum, 1).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Frequency bin 0: |S(0)| = [2.0, 4.0]\n");
    }

    #[test]
    fn time_sample_lines_stop_at_the_end() {
        let samples = SampleMatrix::I8(SampleData::Multi(array![[1, -1], [2, -2]]));
        let mut out = Vec::new();
        write_time_samples(&mut out, &samples, 24).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Time sample 0: [1, -1]\nTime sample 1: [2, -2]\n"
        );
    }

    #[test]
    fn zero_points_prints_nothing() {
        let samples = SampleMatrix::I32(SampleData::Mono(Array1::from(vec![5, 6])));
        let mut out = Vec::new();
        write_time_samples(&mut out, &samples, 0).unwrap();
        assert!(out.is_empty());
    }
}
