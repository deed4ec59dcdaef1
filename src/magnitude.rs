use rustfft::num_complex::Complex;

use crate::fft::Spectrum;

/// Multiplies every coefficient's magnitude by `factor` and re-applies its phase.
///
/// A negative factor negates both parts, which is the same point as scaling by
/// `|factor|` with the phase turned by π.
pub fn scale_magnitude(spectrum: &Spectrum, factor: f64) -> Spectrum {
    spectrum.map(|&c| {
        let (norm, phase) = c.to_polar();
        Complex::from_polar(norm * factor, phase)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleData;
    use ndarray::{array, Array1};

    fn spectrum(values: Vec<Complex<f64>>) -> Spectrum {
        SampleData::Mono(Array1::from(values))
    }

    fn close(a: Complex<f64>, b: Complex<f64>) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn unit_factor_is_identity() {
        let input = spectrum(vec![Complex::new(3.0, -4.0), Complex::new(-1.5, 0.25)]);
        let output = scale_magnitude(&input, 1.0);
        for (a, b) in input.iter().zip(output.iter()) {
            assert!(close(*a, *b));
        }
    }

    #[test]
    fn zero_factor_silences() {
        let input = spectrum(vec![Complex::new(3.0, -4.0), Complex::new(0.0, 7.0)]);
        assert!(scale_magnitude(&input, 0.0).iter().all(|c| c.norm() == 0.0));
    }

    #[test]
    fn magnitude_scales_and_phase_holds() {
        let input = spectrum(vec![Complex::new(3.0, -4.0), Complex::new(-2.0, 2.0)]);
        let output = scale_magnitude(&input, 2.5);
        for (a, b) in input.iter().zip(output.iter()) {
            assert!((b.norm() - a.norm() * 2.5).abs() < 1e-9);
            assert!((b.arg() - a.arg()).abs() < 1e-12);
        }
    }

    #[test]
    fn negative_factor_negates() {
        let input = spectrum(vec![Complex::new(3.0, -4.0)]);
        let output: Vec<_> = scale_magnitude(&input, -2.0).iter().copied().collect();
        assert!(close(output[0], Complex::new(-6.0, 8.0)));
    }

    #[test]
    fn keeps_multi_channel_shape() {
        let input = SampleData::Multi(array![
            [Complex::new(1.0, 0.0), Complex::new(0.0, 1.0)],
            [Complex::new(2.0, 2.0), Complex::new(-1.0, 0.0)],
        ]);
        assert_eq!(scale_magnitude(&input, 3.0).shape(), &[2, 2]);
    }
}
