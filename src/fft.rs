use std::sync::Arc;

use ndarray::ArrayView1;
use rustfft::num_complex::Complex;

use crate::{
    error::Result,
    format::SampleWidth,
    sample::{SampleData, SampleMatrix},
};

/// One complex coefficient per (frequency bin, channel).
pub type Spectrum = SampleData<Complex<f64>>;

pub struct Fft {
    forward: Arc<dyn rustfft::Fft<f64>>,
    inverse: Arc<dyn rustfft::Fft<f64>>,
}

impl Fft {
    pub fn new(size: usize) -> Self {
        let mut planner = rustfft::FftPlanner::new();
        Self {
            forward: planner.plan_fft_forward(size),
            inverse: planner.plan_fft_inverse(size),
        }
    }

    /// Unnormalized forward transform in place.
    pub fn forward(&self, buffer: &mut [Complex<f64>]) {
        self.forward.process(buffer);
    }

    /// Inverse transform in place, scaled by `1/N`.
    pub fn inverse(&self, buffer: &mut [Complex<f64>]) {
        self.inverse.process(buffer);
        fix_scale(buffer);
    }
}

pub fn fix_scale(buf: &mut [Complex<f64>]) {
    let scale = 1.0 / buf.len() as f64;
    for x in buf.iter_mut() {
        *x *= scale;
    }
}

/// Forward DFT of every channel along the frame axis.
pub fn transform(samples: &SampleMatrix) -> Result<Spectrum> {
    let samples = samples.to_f64();
    let frames = samples.frame_count();
    if frames == 0 {
        return Ok(samples.map(|&x| Complex::new(x, 0.0)));
    }

    let fft = Fft::new(frames);
    samples.map_channels(|channel: ArrayView1<'_, f64>| {
        let mut buf: Vec<_> = channel.iter().map(|&x| Complex::new(x, 0.0)).collect();
        fft.forward(&mut buf);
        Ok(buf)
    })
}

/// Inverse DFT of every channel; the imaginary part is dropped unconditionally
/// and the real part narrowed to `width`.
pub fn inverse_transform(spectrum: &Spectrum, width: SampleWidth) -> Result<SampleMatrix> {
    let frames = spectrum.frame_count();
    if frames == 0 {
        return Ok(SampleMatrix::quantize(&spectrum.map(|c| c.re), width));
    }

    let fft = Fft::new(frames);
    let real = spectrum.map_channels(|channel: ArrayView1<'_, Complex<f64>>| {
        let mut buf = channel.to_vec();
        fft.inverse(&mut buf);
        Ok(buf.iter().map(|x| x.re).collect::<Vec<f64>>())
    })?;
    Ok(SampleMatrix::quantize(&real, width))
}
