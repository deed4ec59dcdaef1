//! Scale the spectral magnitude of PCM WAV audio while keeping its phase.
//!
//! The pipeline is linear: [`wav::read_wav`] → [`SampleMatrix::decode`] →
//! [`fft::transform`] → [`magnitude::scale_magnitude`] →
//! [`fft::inverse_transform`] → [`SampleMatrix::encode`] → [`wav::write_wav`].
//! [`api::process_wav`] runs it end to end.

pub mod api;
pub mod error;
pub mod fft;
pub mod format;
pub mod magnitude;
pub mod report;
pub mod sample;
pub mod wav;

pub use api::{process_wav, rescale_samples, ProcessOptions, DEFAULT_DISPLAY_POINTS};
pub use error::{Error, Result};
pub use format::{AudioFormat, SampleWidth};
pub use sample::{RawSampleBuffer, SampleData, SampleMatrix};
