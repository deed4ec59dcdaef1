use hound::{SampleFormat, WavSpec};

use crate::error::{Error, Result};

/// Container parameters read from the input and copied verbatim to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub channel_count: u16,
    pub sample_width_bytes: u16,
    pub frame_count: u32,
    pub sample_rate: u32,
    /// Significant bits per sample, kept so the rewritten header is identical.
    pub bits_per_sample: u16,
}

impl AudioFormat {
    /// Integer PCM format whose samples use every bit of `sample_width_bytes`.
    pub fn pcm(channel_count: u16, sample_width_bytes: u16, frame_count: u32, sample_rate: u32) -> Self {
        Self {
            channel_count,
            sample_width_bytes,
            frame_count,
            sample_rate,
            bits_per_sample: sample_width_bytes * 8,
        }
    }

    pub fn from_wav_spec(spec: WavSpec, frame_count: u32) -> Result<Self> {
        if spec.sample_format != SampleFormat::Int {
            return Err(Error::unsupported(format!(
                "{}-bit float samples, only integer PCM is handled",
                spec.bits_per_sample
            )));
        }
        if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
            return Err(Error::unsupported(format!(
                "{} bits per sample",
                spec.bits_per_sample
            )));
        }
        Ok(Self {
            channel_count: spec.channels,
            sample_width_bytes: (spec.bits_per_sample + 7) / 8,
            frame_count,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        })
    }

    pub fn wav_spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channel_count,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format: SampleFormat::Int,
        }
    }

    pub fn sample_width(&self) -> Result<SampleWidth> {
        SampleWidth::try_from(self.sample_width_bytes)
    }

    /// Number of interleaved samples across all channels.
    pub fn sample_count(&self) -> usize {
        self.frame_count as usize * self.channel_count as usize
    }

    /// Size in bytes of the raw sample payload.
    pub fn byte_len(&self) -> usize {
        self.sample_count() * self.sample_width_bytes as usize
    }
}

/// Sample widths the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleWidth {
    One,
    Two,
    Four,
}

impl SampleWidth {
    pub fn bytes(self) -> usize {
        match self {
            SampleWidth::One => 1,
            SampleWidth::Two => 2,
            SampleWidth::Four => 4,
        }
    }
}

impl TryFrom<u16> for SampleWidth {
    type Error = Error;

    fn try_from(bytes: u16) -> Result<Self> {
        match bytes {
            1 => Ok(SampleWidth::One),
            2 => Ok(SampleWidth::Two),
            4 => Ok(SampleWidth::Four),
            other => Err(Error::unsupported(format!(
                "sample width of {other} bytes, expected 1, 2 or 4"
            ))),
        }
    }
}
