use std::fmt::{self, Debug, Display};

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::{
    error::{Error, Result},
    format::{AudioFormat, SampleWidth},
};

/// Interleaved little-endian sample bytes, exactly as stored in the container.
///
/// 8-bit payloads keep their on-disk unsigned bytes; the decoder reads them as
/// `i8` without removing the 128 offset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawSampleBuffer(Vec<u8>);

impl RawSampleBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

/// Signed integer PCM sample of a fixed byte width.
pub trait PcmSample: hound::Sample + Copy + Display + 'static {
    const WIDTH: usize;

    /// `bytes` holds exactly `WIDTH` little-endian bytes.
    fn from_le(bytes: &[u8]) -> Self;

    fn push_le(self, out: &mut Vec<u8>);

    fn to_f64(self) -> f64;

    /// Truncates toward zero, then narrows with two's-complement wrap-around.
    fn wrapping_from_f64(x: f64) -> Self;
}

macro_rules! impl_pcm_sample {
    ($($t:ty),*) => {
        $(
            impl PcmSample for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn from_le(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_le_bytes(raw)
                }

                fn push_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn wrapping_from_f64(x: f64) -> Self {
                    x as i64 as $t
                }
            }
        )*
    };
}

impl_pcm_sample!(i8, i16, i32);

/// Samples shaped `[frames]` for mono or `[frames, channels]` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleData<T> {
    Mono(Array1<T>),
    Multi(Array2<T>),
}

impl<T: Clone> SampleData<T> {
    /// Shapes frame-interleaved values; a single channel stays one-dimensional.
    pub fn from_interleaved(values: Vec<T>, frames: usize, channels: usize) -> Result<Self> {
        if channels == 0 {
            return Err(Error::unsupported("zero channels"));
        }
        if values.len() != frames * channels {
            return Err(Error::shape(format!(
                "{} samples cannot fill {frames} frames of {channels} channels",
                values.len()
            )));
        }
        if channels == 1 {
            Ok(SampleData::Mono(Array1::from(values)))
        } else {
            Ok(SampleData::Multi(Array2::from_shape_vec(
                (frames, channels),
                values,
            )?))
        }
    }

    /// Reassembles per-channel columns, each `frames` long.
    pub fn from_channels(channels: Vec<Vec<T>>, frames: usize) -> Result<Self> {
        if let Some(column) = channels.iter().find(|c| c.len() != frames) {
            return Err(Error::shape(format!(
                "channel of {} values among {frames}-frame channels",
                column.len()
            )));
        }
        match channels.len() {
            0 => Err(Error::unsupported("zero channels")),
            1 => Ok(SampleData::Mono(Array1::from(
                channels.into_iter().flatten().collect::<Vec<_>>(),
            ))),
            n => Ok(SampleData::Multi(Array2::from_shape_fn(
                (frames, n),
                |(frame, channel)| channels[channel][frame].clone(),
            ))),
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            SampleData::Mono(data) => data.shape(),
            SampleData::Multi(data) => data.shape(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.shape()[0]
    }

    pub fn channel_count(&self) -> usize {
        match self {
            SampleData::Mono(_) => 1,
            SampleData::Multi(data) => data.ncols(),
        }
    }

    pub fn channel(&self, index: usize) -> Option<ArrayView1<'_, T>> {
        match self {
            SampleData::Mono(data) => (index == 0).then(|| data.view()),
            SampleData::Multi(data) => {
                (index < data.ncols()).then(|| data.index_axis(Axis(1), index))
            }
        }
    }

    /// Applies `process` to every channel column and reassembles the result.
    pub fn map_channels<U: Clone>(
        &self,
        mut process: impl FnMut(ArrayView1<'_, T>) -> Result<Vec<U>>,
    ) -> Result<SampleData<U>> {
        let channels = match self {
            SampleData::Mono(data) => vec![process(data.view())?],
            SampleData::Multi(data) => data
                .axis_iter(Axis(1))
                .map(&mut process)
                .collect::<Result<Vec<_>>>()?,
        };
        SampleData::from_channels(channels, self.frame_count())
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> SampleData<U> {
        match self {
            SampleData::Mono(data) => SampleData::Mono(data.map(f)),
            SampleData::Multi(data) => SampleData::Multi(data.map(f)),
        }
    }

    /// Values in frame-major order, channels interleaved.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            SampleData::Mono(data) => Box::new(data.iter()),
            SampleData::Multi(data) => Box::new(data.iter()),
        }
    }

    pub fn frame(&self, index: usize) -> Option<Frame<'_, T>> {
        if index >= self.frame_count() {
            return None;
        }
        Some(match self {
            SampleData::Mono(data) => Frame::Mono(&data[index]),
            SampleData::Multi(data) => Frame::Multi(data.index_axis(Axis(0), index)),
        })
    }
}

/// One time index across all channels.
pub enum Frame<'a, T> {
    Mono(&'a T),
    Multi(ArrayView1<'a, T>),
}

impl<T> Frame<'_, T> {
    /// Scalar for mono, `[a, b, ...]` otherwise, each value drawn by `item`.
    fn write_with(
        &self,
        f: &mut fmt::Formatter<'_>,
        item: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        match self {
            Frame::Mono(value) => item(*value, f),
            Frame::Multi(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    item(value, f)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl<T: Display> Display for Frame<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |value, f| write!(f, "{value}"))
    }
}

/// Floats keep their fractional part, e.g. `300.0`.
impl<T: Debug> Debug for Frame<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |value, f| write!(f, "{value:?}"))
    }
}

/// Decoded PCM samples; the variant follows the sample width.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleMatrix {
    I8(SampleData<i8>),
    I16(SampleData<i16>),
    I32(SampleData<i32>),
}

impl SampleMatrix {
    /// Interprets `raw` as signed little-endian samples laid out by `format`.
    pub fn decode(raw: RawSampleBuffer, format: &AudioFormat) -> Result<Self> {
        if format.channel_count == 0 {
            return Err(Error::unsupported("zero channels"));
        }
        let width = format.sample_width()?;
        if raw.len() != format.byte_len() {
            return Err(Error::shape(format!(
                "{} bytes of samples, expected {} for {} frames of {} channels",
                raw.len(),
                format.byte_len(),
                format.frame_count,
                format.channel_count
            )));
        }

        let frames = format.frame_count as usize;
        let channels = format.channel_count as usize;
        let bytes = raw.into_inner();
        Ok(match width {
            SampleWidth::One => SampleMatrix::I8(decode_as(&bytes, frames, channels)?),
            SampleWidth::Two => SampleMatrix::I16(decode_as(&bytes, frames, channels)?),
            SampleWidth::Four => SampleMatrix::I32(decode_as(&bytes, frames, channels)?),
        })
    }

    /// Flattens to interleaved little-endian bytes in the original channel order.
    pub fn encode(&self) -> RawSampleBuffer {
        match self {
            SampleMatrix::I8(data) => encode_as(data),
            SampleMatrix::I16(data) => encode_as(data),
            SampleMatrix::I32(data) => encode_as(data),
        }
    }

    /// Narrows real values into the integer type of `width`.
    pub fn quantize(values: &SampleData<f64>, width: SampleWidth) -> Self {
        match width {
            SampleWidth::One => SampleMatrix::I8(values.map(|&x| i8::wrapping_from_f64(x))),
            SampleWidth::Two => SampleMatrix::I16(values.map(|&x| i16::wrapping_from_f64(x))),
            SampleWidth::Four => SampleMatrix::I32(values.map(|&x| i32::wrapping_from_f64(x))),
        }
    }

    pub fn width(&self) -> SampleWidth {
        match self {
            SampleMatrix::I8(_) => SampleWidth::One,
            SampleMatrix::I16(_) => SampleWidth::Two,
            SampleMatrix::I32(_) => SampleWidth::Four,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            SampleMatrix::I8(data) => data.shape(),
            SampleMatrix::I16(data) => data.shape(),
            SampleMatrix::I32(data) => data.shape(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.shape()[0]
    }

    pub fn channel_count(&self) -> usize {
        match self {
            SampleMatrix::I8(data) => data.channel_count(),
            SampleMatrix::I16(data) => data.channel_count(),
            SampleMatrix::I32(data) => data.channel_count(),
        }
    }

    pub fn to_f64(&self) -> SampleData<f64> {
        match self {
            SampleMatrix::I8(data) => data.map(|&x| x.to_f64()),
            SampleMatrix::I16(data) => data.map(|&x| x.to_f64()),
            SampleMatrix::I32(data) => data.map(|&x| x.to_f64()),
        }
    }

    /// Interleaved values widened to i32.
    #[cfg(test)]
    pub(crate) fn to_i32_vec(&self) -> Vec<i32> {
        match self {
            SampleMatrix::I8(data) => data.iter().map(|&x| x as i32).collect(),
            SampleMatrix::I16(data) => data.iter().map(|&x| x as i32).collect(),
            SampleMatrix::I32(data) => data.iter().copied().collect(),
        }
    }

    /// Display form of one frame, `None` past the end.
    pub fn frame_label(&self, index: usize) -> Option<String> {
        match self {
            SampleMatrix::I8(data) => data.frame(index).map(|f| f.to_string()),
            SampleMatrix::I16(data) => data.frame(index).map(|f| f.to_string()),
            SampleMatrix::I32(data) => data.frame(index).map(|f| f.to_string()),
        }
    }
}

fn decode_as<T: PcmSample>(bytes: &[u8], frames: usize, channels: usize) -> Result<SampleData<T>> {
    let values = bytes.chunks_exact(T::WIDTH).map(T::from_le).collect();
    SampleData::from_interleaved(values, frames, channels)
}

fn encode_as<T: PcmSample>(data: &SampleData<T>) -> RawSampleBuffer {
    let mut bytes = Vec::with_capacity(data.shape().iter().product::<usize>() * T::WIDTH);
    for &value in data.iter() {
        value.push_le(&mut bytes);
    }
    RawSampleBuffer::new(bytes)
}
